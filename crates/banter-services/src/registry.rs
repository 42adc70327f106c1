use banter_core::{invalid_argument, BanterResult, QnaService, ServiceName, TelemetryClient};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Shared handle to a telemetry backend
pub type TelemetryHandle = Arc<dyn TelemetryClient>;

/// Shared handle to a question-answering backend
pub type QnaHandle = Arc<dyn QnaService>;

/// The bot's references to external services.
///
/// Built once at application startup from whatever configuration source the
/// host uses, then handed read-only to the dialog layer. A bot can draw on
/// several knowledge bases at once, so QnA services are keyed by name.
///
/// The registry never mutates after construction and holds only `Arc`
/// handles, so it can be shared freely across tasks.
#[derive(Clone)]
pub struct ServiceRegistry {
    telemetry: TelemetryHandle,
    qna_services: HashMap<ServiceName, QnaHandle>,
}

impl ServiceRegistry {
    /// Create a registry from the references assembled by the host.
    ///
    /// Both inputs arrive as `Option`s because either may be missing from the
    /// host configuration. Construction fails rather than producing a
    /// registry that cannot serve its consumers; an empty service map is
    /// accepted.
    pub fn new(
        telemetry: Option<TelemetryHandle>,
        qna_services: Option<HashMap<ServiceName, QnaHandle>>,
    ) -> BanterResult<Self> {
        let telemetry = telemetry.ok_or_else(|| invalid_argument!("telemetry"))?;
        let qna_services = qna_services.ok_or_else(|| invalid_argument!("qna_services"))?;

        debug!(qna_services = qna_services.len(), "service registry constructed");

        Ok(Self {
            telemetry,
            qna_services,
        })
    }

    /// Telemetry client for recording custom events, metrics and traces
    pub fn telemetry(&self) -> &TelemetryHandle {
        &self.telemetry
    }

    /// All registered QnA services, keyed by name
    pub fn qna_services(&self) -> &HashMap<ServiceName, QnaHandle> {
        &self.qna_services
    }

    /// Look up a single QnA service by name
    pub fn qna_service(&self, name: &str) -> Option<&QnaHandle> {
        self.qna_services.get(name)
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.qna_services.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ServiceRegistry")
            .field("qna_services", &names)
            .finish_non_exhaustive()
    }
}
