use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::BanterResult;
use crate::telemetry::{TelemetryItem, TelemetryValue, TraceSeverity};
use crate::types::{QnaAnswer, QueryOptions};

/// Sink for application telemetry
///
/// Implemented by the external monitoring backend. Submissions may be
/// buffered; `flush` forces delivery of anything still pending.
pub trait TelemetryClient: Send + Sync {
    /// Submit a single telemetry item
    fn track(&self, item: TelemetryItem) -> BanterResult<()>;

    /// Flush any buffered telemetry to the backend
    fn flush(&self) -> BanterResult<()>;

    /// Record a named application event with structured properties
    fn track_event(
        &self,
        name: &str,
        properties: HashMap<String, TelemetryValue>,
    ) -> BanterResult<()> {
        self.track(TelemetryItem::Event {
            name: name.to_string(),
            properties,
        })
    }

    /// Record a scalar measurement
    fn track_metric(&self, name: &str, value: f64) -> BanterResult<()> {
        self.track(TelemetryItem::Metric {
            name: name.to_string(),
            value,
        })
    }

    /// Record a diagnostic trace message
    fn track_trace(&self, severity: TraceSeverity, message: &str) -> BanterResult<()> {
        self.track(TelemetryItem::Trace {
            severity,
            message: message.to_string(),
        })
    }
}

/// Question-answering backend
///
/// Implemented by the external knowledge-base service. Candidates come back
/// best match first, already ranked by the backend.
#[async_trait]
pub trait QnaService: Send + Sync {
    /// Query the knowledge base for candidate answers
    async fn get_answers(
        &self,
        query: &str,
        options: &QueryOptions,
    ) -> BanterResult<Vec<QnaAnswer>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTelemetry {
        items: Mutex<Vec<TelemetryItem>>,
    }

    impl TelemetryClient for RecordingTelemetry {
        fn track(&self, item: TelemetryItem) -> BanterResult<()> {
            self.items.lock().unwrap().push(item);
            Ok(())
        }

        fn flush(&self) -> BanterResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_convenience_methods_forward_to_track() {
        let client = RecordingTelemetry::default();

        let mut properties = HashMap::new();
        properties.insert("question".to_string(), "what is banter".into());
        client.track_event("qna_lookup", properties).unwrap();
        client.track_metric("qna_answer_count", 2.0).unwrap();
        client
            .track_trace(TraceSeverity::Warning, "no answer above threshold")
            .unwrap();

        let items = client.items.lock().unwrap();
        assert_eq!(items.len(), 3);
        assert!(matches!(&items[0], TelemetryItem::Event { name, .. } if name == "qna_lookup"));
        assert!(matches!(
            &items[1],
            TelemetryItem::Metric { name, value } if name == "qna_answer_count" && *value == 2.0
        ));
        assert!(matches!(
            &items[2],
            TelemetryItem::Trace { severity, .. } if *severity == TraceSeverity::Warning
        ));
    }

    struct CannedQna;

    #[async_trait]
    impl QnaService for CannedQna {
        async fn get_answers(
            &self,
            query: &str,
            _options: &QueryOptions,
        ) -> BanterResult<Vec<QnaAnswer>> {
            Ok(vec![QnaAnswer {
                id: 1,
                answer: format!("echo: {}", query),
                score: 90.0,
                questions: vec![query.to_string()],
                source: None,
            }])
        }
    }

    #[tokio::test]
    async fn test_qna_service_seam() {
        let service = CannedQna;
        let answers = service
            .get_answers("what is banter", &QueryOptions::default())
            .await
            .unwrap();

        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].answer, "echo: what is banter");
    }
}
