//! External service registry for the Banter bot.
//!
//! The bot talks to two kinds of externally-managed services: a telemetry
//! backend and one or more named question-answering knowledge bases. This
//! crate holds the [`ServiceRegistry`] that aggregates references to both,
//! assembled once at startup and shared read-only with the dialog layer.

pub mod registry;

pub use registry::{QnaHandle, ServiceRegistry, TelemetryHandle};
