// banter-services/examples/basic_usage.rs

use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use banter_core::{
    logging::init_logging, qna_error, BanterError, BanterResult, QnaAnswer, QnaService,
    QueryOptions, TelemetryClient, TelemetryItem, TraceSeverity,
};
use banter_services::{QnaHandle, ServiceRegistry, TelemetryHandle};

/// Telemetry sink that prints every submission as a JSON line
struct ConsoleTelemetry;

impl TelemetryClient for ConsoleTelemetry {
    fn track(&self, item: TelemetryItem) -> BanterResult<()> {
        let line = serde_json::to_string(&item)
            .map_err(|e| BanterError::Serialization(e.to_string()))?;
        println!("telemetry> {}", line);
        Ok(())
    }

    fn flush(&self) -> BanterResult<()> {
        std::io::stdout()
            .flush()
            .map_err(|e| BanterError::Telemetry(e.to_string()))
    }
}

/// In-process stand-in for a hosted knowledge base
struct FaqService {
    entries: Vec<(&'static str, &'static str)>,
}

#[async_trait]
impl QnaService for FaqService {
    async fn get_answers(
        &self,
        query: &str,
        options: &QueryOptions,
    ) -> BanterResult<Vec<QnaAnswer>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(qna_error!("faq", "empty query"));
        }

        let answers = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, (question, _))| question.eq_ignore_ascii_case(query))
            .map(|(id, (question, answer))| QnaAnswer {
                id: id as u64,
                answer: (*answer).to_string(),
                score: 100.0,
                questions: vec![(*question).to_string()],
                source: Some("faq".to_string()),
            })
            .take(options.top)
            .collect();

        Ok(answers)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    println!("Banter Services Basic Usage Example");

    // Assemble the external services the way host configuration code would
    let telemetry: TelemetryHandle = Arc::new(ConsoleTelemetry);
    let faq: QnaHandle = Arc::new(FaqService {
        entries: vec![
            ("what is banter", "Banter is a question-answering chat bot."),
            (
                "where do answers come from",
                "Each named QnA service wraps an external knowledge base.",
            ),
        ],
    });

    let mut qna_services: HashMap<String, QnaHandle> = HashMap::new();
    qna_services.insert("faq".to_string(), faq);

    let registry = ServiceRegistry::new(Some(telemetry), Some(qna_services))?;

    // Look the service up by name and ask it a question
    println!("\n=== Knowledge Base Lookup ===");
    let question = "what is banter";
    let service = registry.qna_service("faq").expect("faq service is registered");
    let answers = service.get_answers(question, &QueryOptions::default()).await?;

    for answer in &answers {
        println!("   Q: {}", question);
        println!("   A: {} (score {:.0})", answer.answer, answer.score);
    }

    // Report the lookup through the shared telemetry handle
    println!("\n=== Telemetry ===");
    let mut properties = HashMap::new();
    properties.insert("question".to_string(), question.into());
    properties.insert("answers".to_string(), (answers.len() as u64).into());
    registry.telemetry().track_event("qna_lookup", properties)?;
    registry.telemetry().track_metric("qna_answer_count", answers.len() as f64)?;
    registry
        .telemetry()
        .track_trace(TraceSeverity::Information, "basic usage example finished")?;
    registry.telemetry().flush()?;

    Ok(())
}
