use serde::{Deserialize, Serialize};

/// Name under which a QnA service is registered
pub type ServiceName = String;

/// A candidate answer returned by a question-answering service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QnaAnswer {
    /// Identifier of the matched entry in the knowledge base
    pub id: u64,
    /// Answer text
    pub answer: String,
    /// Match confidence on a 0-100 scale
    pub score: f32,
    /// Knowledge-base questions that matched the query
    pub questions: Vec<String>,
    /// Knowledge-base source the answer came from
    pub source: Option<String>,
}

/// Options controlling a knowledge-base query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Maximum number of candidate answers to return
    pub top: usize,
    /// Minimum confidence score for a candidate to be included
    pub score_threshold: f32,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            top: 3,
            score_threshold: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_options_defaults() {
        let options = QueryOptions::default();
        assert_eq!(options.top, 3);
        assert_eq!(options.score_threshold, 30.0);
    }
}
