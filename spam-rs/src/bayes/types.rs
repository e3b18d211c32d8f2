//! Model stats and classification results

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Snapshot of a model's training state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStats {
    /// Spam messages learned
    pub spam_learned: u64,
    /// Ham messages learned
    pub ham_learned: u64,
    /// Distinct words seen in spam
    pub spam_vocabulary: usize,
    /// Distinct words seen in ham
    pub ham_vocabulary: usize,
}

/// A word selected for message scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordScore {
    /// Word as it appeared in the message
    pub word: String,
    /// Word spamicity
    pub spamicity: f64,
}

/// Message classification with the words that decided it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Message spamicity
    pub spamicity: f64,
    /// Most interesting words, farthest from neutral first
    pub words: Vec<WordScore>,
}

impl ModelStats {
    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Verdict {
    /// Whether the message leans towards spam
    pub fn is_spam(&self) -> bool {
        self.spamicity > 0.5
    }

    /// Single-line JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a verdict back from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpamError;

    #[test]
    fn test_verdict_json() {
        let verdict = Verdict {
            spamicity: 0.75,
            words: vec![WordScore {
                word: "Free".to_string(),
                spamicity: 0.9,
            }],
        };

        let json = verdict.to_json().unwrap();
        assert!(json.contains("\"spamicity\":0.75"));
        assert!(json.contains("\"word\":\"Free\""));
        assert_eq!(Verdict::from_json(&json).unwrap(), verdict);
    }

    #[test]
    fn test_invalid_verdict_json() {
        let result = Verdict::from_json("{\"spamicity\": \"high\"}");
        assert!(matches!(result, Err(SpamError::Json(_))));
    }

    #[test]
    fn test_stats_json() {
        let stats = ModelStats {
            spam_learned: 3,
            ham_learned: 2,
            spam_vocabulary: 10,
            ham_vocabulary: 7,
        };
        let json = stats.to_json().unwrap();
        assert!(json.contains("\"spam_learned\": 3"));
        assert!(json.contains("\"ham_vocabulary\": 7"));
    }
}
