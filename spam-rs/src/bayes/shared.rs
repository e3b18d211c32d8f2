//! Model shared between tasks
//!
//! Training takes the write lock and classification the read lock, so
//! classifications never observe a half-applied training call.

use std::sync::Arc;
use tokio::sync::RwLock;

use super::model::Model;
use super::types::{ModelStats, Verdict};
use crate::error::Result;

/// Cloneable handle to a model behind a reader/writer lock
#[derive(Debug, Clone, Default)]
pub struct SharedModel {
    model: Arc<RwLock<Model>>,
}

impl SharedModel {
    /// Wrap a model for concurrent use
    pub fn new(model: Model) -> Self {
        Self {
            model: Arc::new(RwLock::new(model)),
        }
    }

    /// Learn a spam message
    pub async fn train_spam(&self, text: &str) {
        self.model.write().await.train_spam(text);
    }

    /// Learn a ham message
    pub async fn train_ham(&self, text: &str) {
        self.model.write().await.train_ham(text);
    }

    /// Probability that a single word indicates spam
    pub async fn classify_word(&self, word: &str) -> Result<f64> {
        self.model.read().await.classify_word(word)
    }

    /// Probability that a message is spam
    pub async fn classify_text(&self, text: &str, n_samples: usize) -> Result<f64> {
        self.model.read().await.classify_text(text, n_samples)
    }

    /// Classify a message and report the words the score was built from
    pub async fn classify_text_detailed(&self, text: &str, n_samples: usize) -> Result<Verdict> {
        self.model.read().await.classify_text_detailed(text, n_samples)
    }

    /// Snapshot of the training state
    pub async fn stats(&self) -> ModelStats {
        self.model.read().await.stats()
    }
}

impl From<Model> for SharedModel {
    fn from(model: Model) -> Self {
        Self::new(model)
    }
}
