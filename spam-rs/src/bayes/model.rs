//! Word-frequency spam model
//!
//! Each word gets a spamicity from how often it appeared in spam versus
//! ham training messages. A message is scored by combining the spamicities
//! of its most interesting words, the ones farthest from neutral.

use std::collections::HashMap;
use tracing::debug;

use super::tokenizer::get_words;
use super::types::{ModelStats, Verdict, WordScore};
use crate::config::ModelConfig;
use crate::error::{Result, SpamError};

/// Spamicity of a word that carries no information
pub const NEUTRAL: f64 = 0.5;

/// Words whose bonus-weighted count stays below this are scored neutral
pub const RARE_WORD_THRESHOLD: u64 = 5;

/// Default number of most interesting words combined per message
pub const DEFAULT_SAMPLES: usize = 15;

/// Spam model trained on labeled messages
#[derive(Debug, Clone)]
pub struct Model {
    config: ModelConfig,
    spam_words: HashMap<String, u64>,
    ham_words: HashMap<String, u64>,
    n_spam: u64,
    n_ham: u64,
}

impl Model {
    /// Create an empty model with default tunables
    pub fn new() -> Self {
        Self::from_valid_config(ModelConfig::default())
    }

    /// Create an empty model with custom tunables
    pub fn with_config(config: ModelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ModelConfig) -> Self {
        Self {
            config,
            spam_words: HashMap::new(),
            ham_words: HashMap::new(),
            n_spam: 0,
            n_ham: 0,
        }
    }

    /// Learn a spam message
    pub fn train_spam(&mut self, text: &str) {
        self.n_spam += 1;
        let words = Self::count_words(&mut self.spam_words, text);
        debug!("Learned spam message #{} ({} words)", self.n_spam, words);
    }

    /// Learn a ham message
    pub fn train_ham(&mut self, text: &str) {
        self.n_ham += 1;
        let words = Self::count_words(&mut self.ham_words, text);
        debug!("Learned ham message #{} ({} words)", self.n_ham, words);
    }

    /// Add one occurrence per word, returns the number of words counted
    fn count_words(counts: &mut HashMap<String, u64>, text: &str) -> usize {
        let words = get_words(text);
        for word in &words {
            *counts.entry(word.to_lowercase()).or_insert(0) += 1;
        }
        words.len()
    }

    /// Probability that a single word indicates spam
    pub fn classify_word(&self, word: &str) -> Result<f64> {
        self.ensure_trained()?;
        Ok(self.word_spamicity(word))
    }

    /// Probability that a message is spam, using the configured sample size
    pub fn classify(&self, text: &str) -> Result<f64> {
        self.classify_text(text, self.config.n_samples)
    }

    /// Probability that a message is spam, combining its `n_samples`
    /// most interesting words
    pub fn classify_text(&self, text: &str, n_samples: usize) -> Result<f64> {
        self.classify_text_detailed(text, n_samples)
            .map(|verdict| verdict.spamicity)
    }

    /// Classify a message and report the words the score was built from
    pub fn classify_text_detailed(&self, text: &str, n_samples: usize) -> Result<Verdict> {
        self.ensure_trained()?;

        let mut words: Vec<WordScore> = get_words(text)
            .into_iter()
            .map(|word| WordScore {
                word: word.to_string(),
                spamicity: self.word_spamicity(word),
            })
            .collect();

        // Stable, so equally interesting words keep message order
        words.sort_by(|a, b| interest(b.spamicity).total_cmp(&interest(a.spamicity)));
        words.truncate(n_samples);

        let log_spam: f64 = words.iter().map(|w| w.spamicity.ln()).sum();
        let log_ham: f64 = words.iter().map(|w| (1.0 - w.spamicity).ln()).sum();

        let spam_frequency = self.floor_underflow(log_spam.exp());
        let ham_frequency = self.floor_underflow(log_ham.exp());

        let spamicity = self.clamp(spam_frequency / (ham_frequency + spam_frequency));
        debug!(
            "Classified message: {:.6} from {} words",
            spamicity,
            words.len()
        );

        Ok(Verdict { spamicity, words })
    }

    fn word_spamicity(&self, word: &str) -> f64 {
        let key = word.to_lowercase();
        let spam_count = weighted(&self.spam_words, &key, self.config.spam_bonus);
        let ham_count = weighted(&self.ham_words, &key, self.config.ham_bonus);

        if spam_count.saturating_add(ham_count) < RARE_WORD_THRESHOLD {
            return NEUTRAL;
        }

        let max = self.max_spamicity();
        let ham_frequency = (ham_count as f64 / self.n_ham as f64).min(max);
        let spam_frequency = (spam_count as f64 / self.n_spam as f64).min(max);

        self.clamp(spam_frequency / (ham_frequency + spam_frequency))
    }

    fn ensure_trained(&self) -> Result<()> {
        if self.is_trained() {
            Ok(())
        } else {
            Err(SpamError::NotTrained)
        }
    }

    /// A product that underflowed to zero is replaced by the lower bound
    fn floor_underflow(&self, frequency: f64) -> f64 {
        if frequency == 0.0 {
            self.min_spamicity()
        } else {
            frequency
        }
    }

    fn clamp(&self, spamicity: f64) -> f64 {
        spamicity.clamp(self.min_spamicity(), self.max_spamicity())
    }

    /// Whether both classes have at least one training message
    pub fn is_trained(&self) -> bool {
        self.n_spam > 0 && self.n_ham > 0
    }

    /// Lowest probability the model returns
    pub fn min_spamicity(&self) -> f64 {
        self.config.epsilon
    }

    /// Highest probability the model returns
    pub fn max_spamicity(&self) -> f64 {
        1.0 - self.config.epsilon
    }

    /// Model tunables
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Get training counts (spam, ham)
    pub fn training_counts(&self) -> (u64, u64) {
        (self.n_spam, self.n_ham)
    }

    /// Distinct words seen in spam
    pub fn spam_vocabulary(&self) -> usize {
        self.spam_words.len()
    }

    /// Distinct words seen in ham
    pub fn ham_vocabulary(&self) -> usize {
        self.ham_words.len()
    }

    /// Snapshot of the training state
    pub fn stats(&self) -> ModelStats {
        ModelStats {
            spam_learned: self.n_spam,
            ham_learned: self.n_ham,
            spam_vocabulary: self.spam_vocabulary(),
            ham_vocabulary: self.ham_vocabulary(),
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

fn weighted(counts: &HashMap<String, u64>, word: &str, bonus: u32) -> u64 {
    counts
        .get(word)
        .copied()
        .unwrap_or(0)
        .saturating_mul(u64::from(bonus))
}

fn interest(spamicity: f64) -> f64 {
    (spamicity - NEUTRAL).abs()
}
