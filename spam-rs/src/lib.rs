//! spam-rs: Bayesian spam classifier
//!
//! Classifies text messages as spam or ham from per-word occurrence
//! counts gathered over labeled training messages.
//!
//! # Features
//!
//! - **Model**: word-count tables for both classes, bonus-weighted word
//!   spamicity and a log-space naive Bayes combiner over the most
//!   interesting words of a message
//! - **Shared model**: reader/writer locked wrapper for concurrent use
//! - **Mail payloads**: flattening of (multipart) RFC 5322 messages to text
//! - **Corpus loading**: training directories of mail files
//!
//! # Example
//!
//! ```
//! use spam_rs::Model;
//!
//! let mut model = Model::new();
//! for _ in 0..5 {
//!     model.train_spam("win free money now");
//! }
//! model.train_ham("meeting notes attached");
//!
//! let score = model.classify_text("free money", 15).unwrap();
//! assert!(score > 0.5);
//! ```
//!
//! # Modules
//!
//! - [`bayes`]: tokenizer, model and concurrent wrapper
//! - [`config`]: Configuration management
//! - [`corpus`]: Training corpus loading
//! - [`error`]: Error types and handling
//! - [`message`]: Mail payload extraction

pub mod bayes;
pub mod config;
pub mod corpus;
pub mod error;
pub mod message;

// Re-export commonly used types
pub use bayes::{get_words, Model, ModelStats, SharedModel, Verdict};
pub use config::{Config, ModelConfig};
pub use error::{Result, SpamError};
