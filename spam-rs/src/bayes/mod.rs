//! Bayesian spam model
//!
//! Word-count tables trained on labeled messages, per-word spamicity and
//! message-level combination of the most interesting words.

pub mod model;
pub mod shared;
pub mod tokenizer;
pub mod types;

pub use model::Model;
pub use shared::SharedModel;
pub use tokenizer::{get_words, DELIMITERS};
pub use types::*;
