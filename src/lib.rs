//! # Xiphos
//!
//! A fast symmetric-delete spelling correction library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Frequency dictionaries from word lists or plain text corpora
//! - Bounded Levenshtein and Damerau-Levenshtein verification
//! - Single-word lookup with three verbosity modes
//! - Multi-word phrase correction with merge and split handling

pub mod analysis;
pub mod checker;
pub mod cli;
pub mod compound;
pub mod config;
pub mod dictionary;
pub mod distance;
pub mod edits;
pub mod error;
pub mod index;
pub mod lookup;
pub mod suggest;

pub mod prelude {
    pub use crate::checker::SpellChecker;
    pub use crate::config::SpellConfig;
    pub use crate::suggest::{Suggestion, Verbosity};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
