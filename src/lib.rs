//! # Virast
//!
//! Rule-based copy editing for text layers in design documents.
//!
//! ## Features
//!
//! - Role classification from style names and layer-name patterns
//! - Role-specific punctuation normalization
//! - Known-misspelling correction from an ordered replacement table
//! - Advisory button-copy style checks
//! - Optional grammar pass against a LanguageTool-style service
//!
//! The host document model sits behind the [`document::DocumentHost`] trait;
//! [`pipeline::run_pass`] drives one pass over the current selection.

pub mod classify;
pub mod config;
pub mod document;
pub mod error;
pub mod grammar;
pub mod pipeline;
pub mod rules;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
