//! Deterministic per-node text rules.
//!
//! Each rule is a total-string transform: it receives the current text plus
//! the node's classification context and returns the (possibly unchanged)
//! text together with human-readable notes. The pipeline chains rules in a
//! fixed order; notes accumulate in application order.
//!
//! # Available rules
//!
//! - [`punctuation::PunctuationRule`] - role-dependent sentence punctuation
//! - [`spelling::SpellingRule`] - ordered known-misspelling table
//! - [`button::ButtonRule`] - advisory button-copy checks (never mutates)

pub mod button;
pub mod punctuation;
pub mod spelling;

pub use button::*;
pub use punctuation::*;
pub use spelling::*;

use crate::classify::Role;

/// Classification context a rule may consult.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Classified role of the node.
    pub role: Role,
    /// Host layer name; the button rule gates on an exact match against the
    /// configured button layers.
    pub layer_name: &'a str,
}

/// Output of one rule application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Text after the rule ran. Equal to the input for advisory rules.
    pub text: String,
    /// Human-readable notes, one per applied fix or flagged issue.
    pub notes: Vec<String>,
}

impl RuleOutcome {
    /// An outcome that leaves the text unchanged and carries no notes.
    pub fn unchanged(text: &str) -> Self {
        RuleOutcome {
            text: text.to_string(),
            notes: Vec::new(),
        }
    }
}

/// Trait for the deterministic text rules chained by the pipeline.
pub trait TextRule: Send + Sync {
    /// Apply this rule to the current text.
    fn apply(&self, ctx: &RuleContext<'_>, text: &str) -> RuleOutcome;

    /// Get the name of this rule (for debugging and log output).
    fn name(&self) -> &'static str;
}
