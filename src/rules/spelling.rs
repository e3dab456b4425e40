//! Known-misspelling correction from a fixed replacement table.

use super::{RuleContext, RuleOutcome, TextRule};

/// Replaces known misspellings, one table entry at a time.
///
/// Entries apply in declaration order, each on the text produced by the
/// previous entry, so a correction may interact with text introduced by an
/// earlier one. That sequencing is contractual, which is why the table is an
/// ordered `Vec` and not a map.
#[derive(Debug, Clone)]
pub struct SpellingRule {
    table: Vec<(String, String)>,
}

impl SpellingRule {
    /// Create a spelling rule from an ordered (incorrect, corrected) table.
    pub fn new(table: Vec<(String, String)>) -> Self {
        SpellingRule { table }
    }
}

impl TextRule for SpellingRule {
    fn apply(&self, _ctx: &RuleContext<'_>, text: &str) -> RuleOutcome {
        let mut updated = text.to_string();
        let mut notes = Vec::new();

        for (wrong, right) in &self.table {
            if updated.contains(wrong.as_str()) {
                updated = updated.replace(wrong.as_str(), right);
                notes.push(format!("اصلاح: «{wrong}» → «{right}»"));
            }
        }

        RuleOutcome {
            text: updated,
            notes,
        }
    }

    fn name(&self) -> &'static str {
        "spelling"
    }
}
