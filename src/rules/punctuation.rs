//! Role-dependent sentence punctuation.

use crate::classify::Role;

use super::{RuleContext, RuleOutcome, TextRule};

/// Note logged when a paragraph gains its trailing period.
pub const ADD_PERIOD_NOTE: &str = "افزودن نقطه انتهایی برای پاراگراف.";

/// Note logged when periods are stripped from non-paragraph copy.
pub const STRIP_PERIOD_NOTE: &str = "حذف نقطه از متن غیرپاراگرافی.";

/// Normalizes sentence punctuation by role.
///
/// The policy is a binary split, not per-role tuning: paragraph text ends
/// with a period, every other classified role carries none.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationRule;

impl PunctuationRule {
    /// Create a new punctuation rule.
    pub fn new() -> Self {
        PunctuationRule
    }
}

impl TextRule for PunctuationRule {
    fn apply(&self, ctx: &RuleContext<'_>, text: &str) -> RuleOutcome {
        if ctx.role == Role::Paragraph {
            if !text.trim().ends_with('.') {
                let mut updated = text.to_string();
                updated.push('.');
                return RuleOutcome {
                    text: updated,
                    notes: vec![ADD_PERIOD_NOTE.to_string()],
                };
            }
        } else if text.contains('.') {
            return RuleOutcome {
                text: text.replace('.', ""),
                notes: vec![STRIP_PERIOD_NOTE.to_string()],
            };
        }

        RuleOutcome::unchanged(text)
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(role: Role) -> RuleContext<'static> {
        RuleContext {
            role,
            layer_name: "layer",
        }
    }

    #[test]
    fn test_paragraph_gains_trailing_period() {
        let rule = PunctuationRule::new();
        let outcome = rule.apply(&ctx(Role::Paragraph), "این یک جمله است");

        assert_eq!(outcome.text, "این یک جمله است.");
        assert_eq!(outcome.notes, vec![ADD_PERIOD_NOTE.to_string()]);
    }

    #[test]
    fn test_paragraph_is_idempotent() {
        let rule = PunctuationRule::new();
        let first = rule.apply(&ctx(Role::Paragraph), "تمام شد");
        let second = rule.apply(&ctx(Role::Paragraph), &first.text);

        assert_eq!(second.text, first.text);
        assert!(second.notes.is_empty());
    }

    #[test]
    fn test_paragraph_trailing_whitespace_counts_as_unterminated() {
        let rule = PunctuationRule::new();
        let outcome = rule.apply(&ctx(Role::Paragraph), "جمله. ");

        // Trimmed text ends with a period, so nothing is appended.
        assert_eq!(outcome.text, "جمله. ");
        assert!(outcome.notes.is_empty());
    }

    #[test]
    fn test_non_paragraph_strips_every_period() {
        let rule = PunctuationRule::new();
        for role in [Role::Button, Role::Chip, Role::Title, Role::Label] {
            let outcome = rule.apply(&ctx(role), "ذخیره. شد.");
            assert!(!outcome.text.contains('.'), "role {:?}", role);
            assert_eq!(outcome.notes, vec![STRIP_PERIOD_NOTE.to_string()]);
        }
    }

    #[test]
    fn test_non_paragraph_without_period_is_silent() {
        let rule = PunctuationRule::new();
        let outcome = rule.apply(&ctx(Role::Button), "ذخیره");

        assert_eq!(outcome.text, "ذخیره");
        assert!(outcome.notes.is_empty());
    }
}
