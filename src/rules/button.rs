//! Advisory style checks for button copy.

use regex::Regex;

use crate::config::PipelineConfig;
use crate::error::Result;

use super::{RuleContext, RuleOutcome, TextRule};

/// Flags style problems in button copy without touching the text.
///
/// Gated on an exact layer-name match against the configured button layers
/// (unlike classification, which matches substrings). The forbidden word is
/// detected twice, once by token comparison and once by a word-boundary
/// regex, and both notes are kept: the reference system emits both and the
/// duplication has not been confirmed as a bug.
#[derive(Debug)]
pub struct ButtonRule {
    button_layers: Vec<String>,
    allow_list: Vec<String>,
    enforce_allow_list: bool,
    max_words: usize,
    forbidden_word: String,
    forbidden_word_boundary: Regex,
}

impl ButtonRule {
    /// Create a button rule from the pipeline configuration.
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        let pattern = format!(r"\b{}\b", regex::escape(&config.forbidden_button_word));
        let forbidden_word_boundary = Regex::new(&pattern)
            .map_err(|e| crate::error::VirastError::Anyhow(anyhow::Error::from(e)))?;

        Ok(ButtonRule {
            button_layers: config.button_layers.clone(),
            allow_list: config.allowed_single_word_buttons.clone(),
            enforce_allow_list: config.enforce_allow_list_on_word_count,
            max_words: config.max_button_words,
            forbidden_word: config.forbidden_button_word.clone(),
            forbidden_word_boundary,
        })
    }

    fn is_button_layer(&self, layer_name: &str) -> bool {
        self.button_layers.iter().any(|l| l == layer_name)
    }

    fn is_allow_listed(&self, text: &str) -> bool {
        self.allow_list.iter().any(|w| w == text.trim())
    }
}

impl TextRule for ButtonRule {
    fn apply(&self, ctx: &RuleContext<'_>, text: &str) -> RuleOutcome {
        let mut outcome = RuleOutcome::unchanged(text);

        if !self.is_button_layer(ctx.layer_name) {
            return outcome;
        }

        let words: Vec<&str> = text.trim().split_whitespace().collect();
        let word_count = words.len();

        let exempt = self.enforce_allow_list && self.is_allow_listed(text);
        if word_count > self.max_words && !exempt {
            outcome
                .notes
                .push(format!("⛔️ دکمه بیشتر از ۳ کلمه دارد ({word_count} کلمه)."));
        }

        if words.iter().any(|w| *w == self.forbidden_word) {
            outcome.notes.push(format!(
                "⛔️ استفاده از «{}» در دکمه مجاز نیست.",
                self.forbidden_word
            ));
        }

        if self.forbidden_word_boundary.is_match(text) {
            outcome.notes.push(format!(
                "⛔️ کلمه '{}' در متن دکمه شناسایی شد (از طریق regex).",
                self.forbidden_word
            ));
        }

        outcome
    }

    fn name(&self) -> &'static str {
        "button"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Role;

    fn rule() -> ButtonRule {
        ButtonRule::new(&PipelineConfig::default()).unwrap()
    }

    fn button_ctx() -> RuleContext<'static> {
        RuleContext {
            role: Role::Button,
            layer_name: "btn__label",
        }
    }

    #[test]
    fn test_never_mutates_text() {
        let rule = rule();
        let text = "همین حالا پرداخت خود را کامل کن";
        let outcome = rule.apply(&button_ctx(), text);

        assert_eq!(outcome.text, text);
        assert!(!outcome.notes.is_empty());
    }

    #[test]
    fn test_short_copy_is_silent() {
        let rule = rule();
        let outcome = rule.apply(&button_ctx(), "سلام");

        assert_eq!(outcome.text, "سلام");
        assert!(outcome.notes.is_empty());
    }

    #[test]
    fn test_word_count_note_includes_count() {
        let rule = rule();
        let outcome = rule.apply(&button_ctx(), "یک دو سه چهار");

        assert_eq!(
            outcome.notes,
            vec!["⛔️ دکمه بیشتر از ۳ کلمه دارد (4 کلمه).".to_string()]
        );
    }

    #[test]
    fn test_forbidden_word_is_flagged_twice() {
        let rule = rule();
        let outcome = rule.apply(&button_ctx(), "ثبت کن");

        // Token check and regex check each emit their own note.
        assert_eq!(
            outcome.notes,
            vec![
                "⛔️ استفاده از «کن» در دکمه مجاز نیست.".to_string(),
                "⛔️ کلمه 'کن' در متن دکمه شناسایی شد (از طریق regex).".to_string(),
            ]
        );
    }

    #[test]
    fn test_non_button_layer_is_ignored() {
        let rule = rule();
        let ctx = RuleContext {
            role: Role::Button,
            layer_name: "card/btn__label/fa",
        };
        let outcome = rule.apply(&ctx, "یک دو سه چهار پنج کن");

        assert!(outcome.notes.is_empty());
    }

    #[test]
    fn test_allow_list_not_consulted_by_default() {
        // Reference behavior: the allow-list exists but the word-count check
        // ignores it.
        let mut config = PipelineConfig::default();
        config.allowed_single_word_buttons = vec!["یک دو سه چهار".to_string()];
        let rule = ButtonRule::new(&config).unwrap();

        let outcome = rule.apply(&button_ctx(), "یک دو سه چهار");
        assert_eq!(outcome.notes.len(), 1);
    }

    #[test]
    fn test_allow_list_exempts_when_enforced() {
        let mut config = PipelineConfig::default();
        config.allowed_single_word_buttons = vec!["یک دو سه چهار".to_string()];
        config.enforce_allow_list_on_word_count = true;
        let rule = ButtonRule::new(&config).unwrap();

        let outcome = rule.apply(&button_ctx(), "یک دو سه چهار");
        assert!(outcome.notes.is_empty());
    }

    #[test]
    fn test_deterministic_notes() {
        let rule = rule();
        let text = "این دکمه را حتما لمس کن";
        let first = rule.apply(&button_ctx(), text);
        let second = rule.apply(&button_ctx(), text);

        assert_eq!(first, second);
    }
}
