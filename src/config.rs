//! Run configuration for the copy-editing pass.
//!
//! All rule tables are plain data injected at pipeline construction and
//! immutable for the run: the layer-name decision table, the misspelling
//! replacement table, the button layer list, and the button allow-list.
//! [`PipelineConfig::default`] reproduces the tables of the reference design
//! system (Persian UI copy).

use serde::{Deserialize, Serialize};

use crate::classify::Role;

/// Configuration for the whole per-node rule pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Ordered (role, layer-name substrings) decision table. Iteration order
    /// is the tie-break order, so this is a `Vec`, not a map.
    pub layer_patterns: Vec<(Role, Vec<String>)>,
    /// Ordered misspelling table (incorrect token, corrected token).
    /// Corrections apply sequentially on the progressively-updated text, so
    /// declaration order is part of the contract.
    pub replacements: Vec<(String, String)>,
    /// Layer names validated as buttons. Exact match, unlike the substring
    /// containment used for classification.
    pub button_layers: Vec<String>,
    /// Single words permitted as a full button label.
    pub allowed_single_word_buttons: Vec<String>,
    /// Whether the word-count check consults the allow-list. The reference
    /// system defines the list but never consults it; false keeps that
    /// behavior.
    pub enforce_allow_list_on_word_count: bool,
    /// Maximum word count for button copy before a note is logged.
    pub max_button_words: usize,
    /// Imperative word flagged in button copy.
    pub forbidden_button_word: String,
    /// External grammar service settings.
    pub grammar: GrammarConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            layer_patterns: vec![
                (Role::Button, vec!["btn__label".to_string()]),
                (Role::Chip, vec!["chip__label".to_string()]),
                (
                    Role::Input,
                    vec![
                        "input__label".to_string(),
                        "input__hint".to_string(),
                        "input__placeholder".to_string(),
                    ],
                ),
                (Role::Error, vec!["input__error".to_string()]),
                (Role::Switch, vec!["switch__label".to_string()]),
                (Role::Checkbox, vec!["checkbox__label".to_string()]),
                (Role::Radio, vec!["radio__label".to_string()]),
                (
                    Role::Paragraph,
                    vec![
                        "paragraph__text".to_string(),
                        "body__text".to_string(),
                        "desc__text".to_string(),
                    ],
                ),
                (
                    Role::Title,
                    vec!["title__text".to_string(), "section__title".to_string()],
                ),
                (
                    Role::Hint,
                    vec!["hint__title".to_string(), "hint__body".to_string()],
                ),
            ],
            replacements: vec![
                ("باذگشت".to_string(), "بازگشت".to_string()),
                ("پرداحت".to_string(), "پرداخت".to_string()),
                ("جابما".to_string(), "جاباما".to_string()),
            ],
            button_layers: vec!["btn__label".to_string()],
            allowed_single_word_buttons: vec!["پرداخت".to_string()],
            enforce_allow_list_on_word_count: false,
            max_button_words: 3,
            forbidden_button_word: "کن".to_string(),
            grammar: GrammarConfig::default(),
        }
    }
}

/// Configuration for the external grammar-checking service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarConfig {
    /// Whether paragraph text is sent to the service at all.
    pub enabled: bool,
    /// Check endpoint, overridable for tests against a local mock server.
    pub endpoint: String,
    /// Language code sent with every request.
    pub language: String,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        GrammarConfig {
            enabled: true,
            endpoint: "https://api.languagetool.org/v2/check".to_string(),
            language: "fa".to_string(),
        }
    }
}
