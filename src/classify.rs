//! Role classification for text nodes.
//!
//! Classification is an ordered decision table, first match wins: the style
//! name prefix is the primary signal, the layer-name substring table the
//! fallback. A node with no match is [`Role::Unknown`] and is skipped by the
//! pipeline entirely.

use serde::{Deserialize, Serialize};

use crate::document::StyleLookup;

/// Functional category of a text node, driving which rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Button,
    Chip,
    Input,
    Error,
    Switch,
    Checkbox,
    Radio,
    Paragraph,
    Title,
    Hint,
    Label,
    /// No classification signal matched; the node is not processed.
    Unknown,
}

impl Role {
    /// Name of this role (for debugging and log output).
    pub fn name(&self) -> &'static str {
        match self {
            Role::Button => "button",
            Role::Chip => "chip",
            Role::Input => "input",
            Role::Error => "error",
            Role::Switch => "switch",
            Role::Checkbox => "checkbox",
            Role::Radio => "radio",
            Role::Paragraph => "paragraph",
            Role::Title => "title",
            Role::Hint => "hint",
            Role::Label => "label",
            Role::Unknown => "unknown",
        }
    }
}

/// Style-name prefixes checked before the layer-name table.
const STYLE_PREFIXES: &[(&str, Role)] = &[
    ("label/", Role::Label),
    ("paragraph/", Role::Paragraph),
    ("heading/", Role::Title),
];

/// Classifies text nodes from an ordered (role, layer-name substrings) table.
#[derive(Debug, Clone)]
pub struct RoleClassifier {
    patterns: Vec<(Role, Vec<String>)>,
}

impl RoleClassifier {
    /// Create a classifier from an ordered decision table.
    pub fn new(patterns: Vec<(Role, Vec<String>)>) -> Self {
        RoleClassifier { patterns }
    }

    /// Classify one node.
    ///
    /// A failed style lookup is not an error: `Failed` and `Absent` both fall
    /// through to the layer-name heuristic.
    pub fn classify(&self, layer_name: &str, style: &StyleLookup) -> Role {
        if let Some(style_name) = style.name() {
            let style_name = style_name.to_lowercase();
            for (prefix, role) in STYLE_PREFIXES {
                if style_name.starts_with(prefix) {
                    return *role;
                }
            }
        }

        for (role, patterns) in &self.patterns {
            if patterns.iter().any(|p| layer_name.contains(p.as_str())) {
                return *role;
            }
        }

        Role::Unknown
    }
}
