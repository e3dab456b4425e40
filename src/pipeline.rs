//! Per-node rule orchestration and the whole-selection pass driver.
//!
//! [`TextRulePipeline`] runs one classified node through the fixed rule
//! order: punctuation, spelling, button validation, then the grammar pass
//! for paragraphs. [`run_pass`] drives the pipeline over the host's current
//! selection, committing text only when it changed and notifying the user at
//! the edges of the run.

use log::{debug, info};

use crate::classify::{Role, RoleClassifier};
use crate::config::PipelineConfig;
use crate::document::{DocumentHost, TextNodeView, collect_text_nodes};
use crate::error::Result;
use crate::grammar::GrammarClient;
use crate::rules::{ButtonRule, PunctuationRule, RuleContext, SpellingRule, TextRule};

/// Notice shown when nothing is selected at invocation.
pub const EMPTY_SELECTION_NOTICE: &str = "هیچ فریمی انتخاب نشده است.";

/// Notice shown after the pass completes.
pub const PASS_COMPLETE_NOTICE: &str = "بررسی و اصلاح متن‌ها انجام شد.";

/// Note logged when the grammar service changed the text.
pub const GRAMMAR_NOTE: &str = "اصلاح با LanguageTool";

/// Result of processing one text node.
///
/// `change_log` entries appear in application order; `updated_text` is always
/// reachable from the input by total-string transforms only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleResult {
    /// Text after every rule ran.
    pub updated_text: String,
    /// Human-readable description of each applied fix or flagged issue.
    pub change_log: Vec<String>,
}

/// The per-node rule pipeline.
pub struct TextRulePipeline {
    classifier: RoleClassifier,
    rules: Vec<Box<dyn TextRule>>,
    grammar: Option<GrammarClient>,
}

impl TextRulePipeline {
    /// Build a pipeline from configuration tables.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let classifier = RoleClassifier::new(config.layer_patterns.clone());
        let rules: Vec<Box<dyn TextRule>> = vec![
            Box::new(PunctuationRule::new()),
            Box::new(SpellingRule::new(config.replacements.clone())),
            Box::new(ButtonRule::new(&config)?),
        ];
        let grammar = if config.grammar.enabled {
            Some(GrammarClient::new(&config.grammar))
        } else {
            None
        };

        Ok(TextRulePipeline {
            classifier,
            rules,
            grammar,
        })
    }

    /// Build a pipeline with the reference tables.
    pub fn with_defaults() -> Result<Self> {
        Self::new(PipelineConfig::default())
    }

    /// Classify one node without processing it.
    pub fn classify(&self, view: &TextNodeView) -> Role {
        self.classifier.classify(&view.layer_name, &view.style)
    }

    /// Run every rule over one node.
    ///
    /// Returns `None` for unclassified nodes: zero transforms, zero log
    /// entries, excluded from the commit step. The only suspension point is
    /// the grammar call, made for paragraph text when a client is configured.
    pub async fn process(&self, view: &TextNodeView) -> Result<Option<RuleResult>> {
        let role = self.classify(view);
        if role == Role::Unknown {
            return Ok(None);
        }
        debug!("{} classified as {}", view.layer_name, role.name());

        let ctx = RuleContext {
            role,
            layer_name: &view.layer_name,
        };
        let mut text = view.characters.clone();
        let mut change_log = Vec::new();

        for rule in &self.rules {
            let outcome = rule.apply(&ctx, &text);
            debug!(
                "rule {} on {}: {} note(s)",
                rule.name(),
                view.layer_name,
                outcome.notes.len()
            );
            text = outcome.text;
            change_log.extend(outcome.notes);
        }

        if role == Role::Paragraph
            && let Some(grammar) = &self.grammar
        {
            let corrected = grammar.check(&text).await?;
            if corrected != text {
                text = corrected;
                change_log.push(GRAMMAR_NOTE.to_string());
            }
        }

        Ok(Some(RuleResult {
            updated_text: text,
            change_log,
        }))
    }
}

impl std::fmt::Debug for TextRulePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRulePipeline")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("grammar", &self.grammar.is_some())
            .finish()
    }
}

/// Run one copy-editing pass over the host's current selection.
///
/// Takes the first selected node as the traversal root, processes its text
/// nodes strictly one at a time, and commits only nodes whose final text
/// differs from the original (font load first, then the text). A grammar or
/// font failure aborts the remaining pass; nodes already committed stay
/// committed.
pub async fn run_pass<H>(host: &mut H, pipeline: &TextRulePipeline) -> Result<()>
where
    H: DocumentHost,
{
    let selection = host.selection();
    let Some(root) = selection.first().copied() else {
        host.notify(EMPTY_SELECTION_NOTICE);
        return Ok(());
    };

    for node in collect_text_nodes(host, root) {
        let Some(view) = host.text_view(node) else {
            continue;
        };
        debug!("بررسی لایه: {}", view.layer_name);

        let Some(result) = pipeline.process(&view).await? else {
            continue;
        };

        if result.updated_text != view.characters {
            host.load_font(node).await?;
            host.set_characters(node, &result.updated_text).await?;
        }

        if !result.change_log.is_empty() {
            info!(
                "بررسی در {}: متن: {} | {}",
                view.layer_name,
                result.updated_text,
                result.change_log.join(" | ")
            );
        }
    }

    host.notify(PASS_COMPLETE_NOTICE);
    Ok(())
}
