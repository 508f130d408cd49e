//! Text-to-entries pipeline.
//!
//! [`run`] turns the raw text of one commit into a batch of new entries,
//! given the entries already in the list. It is pure: inputs are never
//! mutated and the same inputs always give the same result. Stages run in a
//! fixed order (tokenize, blank filter, validation, in-batch dedup, in-list
//! dedup, max count, merge) and each may end the run early when its stop
//! policy is set.
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use form_logging::form_debug;

use crate::config::{EntryValidator, Separators};

#[derive(Clone, Default)]
pub struct PipelineConfig {
    pub separators: Separators,
    pub stop_on_duplicate: bool,
    pub max_items: Option<usize>,
    pub stop_on_max_items_error: bool,
    pub validator: Option<Arc<dyn EntryValidator>>,
    pub stop_on_validation_error: bool,
}

impl PipelineConfig {
    pub fn with_validator(mut self, validator: impl EntryValidator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }
}

impl fmt::Debug for PipelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineConfig")
            .field("separators", &self.separators)
            .field("stop_on_duplicate", &self.stop_on_duplicate)
            .field("max_items", &self.max_items)
            .field("stop_on_max_items_error", &self.stop_on_max_items_error)
            .field("validator", &self.validator.as_ref().map(|_| "<fn>"))
            .field("stop_on_validation_error", &self.stop_on_validation_error)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    Validation,
    BatchDuplicates,
    ListDuplicates,
    MaxItems,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::Validation => write!(f, "invalid entries"),
            AbortReason::BatchDuplicates => write!(f, "duplicate entries in input"),
            AbortReason::ListDuplicates => write!(f, "entries already in list"),
            AbortReason::MaxItems => write!(f, "max number of entries exceeded"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted {
        /// New entries in batch order.
        added: Vec<String>,
        /// `added` followed by the previous list.
        merged: Vec<String>,
    },
    Aborted(AbortReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxItemsCheck {
    pub limit: usize,
    pub exceeded: bool,
}

/// What each stage found. `None` means the stage was never reached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PipelineReport {
    pub invalid: Option<Vec<String>>,
    pub batch_duplicates: Option<Vec<String>>,
    pub list_duplicates: Option<Vec<String>>,
    pub max_items: Option<MaxItemsCheck>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResult {
    pub outcome: Outcome,
    pub report: PipelineReport,
}

impl PipelineResult {
    fn aborted(reason: AbortReason, report: PipelineReport) -> Self {
        form_debug!("pipeline aborted: {}", reason);
        Self {
            outcome: Outcome::Aborted(reason),
            report,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self.outcome, Outcome::Aborted(_))
    }

    /// The new full list, or `None` when the run aborted.
    pub fn merged(&self) -> Option<&[String]> {
        match &self.outcome {
            Outcome::Accepted { merged, .. } => Some(merged),
            Outcome::Aborted(_) => None,
        }
    }
}

/// Runs the full pipeline for one commit.
pub fn run(raw_text: &str, existing: &[String], config: &PipelineConfig) -> PipelineResult {
    let mut report = PipelineReport::default();
    let mut batch = tokenize(raw_text, &config.separators);
    form_debug!("tokenized {} non-blank entries", batch.len());

    if let Some(validator) = &config.validator {
        let (valid, invalid): (Vec<&str>, Vec<&str>) =
            batch.into_iter().partition(|entry| validator.is_valid(entry));
        let any_invalid = !invalid.is_empty();
        form_debug!("validation: {} valid, {} invalid", valid.len(), invalid.len());
        report.invalid = Some(owned_vec(&invalid));
        if any_invalid && config.stop_on_validation_error {
            return PipelineResult::aborted(AbortReason::Validation, report);
        }
        batch = valid;
    }

    let (unique, repeated) = split_repeats(&batch);
    let any_repeated = !repeated.is_empty();
    report.batch_duplicates = Some(owned_vec(&repeated));
    if any_repeated && config.stop_on_duplicate {
        return PipelineResult::aborted(AbortReason::BatchDuplicates, report);
    }

    let known: HashSet<&str> = existing.iter().map(String::as_str).collect();
    let (already_listed, mut batch): (Vec<&str>, Vec<&str>) =
        unique.into_iter().partition(|entry| known.contains(entry));
    let any_listed = !already_listed.is_empty();
    report.list_duplicates = Some(owned_vec(&already_listed));
    if any_listed && config.stop_on_duplicate {
        return PipelineResult::aborted(AbortReason::ListDuplicates, report);
    }

    if let Some(limit) = config.max_items {
        let exceeded = batch.len() > limit || batch.len() + existing.len() > limit;
        report.max_items = Some(MaxItemsCheck { limit, exceeded });
        if exceeded {
            if config.stop_on_max_items_error {
                return PipelineResult::aborted(AbortReason::MaxItems, report);
            }
            let room = limit.saturating_sub(existing.len());
            form_debug!("truncating batch of {} to {}", batch.len(), room);
            batch.truncate(room);
        }
    }

    let added = owned_vec(&batch);
    let merged = added.iter().chain(existing).cloned().collect();
    PipelineResult {
        outcome: Outcome::Accepted { added, merged },
        report,
    }
}

/// Splits trimmed text on the separators and drops blank tokens.
/// Surviving tokens keep any surrounding whitespace the separators left.
pub fn tokenize<'t>(raw_text: &'t str, separators: &Separators) -> Vec<&'t str> {
    separators
        .split(raw_text.trim())
        .filter(|token| is_not_blank(token))
        .collect()
}

fn is_not_blank(token: &str) -> bool {
    !token.is_empty() && token.chars().any(|c| !c.is_whitespace())
}

/// Returns the first occurrence of every token, in order, and the tokens that
/// occur more than once, each listed once in the order it first repeated.
fn split_repeats<'t>(tokens: &[&'t str]) -> (Vec<&'t str>, Vec<&'t str>) {
    let mut seen = HashSet::with_capacity(tokens.len());
    let mut reported = HashSet::new();
    let mut unique = Vec::with_capacity(tokens.len());
    let mut repeated = Vec::new();
    for &token in tokens {
        if seen.insert(token) {
            unique.push(token);
        } else if reported.insert(token) {
            repeated.push(token);
        }
    }
    (unique, repeated)
}

fn owned_vec(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|token| (*token).to_owned()).collect()
}
