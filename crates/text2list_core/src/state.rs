use std::sync::Arc;

use crate::pipeline::PipelineReport;
use crate::view_model::FormViewModel;
use crate::FormConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFeedback {
    pub message: String,
    pub invalid: Vec<String>,
}

/// User-facing warnings left behind by the latest commits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feedback {
    pub validation: Option<ValidationFeedback>,
    pub batch_duplicates: Vec<String>,
    pub list_duplicates: Vec<String>,
    pub max_items: Option<String>,
}

impl Feedback {
    /// Folds a pipeline report in. Stages the run never reached keep the
    /// message from an earlier commit.
    pub(crate) fn absorb(&mut self, report: &PipelineReport, validation_message: &str) {
        if let Some(invalid) = &report.invalid {
            self.validation = (!invalid.is_empty()).then(|| ValidationFeedback {
                message: validation_message.to_string(),
                invalid: invalid.clone(),
            });
        }
        // Duplicate feedback always describes the latest batch, so reaching
        // the in-batch stage drops whatever the list stage said last time.
        if let Some(duplicates) = &report.batch_duplicates {
            self.batch_duplicates = duplicates.clone();
            self.list_duplicates.clear();
        }
        if let Some(duplicates) = &report.list_duplicates {
            self.list_duplicates = duplicates.clone();
        }
        if let Some(check) = report.max_items {
            self.max_items = check
                .exceeded
                .then(|| format!("Max number of entries is {}", check.limit));
        }
    }

    /// Batch and list duplicates together, each entry once.
    pub fn duplicates(&self) -> Vec<String> {
        let mut all = self.batch_duplicates.clone();
        for entry in &self.list_duplicates {
            if !all.contains(entry) {
                all.push(entry.clone());
            }
        }
        all
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    config: Arc<FormConfig>,
    text_input: String,
    entries: Vec<String>,
    feedback: Feedback,
    external_pending: bool,
    commit_awaiting: bool,
    dirty: bool,
}

impl FormState {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config: Arc::new(config),
            ..Self::default()
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn view(&self) -> FormViewModel {
        FormViewModel::from_state(self)
    }

    pub fn text_input(&self) -> &str {
        &self.text_input
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// True while a commit waits on the host, or the host reports pending work.
    pub fn is_pending(&self) -> bool {
        self.commit_awaiting || self.external_pending
    }

    pub(crate) fn external_pending(&self) -> bool {
        self.external_pending
    }

    pub(crate) fn commit_awaiting(&self) -> bool {
        self.commit_awaiting
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_text_input(&mut self, text: String) {
        if self.text_input != text {
            self.text_input = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn clear_text_input(&mut self) {
        self.set_text_input(String::new());
    }

    pub(crate) fn set_entries(&mut self, entries: Vec<String>) {
        if self.entries != entries {
            self.entries = entries;
            self.mark_dirty();
        }
    }

    /// Removes `entry`, returning whether it was present.
    pub(crate) fn remove_entry(&mut self, entry: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|existing| existing != entry);
        let removed = self.entries.len() != before;
        if removed {
            self.mark_dirty();
        }
        removed
    }

    pub(crate) fn absorb_report(&mut self, report: &PipelineReport) {
        let before = self.feedback.clone();
        self.feedback
            .absorb(report, &self.config.text.validation_error_message);
        if self.feedback != before {
            self.mark_dirty();
        }
    }

    pub(crate) fn set_external_pending(&mut self, pending: bool) {
        if self.external_pending != pending {
            self.external_pending = pending;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_commit_awaiting(&mut self, awaiting: bool) {
        if self.commit_awaiting != awaiting {
            self.commit_awaiting = awaiting;
            self.mark_dirty();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
