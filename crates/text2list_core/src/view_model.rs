use crate::FormState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Duplicates,
    MaxItems,
    Validation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub kind: FeedbackKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRowView {
    pub text: String,
}

/// Rows of the entry list, newest first, with a cap on how many are shown
/// before the rest scroll out of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryListView {
    pub rows: Vec<EntryRowView>,
    pub max_visible_items: usize,
    pub remove_label: String,
}

impl EntryListView {
    pub fn new(entries: &[String], max_visible_items: usize, remove_label: &str) -> Self {
        Self {
            rows: entries
                .iter()
                .map(|text| EntryRowView { text: text.clone() })
                .collect(),
            max_visible_items,
            remove_label: remove_label.to_string(),
        }
    }

    pub fn visible_rows(&self) -> &[EntryRowView] {
        &self.rows[..self.rows.len().min(self.max_visible_items)]
    }

    pub fn hidden_count(&self) -> usize {
        self.rows.len().saturating_sub(self.max_visible_items)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormViewModel {
    pub heading: String,
    pub placeholder: String,
    pub text_input: String,
    pub pending: bool,
    pub enter_enabled: bool,
    pub enter_label: String,
    pub remove_all_enabled: bool,
    pub remove_all_label: String,
    pub messages: Vec<FeedbackMessage>,
    pub list: EntryListView,
    pub dirty: bool,
}

impl FormViewModel {
    pub(crate) fn from_state(state: &FormState) -> Self {
        let config = state.config();
        let text = &config.text;
        let pending = state.is_pending();

        Self {
            heading: text.heading.clone(),
            placeholder: text.placeholder.clone(),
            text_input: state.text_input().to_string(),
            pending,
            enter_enabled: !pending && !state.text_input().trim().is_empty(),
            enter_label: if pending {
                text.pending_enter_button_text.clone()
            } else {
                text.enter_button_text.clone()
            },
            remove_all_enabled: !state.entries().is_empty(),
            remove_all_label: text.remove_all_text.clone(),
            messages: feedback_messages(state),
            list: EntryListView::new(
                state.entries(),
                config.max_visible_items,
                &text.remove_one_text,
            ),
            dirty: state.is_dirty(),
        }
    }
}

fn feedback_messages(state: &FormState) -> Vec<FeedbackMessage> {
    let feedback = state.feedback();
    let mut messages = Vec::new();

    let duplicates = feedback.duplicates();
    if !duplicates.is_empty() {
        messages.push(FeedbackMessage {
            kind: FeedbackKind::Duplicates,
            text: format!("You entered duplicate entries: {}", duplicates.join(", ")),
        });
    }
    if let Some(max_items) = &feedback.max_items {
        messages.push(FeedbackMessage {
            kind: FeedbackKind::MaxItems,
            text: max_items.clone(),
        });
    }
    if let Some(validation) = &feedback.validation {
        messages.push(FeedbackMessage {
            kind: FeedbackKind::Validation,
            text: format!(
                "{} Invalid entries: {}",
                validation.message,
                validation.invalid.join(", ")
            ),
        });
    }
    messages
}
