use crate::{update, Effect, FormConfig, FormState, FormViewModel, Msg};

type ValidationHook = Box<dyn FnMut(&[String])>;

/// Owns one form's state and forwards effects to the host's callbacks.
///
/// `on_add` receives the full list after every change and is called at most
/// once per user action. It never sees an aborted commit.
pub struct Text2ListController<F>
where
    F: FnMut(&[String]),
{
    state: FormState,
    on_add: F,
    on_validation_request: Option<ValidationHook>,
}

impl<F> Text2ListController<F>
where
    F: FnMut(&[String]),
{
    pub fn new(config: FormConfig, on_add: F) -> Self {
        Self {
            state: FormState::new(config),
            on_add,
            on_validation_request: None,
        }
    }

    /// Called with the pending tokens when an async-gated commit starts
    /// waiting. The host answers through [`Self::set_pending`].
    pub fn with_validation_hook(mut self, hook: impl FnMut(&[String]) + 'static) -> Self {
        self.on_validation_request = Some(Box::new(hook));
        self
    }

    pub fn on_text_change(&mut self, text: impl Into<String>) {
        self.dispatch(Msg::TextChanged(text.into()));
    }

    pub fn on_commit(&mut self) {
        self.dispatch(Msg::CommitRequested);
    }

    pub fn on_remove_one(&mut self, entry: &str) {
        self.dispatch(Msg::EntryRemoved(entry.to_string()));
    }

    pub fn on_remove_all(&mut self) {
        self.dispatch(Msg::RemoveAllClicked);
    }

    /// Reports the host's pending flag. A true-to-false transition releases
    /// a waiting commit.
    pub fn set_pending(&mut self, pending: bool) {
        self.dispatch(Msg::PendingChanged(pending));
    }

    pub fn restore_entries(&mut self, entries: Vec<String>) {
        self.dispatch(Msg::EntriesRestored(entries));
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            match effect {
                Effect::EntriesChanged(entries) => (self.on_add)(&entries),
                Effect::ValidationRequested { entries } => {
                    if let Some(hook) = self.on_validation_request.as_mut() {
                        hook(&entries);
                    }
                }
            }
        }
    }

    pub fn entries(&self) -> &[String] {
        self.state.entries()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn view(&self) -> FormViewModel {
        self.state.view()
    }

    /// Returns whether a re-render is needed and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }
}
