#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the text input.
    TextChanged(String),
    /// User pressed Enter or clicked the Enter button.
    CommitRequested,
    /// Host reported its out-of-band validation flag.
    PendingChanged(bool),
    /// User clicked Delete on one row.
    EntryRemoved(String),
    /// User clicked Remove all.
    RemoveAllClicked,
    /// Host seeds the list, e.g. when the form is shown with a prior selection.
    EntriesRestored(Vec<String>),
}
