#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The list changed; carries the full new list for the consumer.
    EntriesChanged(Vec<String>),
    /// A commit is waiting on the host's pending flag. Carries the
    /// blank-filtered tokens the host may want to check.
    ValidationRequested { entries: Vec<String> },
}
