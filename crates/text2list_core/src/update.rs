use std::collections::HashSet;

use form_logging::{form_debug, form_info, form_warn};

use crate::pipeline::{self, Outcome};
use crate::{Effect, FormState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    form_logging::begin_action();
    let effects = match msg {
        Msg::TextChanged(text) => {
            state.set_text_input(text);
            Vec::new()
        }
        Msg::CommitRequested => {
            // Mirrors the disabled Enter button: blank input never commits.
            if state.text_input().trim().is_empty() {
                return (state, Vec::new());
            }
            if !state.config().async_validation {
                commit(&mut state)
            } else if state.commit_awaiting() {
                form_warn!("commit ignored: an earlier commit is still pending");
                Vec::new()
            } else {
                let entries: Vec<String> =
                    pipeline::tokenize(state.text_input(), &state.config().pipeline.separators)
                        .into_iter()
                        .map(ToOwned::to_owned)
                        .collect();
                form_info!("commit deferred until host validation of {} entries", entries.len());
                state.set_commit_awaiting(true);
                vec![Effect::ValidationRequested { entries }]
            }
        }
        Msg::PendingChanged(pending) => {
            let released = state.external_pending() && !pending;
            state.set_external_pending(pending);
            if released && state.commit_awaiting() {
                state.set_commit_awaiting(false);
                if state.text_input().trim().is_empty() {
                    form_debug!("pending commit released with empty input");
                    Vec::new()
                } else {
                    commit(&mut state)
                }
            } else {
                Vec::new()
            }
        }
        Msg::EntryRemoved(entry) => {
            if state.remove_entry(&entry) {
                form_info!("removed entry {:?}, {} left", entry, state.entries().len());
                vec![Effect::EntriesChanged(state.entries().to_vec())]
            } else {
                form_debug!("remove ignored: {:?} is not in the list", entry);
                Vec::new()
            }
        }
        Msg::RemoveAllClicked => {
            if state.entries().is_empty() {
                Vec::new()
            } else {
                form_info!("removed all {} entries", state.entries().len());
                state.set_entries(Vec::new());
                vec![Effect::EntriesChanged(Vec::new())]
            }
        }
        Msg::EntriesRestored(entries) => {
            let entries = restore_entries(entries);
            form_debug!("restored {} entries", entries.len());
            state.set_entries(entries);
            Vec::new()
        }
    };

    (state, effects)
}

fn commit(state: &mut FormState) -> Vec<Effect> {
    let result = pipeline::run(
        state.text_input(),
        state.entries(),
        &state.config().pipeline,
    );
    state.absorb_report(&result.report);

    match result.outcome {
        Outcome::Aborted(reason) => {
            form_warn!("commit aborted: {}", reason);
            Vec::new()
        }
        Outcome::Accepted { added, merged } => {
            state.clear_text_input();
            if added.is_empty() {
                form_info!("commit accepted with no new entries");
                return Vec::new();
            }
            form_info!("commit accepted {} new entries, {} total", added.len(), merged.len());
            state.set_entries(merged.clone());
            vec![Effect::EntriesChanged(merged)]
        }
    }
}

/// Host-provided lists go through the same blank and uniqueness rules as
/// committed ones.
fn restore_entries(entries: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .into_iter()
        .filter(|entry| !entry.trim().is_empty())
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}
