use pretty_assertions::assert_eq;
use std::sync::Arc;

use text2list_core::{
    update, EntryListView, EntryValidator, FeedbackKind, FormConfig, FormSettings, FormState, Msg,
};

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn submit(state: FormState, input: &str) -> FormState {
    let (state, _) = update(state, Msg::TextChanged(input.to_string()));
    update(state, Msg::CommitRequested).0
}

#[test]
fn buttons_follow_input_and_list() {
    let view = FormState::default().view();
    assert!(!view.enter_enabled);
    assert!(!view.remove_all_enabled);
    assert_eq!(view.enter_label, "Enter");
    assert_eq!(view.heading, "Product code/number");
    assert_eq!(view.placeholder, "1 or more codes accepted");

    let (state, _) = update(FormState::default(), Msg::TextChanged("  ".to_string()));
    assert!(!state.view().enter_enabled);

    let (state, _) = update(state, Msg::TextChanged("this is a text".to_string()));
    assert!(state.view().enter_enabled);

    let state = submit(state, "this is a text");
    let view = state.view();
    assert!(view.remove_all_enabled);
    assert!(!view.enter_enabled);
    assert_eq!(view.list.rows.len(), 4);
}

#[test]
fn list_caps_visible_rows() {
    let entries = list(&["a", "b", "c", "d", "e", "f"]);
    let view = EntryListView::new(&entries, 4, "Delete");

    let visible: Vec<&str> = view.visible_rows().iter().map(|r| r.text.as_str()).collect();
    assert_eq!(visible, vec!["a", "b", "c", "d"]);
    assert_eq!(view.hidden_count(), 2);
    assert_eq!(view.remove_label, "Delete");

    let short = EntryListView::new(&entries[..2], 4, "Delete");
    assert_eq!(short.visible_rows().len(), 2);
    assert_eq!(short.hidden_count(), 0);
}

#[test]
fn feedback_messages_render_in_order() {
    let settings = FormSettings {
        max_items: Some(2),
        ..FormSettings::default()
    };
    let validator: Arc<dyn EntryValidator> = Arc::new(|entry: &str| entry != "bad");
    let config = FormConfig::from_settings(settings, Some(validator)).unwrap();
    let (state, _) = update(FormState::new(config), Msg::EntriesRestored(list(&["a"])));
    let state = submit(state, "x x a bad y z");

    let messages = state.view().messages;
    let kinds: Vec<FeedbackKind> = messages.iter().map(|m| m.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FeedbackKind::Duplicates,
            FeedbackKind::MaxItems,
            FeedbackKind::Validation
        ]
    );
    assert_eq!(messages[0].text, "You entered duplicate entries: x, a");
    assert_eq!(messages[1].text, "Max number of entries is 2");
    assert_eq!(
        messages[2].text,
        "Entries need to be valid. Invalid entries: bad"
    );
    assert_eq!(state.entries(), list(&["x", "a"]).as_slice());
}
