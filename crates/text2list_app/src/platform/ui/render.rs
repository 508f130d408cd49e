use text2list_core::{EntryListView, FeedbackKind, FormViewModel};

/// Renders the form as plain text lines, top to bottom.
pub fn render(view: &FormViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("== {} ==", view.heading));
    if view.text_input.is_empty() {
        lines.push(format!("> ({})", view.placeholder));
    } else {
        lines.push(format!("> {}", view.text_input));
    }
    lines.push(format!(
        "{}  {}",
        button(&view.remove_all_label, view.remove_all_enabled),
        button(&view.enter_label, view.enter_enabled)
    ));

    for message in &view.messages {
        let marker = match message.kind {
            FeedbackKind::Duplicates => "~",
            FeedbackKind::MaxItems | FeedbackKind::Validation => "!",
        };
        lines.push(format!("{marker} {}", message.text));
    }

    lines.extend(render_list(&view.list));
    lines
}

fn render_list(list: &EntryListView) -> Vec<String> {
    let mut lines: Vec<String> = list
        .visible_rows()
        .iter()
        .enumerate()
        .map(|(i, row)| format!("{:>3}. {}  [{}]", i + 1, row.text, list.remove_label))
        .collect();
    let hidden = list.hidden_count();
    if hidden > 0 {
        lines.push(format!("     ... and {hidden} more"));
    }
    lines
}

fn button(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{label}]")
    } else {
        format!("({label})")
    }
}
