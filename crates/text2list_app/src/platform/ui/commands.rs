/// One line of terminal input, mapped to a form action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Paste-and-Enter: the whole line is the text input.
    Submit(String),
    /// Delete one row.
    Remove(String),
    RemoveAll,
    /// Host-side validation finished; drops the pending flag.
    Release,
    Help,
    Quit,
    Unknown(String),
    Empty,
}

pub const HELP: &str = "\
Type codes and press Enter to add them.
  :rm <entry>   remove one entry
  :clear        remove all entries
  :release      finish pending validation
  :help         show this help
  :quit         exit";

pub fn parse(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    let Some(rest) = trimmed.strip_prefix(':') else {
        return Command::Submit(line.to_string());
    };
    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };
    match (name, arg) {
        ("rm", entry) if !entry.is_empty() => Command::Remove(entry.to_string()),
        ("clear", "") => Command::RemoveAll,
        ("release", "") => Command::Release,
        ("help" | "h", "") => Command::Help,
        ("quit" | "q", "") => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
