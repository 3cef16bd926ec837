use vcats_core::{CatId, Msg};

pub const HELP_TEXT: &str = "Commands: feed <id> | delete <id> | list | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
    Invalid(String),
}

/// Parses one line typed by the user. Blank lines are `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let verb = words.next()?.to_ascii_lowercase();
    let arg = words.next();
    if words.next().is_some() {
        return Some(Command::Invalid(format!("too many arguments: {}", line.trim())));
    }

    let command = match (verb.as_str(), arg) {
        ("feed", Some(raw)) => match parse_id(raw) {
            Some(cat_id) => Command::Dispatch(Msg::FeedClicked { cat_id }),
            None => Command::Invalid(format!("not a cat id: {raw}")),
        },
        ("delete", Some(raw)) => match parse_id(raw) {
            Some(cat_id) => Command::Dispatch(Msg::DeleteClicked { cat_id }),
            None => Command::Invalid(format!("not a cat id: {raw}")),
        },
        ("feed" | "delete", None) => Command::Invalid(format!("{verb} needs a cat id")),
        ("list", None) => Command::Dispatch(Msg::RedrawRequested),
        ("help", None) => Command::Help,
        ("quit" | "exit", None) => Command::Quit,
        _ => Command::Invalid(format!("unknown command: {}", line.trim())),
    };
    Some(command)
}

fn parse_id(raw: &str) -> Option<CatId> {
    raw.trim_start_matches('#').parse().ok()
}
