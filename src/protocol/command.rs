#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a new game from the initial position
    New,
    /// Load a position: `position startpos` or `position <fen fields>`
    Position(Vec<String>),
    /// List legal moves, optionally only those from one square
    Moves(Option<String>),
    /// Play a move in coordinate notation
    Move(String),
    Status,
    Fen,
    History,
    First,
    Back,
    Forward,
    Last,
    /// Let the automated opponent move for the side to move
    Go,
    Options,
    SetOption(Vec<String>),
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<String>>();

    let cmd = match parts[0] {
        "new" => Command::New,
        "position" => Command::Position(owned_parts()),
        "moves" => Command::Moves(parts.get(1).map(|v| (*v).to_string())),
        "move" => match parts.get(1) {
            Some(text) => Command::Move((*text).to_string()),
            None => Command::Unknown(trimmed.to_string()),
        },
        "status" => Command::Status,
        "fen" => Command::Fen,
        "history" => Command::History,
        "first" => Command::First,
        "back" => Command::Back,
        "forward" => Command::Forward,
        "last" => Command::Last,
        "go" => Command::Go,
        "options" => Command::Options,
        "setoption" => Command::SetOption(owned_parts()),
        "quit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
