//! Line-oriented text protocol for driving a [`Game`] from a terminal or a
//! front end.
//!
//! One command per line; output is flushed after every command. Errors are
//! reported as `error: ...` lines and never end the session.

use std::fmt;
use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::board::{parse_move, Color, MoveError, MoveParseError, PositionError, Square, SquareError};
use crate::game::{Game, MoveReport};
use crate::selector::RandomSelector;

pub mod command;
pub mod options;

use command::{parse_command, Command};
use options::{
    color_name, parse_setoption, OpponentKind, OptionAction, OptionError, SessionOptions,
};

/// Error type for commands that could not be carried out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Position string could not be loaded
    InvalidPosition(PositionError),
    /// Move text could not be parsed
    InvalidMove { text: String, error: MoveParseError },
    /// Square name could not be parsed
    InvalidSquare(SquareError),
    /// The game refused the move
    Rejected(MoveError),
    /// Command is missing a required argument
    MissingArgument(&'static str),
    /// `setoption` named an unknown option or gave it an unusable value
    InvalidOption(OptionError),
    /// Unrecognised command
    UnknownCommand(String),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::InvalidPosition(e) => write!(f, "invalid position: {e}"),
            ProtocolError::InvalidMove { text, error } => {
                write!(f, "invalid move '{text}': {error}")
            }
            ProtocolError::InvalidSquare(e) => write!(f, "invalid square: {e}"),
            ProtocolError::Rejected(e) => write!(f, "move rejected: {e}"),
            ProtocolError::MissingArgument(what) => write!(f, "missing argument: {what}"),
            ProtocolError::InvalidOption(e) => write!(f, "{e}"),
            ProtocolError::UnknownCommand(line) => write!(f, "unknown command '{line}'"),
        }
    }
}

impl std::error::Error for ProtocolError {}

impl From<PositionError> for ProtocolError {
    fn from(e: PositionError) -> Self {
        ProtocolError::InvalidPosition(e)
    }
}

impl From<MoveError> for ProtocolError {
    fn from(e: MoveError) -> Self {
        ProtocolError::Rejected(e)
    }
}

impl From<OptionError> for ProtocolError {
    fn from(e: OptionError) -> Self {
        ProtocolError::InvalidOption(e)
    }
}

impl From<SquareError> for ProtocolError {
    fn from(e: SquareError) -> Self {
        ProtocolError::InvalidSquare(e)
    }
}

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

fn build_opponent(options: &SessionOptions) -> RandomSelector {
    match options.seed {
        Some(seed) => RandomSelector::seeded(seed),
        None => RandomSelector::new(),
    }
}

/// Game plus session options and the automated opponent.
pub struct Session {
    game: Game,
    options: SessionOptions,
    opponent: RandomSelector,
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Session::with_options(SessionOptions::new())
    }

    #[must_use]
    pub fn with_options(options: SessionOptions) -> Self {
        let opponent = build_opponent(&options);
        Session {
            game: Game::new(),
            options,
            opponent,
        }
    }

    #[inline]
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Run one command, writing its response to `out`.
    pub fn handle(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        let flow = match self.dispatch(command, out)? {
            Ok(flow) => flow,
            Err(e) => {
                warn!("{e}");
                writeln!(out, "error: {e}")?;
                Flow::Continue
            }
        };
        out.flush()?;
        Ok(flow)
    }

    fn dispatch(
        &mut self,
        command: Command,
        out: &mut impl Write,
    ) -> io::Result<Result<Flow, ProtocolError>> {
        match command {
            Command::New => {
                self.game = Game::new();
                writeln!(out, "ok")?;
                self.opponent_reply(out)?;
            }
            Command::Position(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                let loaded = match parts.get(1) {
                    None => Err(ProtocolError::MissingArgument("position")),
                    Some(&"startpos") => Ok(Game::new()),
                    Some(&"fen") if parts.len() > 2 => {
                        Game::from_fen(&parts[2..].join(" ")).map_err(ProtocolError::from)
                    }
                    Some(_) => Game::from_fen(&parts[1..].join(" ")).map_err(ProtocolError::from),
                };
                match loaded {
                    Ok(game) => {
                        self.game = game;
                        writeln!(out, "ok")?;
                    }
                    Err(e) => return Ok(Err(e)),
                }
            }
            Command::Moves(square) => {
                let listed: Vec<String> = match square {
                    Some(name) => {
                        let from = match name.parse::<Square>() {
                            Ok(sq) => sq,
                            Err(e) => return Ok(Err(ProtocolError::from(e))),
                        };
                        self.game
                            .legal_moves_for(from)
                            .iter()
                            .map(|to| to.to_string())
                            .collect()
                    }
                    None => self.game.legal_moves().iter().map(|mv| mv.to_string()).collect(),
                };
                writeln!(out, "moves {}", listed.join(" "))?;
            }
            Command::Move(text) => {
                let (from, to, promotion) = match parse_move(&text) {
                    Ok(parsed) => parsed,
                    Err(error) => return Ok(Err(ProtocolError::InvalidMove { text, error })),
                };
                match self.game.attempt_move(from, to, promotion) {
                    Ok(report) => {
                        write_report(out, "played", &report)?;
                        self.opponent_reply(out)?;
                    }
                    Err(e) => return Ok(Err(ProtocolError::from(e))),
                }
            }
            Command::Status => self.write_status(out)?,
            Command::Fen => writeln!(out, "{}", self.game.snapshot())?,
            Command::History => {
                for line in self.game.history().score_sheet() {
                    writeln!(out, "{line}")?;
                }
                writeln!(
                    out,
                    "position {} of {}",
                    self.game.history().cursor(),
                    self.game.history().last_index()
                )?;
            }
            Command::First => self.navigate(out, Game::first)?,
            Command::Back => self.navigate(out, Game::back)?,
            Command::Forward => self.navigate(out, Game::forward)?,
            Command::Last => self.navigate(out, Game::last)?,
            Command::Go => match self.game.play_selected(&mut self.opponent) {
                Ok(Some(report)) => write_report(out, "played", &report)?,
                Ok(None) => writeln!(out, "no move")?,
                Err(e) => return Ok(Err(ProtocolError::from(e))),
            },
            Command::Options => self.options.print(out)?,
            Command::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                let Some((name, value)) = parse_setoption(&parts) else {
                    return Ok(Err(ProtocolError::MissingArgument("option name")));
                };
                match self.options.apply_setoption(&name, value.as_deref()) {
                    Ok(Some(OptionAction::ResetOpponent)) => {
                        self.opponent = build_opponent(&self.options);
                        debug!("opponent reset: {:?}", self.options);
                    }
                    Ok(None) => {}
                    Err(e) => return Ok(Err(ProtocolError::from(e))),
                }
                writeln!(out, "ok")?;
            }
            Command::Quit => return Ok(Ok(Flow::Quit)),
            Command::Unknown(line) => return Ok(Err(ProtocolError::UnknownCommand(line))),
        }
        Ok(Ok(Flow::Continue))
    }

    /// Let the configured opponent answer if it is its turn.
    fn opponent_reply(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.options.opponent == OpponentKind::None
            || self.game.side_to_move() != self.options.opponent_color
            || self.game.status().is_game_over()
        {
            return Ok(());
        }
        match self.game.play_selected(&mut self.opponent) {
            Ok(Some(report)) => write_report(out, "opponent", &report),
            Ok(None) => Ok(()),
            Err(e) => {
                warn!("opponent move failed: {e}");
                writeln!(out, "error: {e}")
            }
        }
    }

    fn navigate(&mut self, out: &mut impl Write, step: fn(&mut Game) -> bool) -> io::Result<()> {
        if !step(&mut self.game) {
            writeln!(out, "no change")?;
        }
        writeln!(
            out,
            "position {} of {}",
            self.game.history().cursor(),
            self.game.history().last_index()
        )?;
        writeln!(out, "{}", self.game.snapshot())
    }

    fn write_status(&self, out: &mut impl Write) -> io::Result<()> {
        let captured = |color: Color| {
            let pieces: Vec<String> = self
                .game
                .captured_by(color)
                .iter()
                .map(|piece| piece.to_string())
                .collect();
            if pieces.is_empty() {
                "-".to_string()
            } else {
                pieces.join(" ")
            }
        };
        writeln!(out, "side_to_move: {}", color_name(self.game.side_to_move()))?;
        writeln!(out, "status: {}", self.game.status())?;
        writeln!(out, "reviewing: {}", self.game.is_reviewing())?;
        writeln!(out, "material: {}", self.game.material_balance())?;
        writeln!(out, "captured_by_white: {}", captured(Color::White))?;
        writeln!(out, "captured_by_black: {}", captured(Color::Black))
    }
}

fn write_report(out: &mut impl Write, label: &str, report: &MoveReport) -> io::Result<()> {
    writeln!(out, "{label} {} {}", report.mv, report.san)?;
    if report.status.is_game_over() {
        writeln!(out, "game over: {}", report.status)?;
    }
    Ok(())
}

/// Read commands from `input` until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let mut session = Session::new();
    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            continue;
        };
        debug!("command: {command:?}");
        if session.handle(command, &mut output)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Run the protocol over standard input and output.
pub fn run_protocol_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(input: &str) -> String {
        let mut out = Vec::new();
        run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_move_and_status() {
        let text = transcript("move e2e4\nstatus\nquit\nstatus\n");
        assert!(text.contains("played e2e4 e4\n"));
        assert!(text.contains("side_to_move: black\n"));
        assert!(text.contains("status: ongoing\n"));
        assert_eq!(text.matches("side_to_move").count(), 1);
    }

    #[test]
    fn test_errors_do_not_end_the_session() {
        let text = transcript("move e2e5\nmove zz\nfly\nmoves e2\n");
        assert!(text.contains("error: move rejected"));
        assert!(text.contains("error: invalid move 'zz'"));
        assert!(text.contains("error: unknown command 'fly'"));
        assert!(text.contains("moves e3 e4\n"));
    }

    #[test]
    fn test_position_and_fen() {
        let text = transcript("position 4k3/8/8/8/8/8/8/4K2R w K - 0 1\nfen\nposition\n");
        assert!(text.contains("4k3/8/8/8/8/8/8/4K2R w K - 0 1\n"));
        assert!(text.contains("error: missing argument"));
    }

    #[test]
    fn test_navigation_and_history() {
        let text = transcript("move e2e4\nmove e7e5\nback\nmove d7d5\nhistory\nlast\n");
        assert!(text.contains("position 1 of 2\n"));
        assert!(text.contains("error: move rejected"));
        assert!(text.contains("1. e4 e5\n"));
        assert!(text.contains("position 2 of 2\n"));
    }

    #[test]
    fn test_random_opponent_replies() {
        let mut session = Session::new();
        let mut out = Vec::new();
        for line in [
            "setoption name Opponent value random",
            "setoption name Seed value 5",
            "move e2e4",
        ] {
            let command = parse_command(line).unwrap();
            assert_eq!(session.handle(command, &mut out).unwrap(), Flow::Continue);
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("opponent "));
        assert_eq!(session.game().history().len(), 2);
        assert_eq!(session.options().seed, Some(5));
    }

    #[test]
    fn test_bad_setoption_reports_an_error() {
        let text = transcript(
            "setoption name Opponent value banana\n\
             setoption name Ponder value true\n\
             setoption name Seed value many\n\
             options\n",
        );
        assert!(text.contains("error: invalid value 'banana' for option 'Opponent'\n"));
        assert!(text.contains("error: unknown option 'Ponder'\n"));
        assert!(text.contains("error: invalid value 'many' for option 'Seed'\n"));
        assert!(!text.contains("ok\n"));
        assert!(text.contains("option name Opponent type combo default none"));
        assert!(text.contains("option name Seed type spin default none"));
    }

    #[test]
    fn test_go_plays_for_side_to_move() {
        let text = transcript("setoption name Seed value 3\ngo\nstatus\n");
        assert!(text.contains("played "));
        assert!(text.contains("side_to_move: black\n"));
    }
}
