use std::fmt;
use std::io::{self, Write};

use crate::board::Color;

/// Who answers the human's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentKind {
    None,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionAction {
    /// The opponent's move source changed and must be rebuilt
    ResetOpponent,
}

/// Error type for `setoption` requests that change nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    UnknownName(String),
    InvalidValue { name: String, value: Option<String> },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownName(name) => write!(f, "unknown option '{name}'"),
            OptionError::InvalidValue { name, value: Some(value) } => {
                write!(f, "invalid value '{value}' for option '{name}'")
            }
            OptionError::InvalidValue { name, value: None } => {
                write!(f, "option '{name}' needs a value")
            }
        }
    }
}

impl std::error::Error for OptionError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub opponent: OpponentKind,
    pub opponent_color: Color,
    pub seed: Option<u64>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions::new()
    }
}

impl SessionOptions {
    #[must_use]
    pub fn new() -> Self {
        SessionOptions {
            opponent: OpponentKind::None,
            opponent_color: Color::Black,
            seed: None,
        }
    }

    pub fn print(&self, out: &mut impl Write) -> io::Result<()> {
        let opponent = match self.opponent {
            OpponentKind::None => "none",
            OpponentKind::Random => "random",
        };
        writeln!(
            out,
            "option name Opponent type combo default {opponent} var none var random"
        )?;
        writeln!(
            out,
            "option name OpponentColor type combo default {} var white var black",
            color_name(self.opponent_color)
        )?;
        match self.seed {
            Some(seed) => writeln!(out, "option name Seed type spin default {seed}")?,
            None => writeln!(out, "option name Seed type spin default none")?,
        }
        Ok(())
    }

    /// Apply one option. Unknown names and unusable values are errors and
    /// leave the options untouched.
    pub fn apply_setoption(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<Option<OptionAction>, OptionError> {
        let normalized = name.trim().to_ascii_lowercase();
        let lowered = value.map(|v| v.trim().to_ascii_lowercase());
        let invalid = || OptionError::InvalidValue {
            name: name.trim().to_string(),
            value: value.map(|v| v.trim().to_string()),
        };
        match normalized.as_str() {
            "opponent" => {
                let kind = match lowered.as_deref() {
                    Some("random") => OpponentKind::Random,
                    Some("none") => OpponentKind::None,
                    _ => return Err(invalid()),
                };
                if kind != self.opponent {
                    self.opponent = kind;
                    return Ok(Some(OptionAction::ResetOpponent));
                }
            }
            "opponentcolor" | "opponent color" => match lowered.as_deref() {
                Some("white") => self.opponent_color = Color::White,
                Some("black") => self.opponent_color = Color::Black,
                _ => return Err(invalid()),
            },
            "seed" => {
                let seed = match lowered.as_deref() {
                    Some("none") => None,
                    Some(text) => Some(text.parse::<u64>().map_err(|_| invalid())?),
                    None => return Err(invalid()),
                };
                if seed != self.seed {
                    self.seed = seed;
                    return Ok(Some(OptionAction::ResetOpponent));
                }
            }
            _ => return Err(OptionError::UnknownName(name.trim().to_string())),
        }
        Ok(None)
    }
}

pub(crate) fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.is_empty() || parts[0] != "setoption" {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut mode = "";

    for part in parts.iter().skip(1) {
        match *part {
            "name" => mode = "name",
            "value" => mode = "value",
            _ => match mode {
                "name" => name_parts.push(part),
                "value" => value_parts.push(part),
                _ => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };

    Some((name, value))
}
