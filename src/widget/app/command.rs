use std::str::FromStr;

use snafu::prelude::*;

use crate::domain::entity::TimerMode;

/// Key commands accepted by the console, one per line.
pub const HELP: &str = "\
keys: [s]tart/pause  [r]eset  [1|f]ocus  [2|b] short break  [3|l] long break  [m]ute  [?] help  [q]uit";

/// An action requested from the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Toggle,
    Reset,
    Select(TimerMode),
    Mute,
    Help,
    Quit,
}

impl FromStr for KeyCommand {
    type Err = ParseKeyCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        // A bare space is the start/pause key.
        if !line.is_empty() && line.trim().is_empty() {
            return Ok(Self::Toggle);
        }

        let key = line.trim().to_lowercase();
        let command = match key.as_str() {
            "" => return EmptySnafu.fail(),
            "s" => Self::Toggle,
            "r" => Self::Reset,
            "f" => Self::Select(TimerMode::Focus),
            "b" => Self::Select(TimerMode::ShortBreak),
            "l" => Self::Select(TimerMode::LongBreak),
            "m" => Self::Mute,
            "?" | "h" => Self::Help,
            "q" => Self::Quit,
            _ => match numbered_mode(&key) {
                Some(mode) => Self::Select(mode),
                None => return UnknownSnafu { key }.fail(),
            },
        };

        Ok(command)
    }
}

/// Digit keys select modes by their 1-based position in [`TimerMode::ALL`].
fn numbered_mode(key: &str) -> Option<TimerMode> {
    let &[digit @ b'1'..=b'9'] = key.as_bytes() else {
        return None;
    };
    TimerMode::ALL.get(usize::from(digit - b'1')).copied()
}

/// An error type of parsing a [`KeyCommand`].
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseKeyCommandError {
    #[snafu(display("No key given"))]
    Empty,
    #[snafu(display("Unknown key `{key}`, press ? for help"))]
    Unknown { key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_command_parse() {
        let cases = [
            ("s", KeyCommand::Toggle),
            (" ", KeyCommand::Toggle),
            ("S", KeyCommand::Toggle),
            ("r", KeyCommand::Reset),
            ("1", KeyCommand::Select(TimerMode::Focus)),
            ("f", KeyCommand::Select(TimerMode::Focus)),
            ("2", KeyCommand::Select(TimerMode::ShortBreak)),
            ("b", KeyCommand::Select(TimerMode::ShortBreak)),
            (" 3 ", KeyCommand::Select(TimerMode::LongBreak)),
            ("L", KeyCommand::Select(TimerMode::LongBreak)),
            ("m", KeyCommand::Mute),
            ("?", KeyCommand::Help),
            ("h", KeyCommand::Help),
            ("q", KeyCommand::Quit),
        ];
        for (line, expected) in cases {
            assert_eq!(line.parse::<KeyCommand>(), Ok(expected), "line {line:?}");
        }
    }

    #[test]
    fn key_command_parse_error() {
        assert_eq!("".parse::<KeyCommand>(), Err(ParseKeyCommandError::Empty));
        assert_eq!(
            "start".parse::<KeyCommand>(),
            Err(ParseKeyCommandError::Unknown {
                key: "start".to_owned()
            })
        );
        for key in ["0", "4", "12", "+1"] {
            assert_eq!(
                key.parse::<KeyCommand>(),
                Err(ParseKeyCommandError::Unknown {
                    key: key.to_owned()
                })
            );
        }
    }
}
