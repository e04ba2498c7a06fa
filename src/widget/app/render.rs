use std::fmt::Write;

use crate::domain::entity::{ModeColor, SESSIONS_PER_SET};
use crate::domain::timer::inbound::QueryResponse;

const RESET: &str = "\x1b[0m";
const CLEAR_LINE: &str = "\r\x1b[2K";

/// Renders the timer state as a single status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dashboard {
    ansi: bool,
}

impl Dashboard {
    /// Creates a new [`Dashboard`]. With `ansi` enabled, the mode is colored
    /// and every status line replaces the previous one in place; otherwise
    /// each status is printed on a line of its own.
    pub fn new(ansi: bool) -> Self {
        Self { ansi }
    }

    /// Produce the text to write for `response`.
    pub fn render(&self, response: &QueryResponse) -> String {
        let mut line = String::new();

        if self.ansi {
            line.push_str(CLEAR_LINE);
            let _ = write!(
                line,
                "{}{:<5}{RESET}",
                Self::escape(response.color),
                response.mode
            );
        } else {
            let _ = write!(line, "{:<5}", response.mode);
        }

        let control = if response.running { "running" } else { "paused" };
        let sound = if response.muted { "muted" } else { "sound on" };
        let _ = write!(line, "  {}  [{control}] [{sound}]  ", response.clock);

        for slot in 0..SESSIONS_PER_SET {
            line.push(if slot < response.filled { '●' } else { '○' });
        }
        let _ = write!(line, " {} sets", response.sets);

        if !self.ansi {
            line.push('\n');
        }
        line
    }

    /// Text written before any other output while a status line is shown.
    pub fn interrupt(&self) -> &'static str {
        if self.ansi {
            CLEAR_LINE
        } else {
            ""
        }
    }

    fn escape(color: ModeColor) -> &'static str {
        match color {
            ModeColor::Red => "\x1b[1;31m",
            ModeColor::Green => "\x1b[1;32m",
            ModeColor::Blue => "\x1b[1;34m",
        }
    }
}
