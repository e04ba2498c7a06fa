use std::io::Error as IoError;
use std::ops::ControlFlow;
use std::sync::Arc;

use snafu::prelude::*;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};

use crate::domain::timer::inbound::QueryResponse;
use crate::domain::timer::ApplicationCore;
use crate::widget::app::command::{KeyCommand, ParseKeyCommandError, HELP};
use crate::widget::app::render::Dashboard;

/// Interactive front end of the timer. Reads one key command per line from
/// its input and keeps a status line up to date on its output.
pub struct Console<R, W> {
    core: Arc<ApplicationCore>,
    input: Lines<R>,
    output: W,
    dashboard: Dashboard,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a new [`Console`].
    pub fn new(core: Arc<ApplicationCore>, input: R, output: W, dashboard: Dashboard) -> Self {
        Self {
            core,
            input: input.lines(),
            output,
            dashboard,
        }
    }

    /// Run until the user quits or the input ends, then shut the timer down.
    ///
    /// # Errors
    ///
    /// This function will return an error if reading commands or writing the
    /// display fails. The timer is shut down in either case.
    #[tracing::instrument(name = "console", skip(self))]
    pub async fn run(&mut self) -> Result<(), ConsoleError> {
        let res = self.run_loop().await;
        self.core.shutdown.shutdown().await;
        tracing::info!("Console closed");
        res
    }

    /// Returns the output of this [`Console`].
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    async fn run_loop(&mut self) -> Result<(), ConsoleError> {
        let mut updates = self.core.watch.watch();

        self.write(&format!("{HELP}\n")).await?;
        let response = self.core.query.query().await;
        self.render(&response).await?;

        loop {
            tokio::select! {
                biased;

                changed = updates.changed() => {
                    if changed.is_err() {
                        tracing::warn!("Timer is gone");
                        break;
                    }
                    let response = QueryResponse::from(*updates.borrow_and_update());
                    self.render(&response).await?;
                }
                line = self.input.next_line() => {
                    let Some(line) = line.context(ReadSnafu)? else {
                        tracing::debug!("Input closed");
                        break;
                    };
                    if self.dispatch(&line).await?.is_break() {
                        break;
                    }
                }
            }
        }

        self.write(self.dashboard.interrupt()).await?;
        self.write("\n").await
    }

    /// Handle one line of input.
    async fn dispatch(&mut self, line: &str) -> Result<ControlFlow<()>, ConsoleError> {
        let command = match line.parse::<KeyCommand>() {
            Ok(command) => command,
            Err(ParseKeyCommandError::Empty) => return Ok(ControlFlow::Continue(())),
            Err(err) => {
                tracing::debug!(%err, "Ignored input");
                let message = format!("{}{err}\n", self.dashboard.interrupt());
                self.write(&message).await?;
                return Ok(ControlFlow::Continue(()));
            }
        };

        tracing::debug!(?command, "Received command");

        match command {
            KeyCommand::Toggle => self.core.toggle.toggle().await,
            KeyCommand::Reset => self.core.reset.reset().await,
            KeyCommand::Select(mode) => self.core.select_mode.select_mode(mode).await,
            KeyCommand::Mute => self.core.mute.toggle_mute().await,
            KeyCommand::Help => {
                let message = format!("{}{HELP}\n", self.dashboard.interrupt());
                self.write(&message).await?;
                let response = self.core.query.query().await;
                self.render(&response).await?;
            }
            KeyCommand::Quit => return Ok(ControlFlow::Break(())),
        }

        Ok(ControlFlow::Continue(()))
    }

    async fn render(&mut self, response: &QueryResponse) -> Result<(), ConsoleError> {
        let line = self.dashboard.render(response);
        self.write(&line).await
    }

    async fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output
            .write_all(text.as_bytes())
            .await
            .context(WriteSnafu)?;
        self.output.flush().await.context(WriteSnafu)
    }
}

/// An error type for the console.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ConsoleError {
    #[snafu(display("Could not read commands"))]
    Read { source: IoError },
    #[snafu(display("Could not write to the display"))]
    Write { source: IoError },
}
