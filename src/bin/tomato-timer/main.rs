mod cli;
mod setup;

use clap::Parser;
use cli::Arguments;
use snafu::{prelude::*, Whatever};

#[snafu::report]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Whatever> {
    let args = Arguments::parse();
    setup::logger(&args)?;

    let mut console = setup::bootstrap(&args).await?;

    console
        .run()
        .await
        .whatever_context("Console failed with fatal")?;

    Ok(())
}
