use std::io::IsTerminal;
use std::sync::Arc;

use snafu::{prelude::*, Whatever};
use tokio::io::{BufReader, Stdin, Stdout};
use tomato_timer::domain::timer::outbound::AlarmPort;
use tomato_timer::domain::timer::ApplicationCore;
use tomato_timer::widget::app::{Console, Dashboard};
use tomato_timer::widget::config::{self, AlarmBackend, AlarmSection, Configuration};
use tomato_timer::widget::outbound::{NotificationAlarm, SoundAlarm, DEFAULT_PLAYER};
use tomato_timer::widget::repository::{AlarmConfiguration, DurationConfiguration};

use crate::cli::Arguments;

const APP_NAME: &str = "tomato-timer";

pub type StdConsole = Console<BufReader<Stdin>, Stdout>;

pub async fn bootstrap(args: &Arguments) -> Result<StdConsole, Whatever> {
    let configuration = configuration(args)?;
    let core = core(configuration, args.muted).await?;

    let dashboard = Dashboard::new(!args.no_color && std::io::stdout().is_terminal());
    let console = Console::new(
        Arc::new(core),
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        dashboard,
    );

    Ok(console)
}

/// Log to stderr so that records don't mix with the status line.
pub fn logger(args: &Arguments) -> Result<(), Whatever> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(args.verbosity)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .whatever_context("Could not setup logger")?;
    Ok(())
}

fn configuration(args: &Arguments) -> Result<Arc<Configuration>, Whatever> {
    let res = match &args.config {
        Some(path) => config::load_with_path(path),
        None => config::load_with_xdg(APP_NAME),
    };

    let configuration = res.whatever_context("Could not load configuration")?;
    Ok(Arc::new(configuration))
}

fn alarm(section: &AlarmSection) -> Arc<dyn AlarmPort> {
    match section.backend {
        AlarmBackend::Sound => {
            let player = section.player.as_deref().unwrap_or(DEFAULT_PLAYER);
            Arc::new(SoundAlarm::new(player.to_owned()))
        }
        AlarmBackend::Notification => Arc::new(NotificationAlarm::new(APP_NAME.to_owned())),
    }
}

async fn core(config: Arc<Configuration>, muted: bool) -> Result<ApplicationCore, Whatever> {
    let alarm_port = alarm(&config.alarm);
    let duration_repository = Arc::new(DurationConfiguration::new(Arc::clone(&config)));
    let alarm_repository = Arc::new(AlarmConfiguration::new(config));

    let core = ApplicationCore::setup(alarm_port, duration_repository, alarm_repository, muted)
        .await
        .whatever_context("Could not setup application core")?;

    Ok(core)
}
