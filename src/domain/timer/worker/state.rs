use tokio::sync::oneshot::Sender;

use crate::domain::entity::{TimerMode, TimerSnapshot};
use crate::domain::timer::worker::countdown::Countdown;
use crate::domain::timer::worker::handle::Command;
use crate::domain::timer::worker::routine::WorkerContext;

#[derive(Debug)]
#[repr(transparent)]
pub struct WorkerState {
    inner: Option<WorkerStateInner>,
}

impl WorkerState {
    /// Creates a new [`WorkerState`].
    pub fn new() -> Self {
        Self {
            inner: Some(WorkerStateInner::new()),
        }
    }

    /// Do the business logic based on its inner state.
    pub async fn run(&mut self, context: &mut WorkerContext) {
        self.inner = match self.inner.take() {
            Some(inner) => Some(inner.run(context).await),
            None => unreachable!("`WorkerState`'s inner should not be `None`"),
        };
    }

    /// Returns `true` if is stopped of this [`WorkerState`].
    pub fn is_stopped(&self) -> bool {
        matches!(self.inner, Some(WorkerStateInner::Stopped(_)))
    }
}

#[enum_dispatch::enum_dispatch]
trait StateRun {
    async fn run(self, context: &mut WorkerContext) -> WorkerStateInner;
}

/// Actual implementation of running state of [`WorkerRoutine`].
///
/// [`WorkerRoutine`]: crate::domain::timer::worker::routine::WorkerRoutine
#[derive(Debug)]
#[enum_dispatch::enum_dispatch(StateRun)]
enum WorkerStateInner {
    Idle(IdleState),
    Running(RunningState),
    Stopped(StoppedState),
}

impl WorkerStateInner {
    pub fn new() -> Self {
        Self::Idle(IdleState)
    }

    /// Pick the state matching the timer's running flag after a change.
    fn follow(context: &WorkerContext) -> Self {
        if context.timer.is_running() {
            RunningState {
                countdown: Countdown::schedule(),
            }
            .into()
        } else {
            IdleState.into()
        }
    }
}

/// A state which indicates that the countdown is paused, waiting for
/// commands only.
#[derive(Debug)]
struct IdleState;

impl StateRun for IdleState {
    async fn run(self, context: &mut WorkerContext) -> WorkerStateInner {
        match context.commands.recv().await {
            Some(Command::Toggle) => self.handle_toggle(context),
            Some(Command::Reset) => self.handle_reset(context),
            Some(Command::SelectMode { mode }) => self.handle_select_mode(context, mode),
            Some(Command::ToggleMute) => self.handle_toggle_mute(context),
            Some(Command::Query { responder }) => self.handle_query(context, responder),
            Some(Command::Stop) | None => self.handle_stop(),
        }
    }
}

impl IdleState {
    fn handle_toggle(self, context: &mut WorkerContext) -> WorkerStateInner {
        context.timer.toggle();
        context.publish();
        tracing::info!(mode = %context.timer.mode(), "Countdown started");
        WorkerStateInner::follow(context)
    }

    fn handle_reset(self, context: &mut WorkerContext) -> WorkerStateInner {
        context.timer.reset();
        context.publish();
        self.into()
    }

    fn handle_select_mode(self, context: &mut WorkerContext, mode: TimerMode) -> WorkerStateInner {
        context.timer.select_mode(mode);
        context.publish();
        tracing::info!(%mode, "Mode selected");
        self.into()
    }

    fn handle_toggle_mute(self, context: &mut WorkerContext) -> WorkerStateInner {
        context.timer.toggle_mute();
        context.publish();
        self.into()
    }

    fn handle_query(
        self,
        context: &mut WorkerContext,
        responder: Sender<TimerSnapshot>,
    ) -> WorkerStateInner {
        let _ = responder.send(context.timer.snapshot());
        self.into()
    }

    fn handle_stop(self) -> WorkerStateInner {
        StoppedState.into()
    }
}

/// A state which indicates that the countdown is running, with exactly one
/// tick pending.
#[derive(Debug)]
struct RunningState {
    countdown: Countdown,
}

impl StateRun for RunningState {
    async fn run(mut self, context: &mut WorkerContext) -> WorkerStateInner {
        tokio::select! {
            _ = self.countdown.elapsed() => self.handle_tick(context),
            command = context.commands.recv() => match command {
                Some(Command::Toggle) => self.handle_toggle(context),
                Some(Command::Reset) => self.handle_reset(context),
                Some(Command::SelectMode { mode }) => self.handle_select_mode(context, mode),
                Some(Command::ToggleMute) => self.handle_toggle_mute(context),
                Some(Command::Query { responder }) => self.handle_query(context, responder),
                Some(Command::Stop) | None => self.handle_stop(),
            },
        }
    }
}

impl RunningState {
    fn handle_tick(self, context: &mut WorkerContext) -> WorkerStateInner {
        let completion = context.timer.tick();
        context.publish();

        if let Some(completion) = completion {
            tracing::info!(
                finished = %completion.finished,
                next = %completion.next,
                sessions = context.timer.sessions().completed(),
                "Countdown completed"
            );
            if completion.alarm {
                context.sound_alarm();
            }
        }

        WorkerStateInner::follow(context)
    }

    fn handle_toggle(self, context: &mut WorkerContext) -> WorkerStateInner {
        context.timer.toggle();
        context.publish();
        tracing::info!(remaining = context.timer.remaining(), "Countdown paused");
        WorkerStateInner::follow(context)
    }

    fn handle_reset(self, context: &mut WorkerContext) -> WorkerStateInner {
        context.timer.reset();
        context.publish();
        IdleState.into()
    }

    fn handle_select_mode(self, context: &mut WorkerContext, mode: TimerMode) -> WorkerStateInner {
        context.timer.select_mode(mode);
        context.publish();
        tracing::info!(%mode, "Mode selected, running countdown discarded");
        IdleState.into()
    }

    /// Rearms the pending tick, like any other change of the timer.
    fn handle_toggle_mute(self, context: &mut WorkerContext) -> WorkerStateInner {
        context.timer.toggle_mute();
        context.publish();
        WorkerStateInner::follow(context)
    }

    fn handle_query(
        self,
        context: &mut WorkerContext,
        responder: Sender<TimerSnapshot>,
    ) -> WorkerStateInner {
        let _ = responder.send(context.timer.snapshot());
        self.into()
    }

    fn handle_stop(self) -> WorkerStateInner {
        StoppedState.into()
    }
}

/// A state which indicates that [`WorkerRoutine`] should stop running.
///
/// [`WorkerRoutine`]: crate::domain::timer::worker::routine::WorkerRoutine
#[derive(Debug)]
struct StoppedState;

impl StateRun for StoppedState {
    async fn run(self, _context: &mut WorkerContext) -> WorkerStateInner {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use tokio::sync::mpsc::Sender as CommandSender;
    use tokio::sync::watch;
    use tokio::time::{Duration, Instant};

    use crate::domain::entity::{ModeDuration, ModeDurations, TimerState};
    use crate::domain::timer::outbound::{AlarmError, AlarmHandle, AlarmPort};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum AlarmCall {
        Play(PathBuf),
        Unload(PathBuf),
    }

    struct MockAlarm {
        calls: Arc<Mutex<Vec<AlarmCall>>>,
    }

    #[async_trait::async_trait]
    impl AlarmPort for MockAlarm {
        async fn load(&self, asset: &Path) -> Result<AlarmHandle, AlarmError> {
            Ok(AlarmHandle::new(asset.to_path_buf()))
        }

        async fn play(&self, handle: &AlarmHandle) -> Result<(), AlarmError> {
            let call = AlarmCall::Play(handle.asset().to_path_buf());
            self.calls.lock().unwrap().push(call);
            Ok(())
        }

        async fn unload(&self, handle: AlarmHandle) {
            let call = AlarmCall::Unload(handle.asset().to_path_buf());
            self.calls.lock().unwrap().push(call);
        }
    }

    fn new_worker_context() -> (
        CommandSender<Command>,
        WorkerContext,
        Arc<Mutex<Vec<AlarmCall>>>,
    ) {
        let (sender, receiver) = tokio::sync::mpsc::channel(1);
        let new_duration = |d| ModeDuration::try_new(d).unwrap();
        let calls = Arc::new(Mutex::new(Vec::new()));
        let alarm = MockAlarm {
            calls: Arc::clone(&calls),
        };
        let timer = TimerState::new(ModeDurations {
            focus: new_duration(3),
            short_break: new_duration(2),
            long_break: new_duration(4),
        });
        let (updates, _) = watch::channel(timer.snapshot());

        let context = WorkerContext {
            timer,
            commands: receiver,
            updates,
            alarm: Arc::new(alarm),
            sound: Some(AlarmHandle::new(PathBuf::from("alarm.oga"))),
        };

        (sender, context, calls)
    }

    /// Let detached alarm tasks finish.
    async fn settle() {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    fn new_running_state(context: &mut WorkerContext) -> RunningState {
        context.timer.toggle();
        RunningState {
            countdown: Countdown::schedule(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn idle_state_handle_toggle() {
        let (_, mut context, _) = new_worker_context();
        let now = Instant::now();
        let state = IdleState.handle_toggle(&mut context);

        match state {
            WorkerStateInner::Running(state) => {
                assert_eq!(state.countdown.deadline(), now + Duration::from_secs(1));
            }
            _ => unreachable!(),
        }
        assert!(context.timer.is_running());
        assert!(context.updates.borrow().running);
    }

    #[tokio::test(start_paused = true)]
    async fn idle_state_run_commands() {
        let (sender, mut context, calls) = new_worker_context();

        sender
            .send(Command::SelectMode {
                mode: TimerMode::LongBreak,
            })
            .await
            .unwrap();
        let state = IdleState.run(&mut context).await;
        assert!(matches!(state, WorkerStateInner::Idle(_)));
        assert_eq!(context.timer.mode(), TimerMode::LongBreak);
        assert_eq!(context.timer.remaining(), 4);

        sender.send(Command::ToggleMute).await.unwrap();
        let state = state.run(&mut context).await;
        assert!(matches!(state, WorkerStateInner::Idle(_)));
        assert!(context.timer.is_muted());

        let (responder, receiver) = tokio::sync::oneshot::channel();
        sender.send(Command::Query { responder }).await.unwrap();
        let state = state.run(&mut context).await;
        assert!(matches!(state, WorkerStateInner::Idle(_)));
        assert_eq!(receiver.await.unwrap(), context.timer.snapshot());

        sender.send(Command::Stop).await.unwrap();
        let state = state.run(&mut context).await;
        assert!(matches!(state, WorkerStateInner::Stopped(_)));

        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn idle_state_closed_channel() {
        let (sender, mut context, _) = new_worker_context();
        drop(sender);
        let state = IdleState.run(&mut context).await;
        assert!(matches!(state, WorkerStateInner::Stopped(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn running_state_handle_tick() {
        let (_, mut context, calls) = new_worker_context();
        let state = new_running_state(&mut context);
        let state = state.handle_tick(&mut context);

        assert!(matches!(state, WorkerStateInner::Running(_)));
        assert_eq!(context.timer.remaining(), 2);
        assert_eq!(context.updates.borrow().remaining, 2);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn running_state_run_to_completion() {
        let (_sender, mut context, calls) = new_worker_context();
        let start = Instant::now();
        let mut state: WorkerStateInner = new_running_state(&mut context).into();

        while matches!(state, WorkerStateInner::Running(_)) {
            state = state.run(&mut context).await;
        }

        assert!(matches!(state, WorkerStateInner::Idle(_)));
        assert_eq!(Instant::now(), start + Duration::from_secs(3));
        settle().await;
        assert_eq!(context.timer.mode(), TimerMode::ShortBreak);
        assert_eq!(context.timer.remaining(), 2);
        assert_eq!(context.timer.sessions().completed(), 1);
        assert!(!context.timer.is_running());
        assert_eq!(
            *calls.lock().unwrap(),
            [AlarmCall::Play(PathBuf::from("alarm.oga"))]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn running_state_muted_completion() {
        let (_sender, mut context, calls) = new_worker_context();
        context.timer.toggle_mute();
        let mut state: WorkerStateInner = new_running_state(&mut context).into();

        while matches!(state, WorkerStateInner::Running(_)) {
            state = state.run(&mut context).await;
        }

        settle().await;

        assert_eq!(context.timer.mode(), TimerMode::ShortBreak);
        assert_eq!(context.timer.sessions().completed(), 1);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn running_state_completion_without_sound() {
        let (_sender, mut context, calls) = new_worker_context();
        context.sound = None;
        let mut state: WorkerStateInner = new_running_state(&mut context).into();

        while matches!(state, WorkerStateInner::Running(_)) {
            state = state.run(&mut context).await;
        }

        settle().await;

        assert_eq!(context.timer.mode(), TimerMode::ShortBreak);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn running_state_handle_select_mode() {
        let (_, mut context, calls) = new_worker_context();
        let state = new_running_state(&mut context);
        let state = state.handle_tick(&mut context);
        assert_eq!(context.timer.remaining(), 2);

        let state = match state {
            WorkerStateInner::Running(state) => {
                state.handle_select_mode(&mut context, TimerMode::LongBreak)
            }
            _ => unreachable!(),
        };

        assert!(matches!(state, WorkerStateInner::Idle(_)));
        assert_eq!(context.timer.mode(), TimerMode::LongBreak);
        assert_eq!(context.timer.remaining(), 4);
        assert!(!context.timer.is_running());

        // The cancelled tick must not fire against the new mode.
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(context.timer.remaining(), 4);
        assert_eq!(context.timer.sessions().completed(), 0);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn running_state_handle_toggle() {
        let (_, mut context, _) = new_worker_context();
        let state = new_running_state(&mut context);
        let state = state.handle_toggle(&mut context);

        assert!(matches!(state, WorkerStateInner::Idle(_)));
        assert!(!context.timer.is_running());
        assert_eq!(context.timer.remaining(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn running_state_handle_reset() {
        let (_, mut context, _) = new_worker_context();
        let state = new_running_state(&mut context);
        let state = match state.handle_tick(&mut context) {
            WorkerStateInner::Running(state) => state.handle_reset(&mut context),
            _ => unreachable!(),
        };

        assert!(matches!(state, WorkerStateInner::Idle(_)));
        assert!(!context.timer.is_running());
        assert_eq!(context.timer.remaining(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn running_state_handle_toggle_mute() {
        let (_, mut context, _) = new_worker_context();
        let state = new_running_state(&mut context);

        tokio::time::sleep(Duration::from_millis(400)).await;
        let now = Instant::now();
        let state = state.handle_toggle_mute(&mut context);

        match state {
            WorkerStateInner::Running(state) => {
                assert_eq!(state.countdown.deadline(), now + Duration::from_secs(1));
            }
            _ => unreachable!(),
        }
        assert!(context.timer.is_muted());
        assert!(context.timer.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn running_state_handle_query() {
        let (_, mut context, _) = new_worker_context();
        let state = new_running_state(&mut context);
        let deadline = state.countdown.deadline();
        let (responder, receiver) = tokio::sync::oneshot::channel();
        let state = state.handle_query(&mut context, responder);

        match state {
            WorkerStateInner::Running(state) => {
                assert_eq!(state.countdown.deadline(), deadline);
            }
            _ => unreachable!(),
        }
        let snapshot = receiver.await.unwrap();
        assert!(snapshot.running);
        assert_eq!(snapshot.remaining, 3);
    }
}
