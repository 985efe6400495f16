//! Session controller: owns the trial timer and the completion cascade.
//!
//! The timer ticks in whole seconds while the session runs. Trial completion
//! kicks off a fixed cascade: the result save starts immediately, two
//! cosmetic delays bracket the celebration cue, and the cascade joins on the
//! save before presenting the trial-complete state. A failed save is logged
//! and the cascade still reaches its terminal state.

#[cfg(test)]
mod tests;

use {
    bevy::{
        prelude::*,
        tasks::{Task, block_on},
    },
    futures_lite::future,
    persistence::{RemoteStore, StoreError, spawn_game_attempt_save, spawn_trial_completion_save},
    profile::{ActivePlayer, UserCache},
    states::{GameState, SessionPhase},
    trial_events::{CelebrationCue, ContinueRequested, RetryRequested, TimeExpired, TrialCompleted},
    trials::TrialRegistry,
};

/// Seconds remaining at which the HUD switches to the low-time cue.
pub const LOW_TIME_THRESHOLD: f32 = 30.0;

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<SessionPhase>()
            .init_resource::<SessionTimer>()
            .init_resource::<CompletionTuning>()
            .add_systems(OnEnter(GameState::Running), begin_session)
            .add_systems(
                Update,
                tick_session_timer.run_if(in_state(SessionPhase::Running)),
            )
            .add_systems(
                Update,
                drive_completion_sequence.run_if(in_state(SessionPhase::Completing)),
            )
            .add_observer(on_trial_completed)
            .add_observer(on_time_expired)
            .add_observer(on_retry_requested)
            .add_observer(on_continue_requested);
    }
}

/// Outcome of one whole-second timer step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    Expired,
    /// The timer was already stopped; the tick was inert.
    Stopped,
}

/// Elapsed-seconds timer for the active trial.
#[derive(Resource, Debug)]
pub struct SessionTimer {
    cadence: Timer,
    elapsed: f32,
    running: bool,
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self {
            cadence: Timer::from_seconds(1.0, TimerMode::Repeating),
            elapsed: 0.0,
            running: false,
        }
    }
}

impl SessionTimer {
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.running = true;
        self.cadence.reset();
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining(&self, time_limit: f32) -> f32 {
        time_limit - self.elapsed
    }

    /// Applies one whole-second tick. Once `running` is false every further
    /// tick is inert, so expiry can fire at most once per `start`.
    pub fn register_tick(&mut self, time_limit: f32) -> TickOutcome {
        if !self.running {
            return TickOutcome::Stopped;
        }
        self.elapsed += 1.0;
        if self.elapsed >= time_limit {
            self.running = false;
            TickOutcome::Expired
        } else {
            TickOutcome::Running
        }
    }
}

/// Cosmetic delays of the completion cascade, overridable by tests.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CompletionTuning {
    pub pre_delay: f32,
    pub post_delay: f32,
}

impl Default for CompletionTuning {
    fn default() -> Self {
        Self {
            pre_delay: 2.0,
            post_delay: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompletionStep {
    PreDelay,
    PostDelay,
    AwaitSave,
}

/// Live state of the completion cascade. Exists only during
/// `SessionPhase::Completing`.
#[derive(Resource)]
pub struct CompletionSequence {
    step: CompletionStep,
    delay: Timer,
    save: Option<Task<Result<(), StoreError>>>,
}

fn begin_session(
    store: Res<RemoteStore>,
    player: Res<ActivePlayer>,
    mut timer: ResMut<SessionTimer>,
    mut next_phase: ResMut<NextState<SessionPhase>>,
) {
    // Record the play attempt; nothing downstream depends on it.
    spawn_game_attempt_save(&store, player.name.clone()).detach();
    timer.start();
    next_phase.set(SessionPhase::Running);
    info!(player = %player.name, "session started");
}

fn tick_session_timer(
    time: Res<Time>,
    mut timer: ResMut<SessionTimer>,
    registry: Res<TrialRegistry>,
    mut commands: Commands,
) {
    let Some(time_limit) = registry.current_trial().map(|trial| trial.time_limit) else {
        return;
    };
    if !timer.running {
        return;
    }

    timer.cadence.tick(time.delta());
    for _ in 0..timer.cadence.times_finished_this_tick() {
        match timer.register_tick(time_limit) {
            TickOutcome::Running => {}
            TickOutcome::Expired => {
                info!(elapsed = timer.elapsed, "trial time limit reached");
                commands.trigger(TimeExpired);
                break;
            }
            TickOutcome::Stopped => break,
        }
    }
}

fn on_time_expired(
    _trigger: On<TimeExpired>,
    mut timer: ResMut<SessionTimer>,
    mut virtual_time: ResMut<Time<Virtual>>,
    mut next_phase: ResMut<NextState<SessionPhase>>,
) {
    timer.stop();
    virtual_time.pause();
    next_phase.set(SessionPhase::TimedOut);
}

fn on_trial_completed(
    trigger: On<TrialCompleted>,
    store: Res<RemoteStore>,
    player: Res<ActivePlayer>,
    registry: Res<TrialRegistry>,
    tuning: Res<CompletionTuning>,
    mut cache: ResMut<UserCache>,
    mut next_phase: ResMut<NextState<SessionPhase>>,
    mut commands: Commands,
) {
    let trial_number = trigger.event().trial_number;
    let coins = registry.current_trial().map(|trial| trial.coins()).unwrap_or(0);

    // Coin haul becomes profile points right away; the completion record
    // itself goes through the background save below.
    if coins > 0 {
        if let Some(points) = cache.add_points(&store, &player.user_id, coins) {
            debug!(player = %player.name, points, "coins credited to profile");
        }
    }

    // The save starts now and runs alongside the cosmetic delays; the
    // cascade joins on it in its final step.
    let save = spawn_trial_completion_save(&store, player.name.clone(), coins, trial_number);

    commands.insert_resource(CompletionSequence {
        step: CompletionStep::PreDelay,
        delay: Timer::from_seconds(tuning.pre_delay, TimerMode::Once),
        save: Some(save),
    });
    next_phase.set(SessionPhase::Completing);
    info!(trial_number, coins, "starting completion cascade");
}

fn drive_completion_sequence(
    time: Res<Time>,
    tuning: Res<CompletionTuning>,
    sequence: Option<ResMut<CompletionSequence>>,
    mut timer: ResMut<SessionTimer>,
    mut virtual_time: ResMut<Time<Virtual>>,
    mut next_phase: ResMut<NextState<SessionPhase>>,
    mut commands: Commands,
) {
    let Some(mut sequence) = sequence else {
        return;
    };

    match sequence.step {
        CompletionStep::PreDelay => {
            if sequence.delay.tick(time.delta()).just_finished() {
                commands.trigger(CelebrationCue);
                sequence.delay = Timer::from_seconds(tuning.post_delay, TimerMode::Once);
                sequence.step = CompletionStep::PostDelay;
            }
        }
        CompletionStep::PostDelay => {
            if sequence.delay.tick(time.delta()).just_finished() {
                sequence.step = CompletionStep::AwaitSave;
            }
        }
        CompletionStep::AwaitSave => {
            let settled = match sequence.save.as_mut() {
                Some(task) => match block_on(future::poll_once(task)) {
                    Some(Err(err)) => {
                        // Degraded path: skip the save, keep playing.
                        warn!(error = %err, "trial completion save failed");
                        true
                    }
                    Some(Ok(())) => {
                        debug!("trial completion saved");
                        true
                    }
                    None => false,
                },
                None => true,
            };

            if settled {
                sequence.save = None;
                timer.stop();
                virtual_time.pause();
                commands.remove_resource::<CompletionSequence>();
                next_phase.set(SessionPhase::TrialComplete);
                info!("completion cascade finished");
            }
        }
    }
}

fn on_retry_requested(
    _trigger: On<RetryRequested>,
    mut registry: ResMut<TrialRegistry>,
    mut timer: ResMut<SessionTimer>,
    mut virtual_time: ResMut<Time<Virtual>>,
    mut next_phase: ResMut<NextState<SessionPhase>>,
) {
    virtual_time.unpause();
    registry.reset_level();
    timer.start();
    next_phase.set(SessionPhase::Running);
    info!(level = registry.level, "retrying trial");
}

fn on_continue_requested(
    _trigger: On<ContinueRequested>,
    mut registry: ResMut<TrialRegistry>,
    mut timer: ResMut<SessionTimer>,
    mut virtual_time: ResMut<Time<Virtual>>,
    mut next_phase: ResMut<NextState<SessionPhase>>,
) {
    let next_level = registry.level + 1;
    if !registry.set_game_level(next_level) {
        info!("no trial beyond this one, staying on the completion screen");
        return;
    }
    virtual_time.unpause();
    timer.start();
    next_phase.set(SessionPhase::Running);
    info!(level = next_level, "continuing to next trial");
}
