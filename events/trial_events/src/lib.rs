use bevy::prelude::*;

/// Fired after every applied trial mutation, whether or not the counter value
/// moved (clamped mutations still re-render the HUD).
#[derive(Event, Debug, Clone, Copy)]
pub struct ObjectiveProgress;

/// Fired exactly once per initialize cycle, by the mutation that satisfies the
/// last unmet objective.
#[derive(Event, Debug, Clone, Copy)]
pub struct TrialCompleted {
    pub trial_number: u32,
}

/// Fired exactly once when the session timer reaches the trial's time limit.
#[derive(Event, Debug, Clone, Copy)]
pub struct TimeExpired;

/// A celebratory cue for the presentation layer, raised mid completion
/// cascade.
#[derive(Event, Debug, Clone, Copy)]
pub struct CelebrationCue;

/// Player pressed Continue on the trial-complete menu.
#[derive(Event, Debug, Clone, Copy)]
pub struct ContinueRequested;

/// Player pressed Retry on the time-up menu.
#[derive(Event, Debug, Clone, Copy)]
pub struct RetryRequested;
