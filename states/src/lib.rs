use bevy::prelude::*;

#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Loading,
    Running,
}

/// Lifecycle of the active trial session.
///
/// `Completing` covers the celebration/persistence cascade that runs after the
/// final objective is met; the menu-facing terminal states are `TrialComplete`
/// and `TimedOut`.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    #[default]
    NotStarted,
    Running,
    Completing,
    TrialComplete,
    TimedOut,
}
