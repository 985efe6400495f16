use {crate::model::Trial, bevy::prelude::*, trial_assets::TrialDefinition};

/// Ordered sequence of trials, built once at startup, indexed by `level`.
///
/// The current trial is the registry slot itself; mutations through
/// [`current_trial_mut`](Self::current_trial_mut) write through to the slot.
/// Slots live for the process lifetime and are superseded, never freed, on
/// level change.
#[derive(Resource, Reflect, Default, Debug)]
#[reflect(Resource, Default)]
pub struct TrialRegistry {
    trials: Vec<Trial>,
    pub level: usize,
    current: Option<usize>,
}

impl TrialRegistry {
    pub fn from_definitions<'a>(defs: impl IntoIterator<Item = &'a TrialDefinition>) -> Self {
        let mut trials: Vec<Trial> = defs.into_iter().map(Trial::from).collect();
        trials.sort_by_key(|trial| trial.trial_number);
        Self {
            trials,
            level: 0,
            current: None,
        }
    }

    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Makes the slot at `level` current and re-initializes it. An
    /// out-of-range index is logged and ignored; the previous current trial
    /// stays active.
    pub fn load_trial(&mut self, level: usize) -> bool {
        let Some(trial) = self.trials.get_mut(level) else {
            warn!(level, count = self.trials.len(), "no trial at this level, keeping current");
            return false;
        };
        trial.initialize();
        self.current = Some(level);
        info!(level, trial = %trial.name, "loaded trial");
        true
    }

    /// Sets the level index and loads the matching trial. The index is
    /// recorded even when loading fails, matching `load_trial`'s permissive
    /// range handling.
    pub fn set_game_level(&mut self, level: usize) -> bool {
        self.level = level;
        self.load_trial(level)
    }

    /// Re-initializes the current trial in place without changing level.
    pub fn reset_level(&mut self) {
        if let Some(trial) = self.current_trial_mut() {
            trial.initialize();
            info!(trial = %trial.name, "reset trial");
        }
    }

    /// Alias kept for the public surface; identical to [`reset_level`](Self::reset_level).
    pub fn reset_temporary_state(&mut self) {
        self.reset_level();
    }

    pub fn current_trial(&self) -> Option<&Trial> {
        self.current.and_then(|index| self.trials.get(index))
    }

    pub fn current_trial_mut(&mut self) -> Option<&mut Trial> {
        self.current.and_then(|index| self.trials.get_mut(index))
    }
}
