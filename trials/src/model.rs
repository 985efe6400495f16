use {bevy::prelude::*, trial_assets::TrialDefinition};

/// Result of a trial mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum ProgressUpdate {
    /// The trial was already completed; the mutation was dropped.
    Ignored,
    /// The counter was updated (possibly clamped). `just_completed` is true
    /// only for the mutation that satisfied the last unmet objective.
    Applied { just_completed: bool },
}

impl ProgressUpdate {
    pub fn just_completed(self) -> bool {
        matches!(self, Self::Applied { just_completed: true })
    }
}

/// One level's objective configuration plus live progress counters.
///
/// Targets are fixed at construction. Every counter except coins is clamped
/// to `[0, target]`; coins are an unbounded score. `completed` flips
/// false→true exactly once per `initialize` cycle.
#[derive(Reflect, Default, Debug, Clone)]
#[reflect(Default)]
pub struct Trial {
    pub trial_number: u32,
    pub name: String,
    pub objective_text: String,
    /// Time limit in seconds.
    pub time_limit: f32,
    pub target_coins: i32,
    pub target_trash: i32,
    pub target_recycling: i32,
    pub target_trees_planted: i32,
    pub target_trees_watered: i32,
    current_coins: i32,
    current_trash: i32,
    current_recycling: i32,
    current_trees_planted: i32,
    current_trees_watered: i32,
    completed: bool,
}

impl From<&TrialDefinition> for Trial {
    fn from(def: &TrialDefinition) -> Self {
        Self {
            trial_number: def.trial_number,
            name: def.name.clone(),
            objective_text: def.objective_text.clone(),
            time_limit: def.time_limit,
            target_coins: def.target_coins,
            target_trash: def.target_trash,
            target_recycling: def.target_recycling,
            target_trees_planted: def.target_trees_planted,
            target_trees_watered: def.target_trees_watered,
            ..Default::default()
        }
    }
}

impl Trial {
    /// Resets all progress and clears the completion flag, allowing the
    /// completion notification to fire again on a later mutation.
    pub fn initialize(&mut self) {
        self.current_coins = 0;
        self.current_trash = 0;
        self.current_recycling = 0;
        self.current_trees_planted = 0;
        self.current_trees_watered = 0;
        self.completed = false;
    }

    pub fn coins(&self) -> i32 {
        self.current_coins
    }

    pub fn trash(&self) -> i32 {
        self.current_trash
    }

    pub fn recycling(&self) -> i32 {
        self.current_recycling
    }

    pub fn trees_planted(&self) -> i32 {
        self.current_trees_planted
    }

    pub fn trees_watered(&self) -> i32 {
        self.current_trees_watered
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Coins are a score, not a gating objective, so they have no upper
    /// clamp.
    pub fn add_coins(&mut self, amount: i32) -> ProgressUpdate {
        if self.completed {
            return ProgressUpdate::Ignored;
        }
        self.current_coins = (self.current_coins + amount).max(0);
        self.evaluate_completion()
    }

    pub fn add_trash(&mut self, amount: i32) -> ProgressUpdate {
        if self.completed {
            return ProgressUpdate::Ignored;
        }
        self.current_trash = (self.current_trash + amount).clamp(0, self.target_trash);
        self.evaluate_completion()
    }

    pub fn add_recycling(&mut self, amount: i32) -> ProgressUpdate {
        if self.completed {
            return ProgressUpdate::Ignored;
        }
        self.current_recycling = (self.current_recycling + amount).clamp(0, self.target_recycling);
        self.evaluate_completion()
    }

    pub fn add_trees_planted(&mut self, amount: i32) -> ProgressUpdate {
        if self.completed {
            return ProgressUpdate::Ignored;
        }
        self.current_trees_planted =
            (self.current_trees_planted + amount).clamp(0, self.target_trees_planted);
        self.evaluate_completion()
    }

    pub fn add_trees_watered(&mut self, amount: i32) -> ProgressUpdate {
        if self.completed {
            return ProgressUpdate::Ignored;
        }
        self.current_trees_watered =
            (self.current_trees_watered + amount).clamp(0, self.target_trees_watered);
        self.evaluate_completion()
    }

    fn evaluate_completion(&mut self) -> ProgressUpdate {
        let just_completed = !self.completed && self.all_objectives_met();
        if just_completed {
            self.completed = true;
        }
        ProgressUpdate::Applied { just_completed }
    }

    fn all_objectives_met(&self) -> bool {
        self.current_coins >= self.target_coins
            && self.current_trash >= self.target_trash
            && self.current_recycling >= self.target_recycling
            && self.current_trees_planted >= self.target_trees_planted
            && self.current_trees_watered >= self.target_trees_watered
    }

    /// Aggregate completion ratio in `[0, 1]`.
    ///
    /// Watered trees are excluded from both sides of the ratio; this mirrors
    /// the shipped progress formula and is pinned by a test pending product
    /// clarification.
    pub fn overall_progress(&self) -> f32 {
        let total_possible = (self.target_coins
            + self.target_trash
            + self.target_recycling
            + self.target_trees_planted) as f32;
        if total_possible <= 0.0 {
            return 0.0;
        }
        let current_total = (self.current_coins
            + self.current_trash
            + self.current_recycling
            + self.current_trees_planted) as f32;
        (current_total / total_possible).clamp(0.0, 1.0)
    }

    /// Multi-line progress summary for the objective banner.
    pub fn progress_report(&self) -> String {
        format!(
            "{} Progress:\n\
             - Coins: {}\n\
             - Trash: {}/{}\n\
             - Recycling: {}/{}\n\
             - Trees planted: {}/{}\n\
             - Trees watered: {}/{}",
            self.name,
            self.current_coins,
            self.current_trash,
            self.target_trash,
            self.current_recycling,
            self.target_recycling,
            self.current_trees_planted,
            self.target_trees_planted,
            self.current_trees_watered,
            self.target_trees_watered,
        )
    }

    /// `MM:SS` of the time remaining after `elapsed` seconds. Not floored at
    /// zero: overrun renders as `-MM:SS` of the magnitude. The display layer
    /// clamps the rendered string itself.
    pub fn formatted_time_left(&self, elapsed: f32) -> String {
        let time_left = self.time_limit - elapsed;
        let sign = if time_left < 0.0 { "-" } else { "" };
        let whole_seconds = time_left.abs() as i32;
        let minutes = whole_seconds / 60;
        let seconds = whole_seconds % 60;
        format!("{sign}{minutes:02}:{seconds:02}")
    }
}
