//! Trial progression model: per-level objective counters, completion
//! detection and the registry of all trials.

mod model;
mod registry;
mod systems;
#[cfg(test)]
mod tests;

pub use model::{ProgressUpdate, Trial};
pub use registry::TrialRegistry;
pub use systems::{
    cleanup_completed_trial, on_item_collected, on_tree_planted, on_tree_watered,
};

use bevy::prelude::*;

pub struct TrialsPlugin;

impl Plugin for TrialsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrialRegistry>()
            .register_type::<Trial>()
            .register_type::<TrialRegistry>()
            // One persistent observer per notification; repeated trial loads
            // can never stack duplicate subscriptions.
            .add_observer(on_item_collected)
            .add_observer(on_tree_planted)
            .add_observer(on_tree_watered)
            .add_observer(cleanup_completed_trial);
    }
}
