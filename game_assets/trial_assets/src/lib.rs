//! Trial asset definitions for the progression system.
//!
//! Trials are loaded from `.trial.ron` files and define one level's objective
//! targets and time limit.

use {bevy::prelude::*, bevy_common_assets::ron::RonAssetPlugin, serde::Deserialize};

pub struct TrialAssetsPlugin;

impl Plugin for TrialAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<TrialDefinition>::new(&["trial.ron"]));
    }
}

/// Trial definition loaded from `.trial.ron` asset files.
///
/// Targets default to 0, which means the objective is vacuously satisfied;
/// `target_coins` stays 0 in the shipped set because coins are a score, not a
/// gate.
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
pub struct TrialDefinition {
    /// Ordinal of the trial; registry slots are sorted by this.
    pub trial_number: u32,
    /// Display name shown in the HUD
    pub name: String,
    /// Objective text shown to the player
    pub objective_text: String,
    /// Time limit in seconds
    pub time_limit: f32,
    #[serde(default)]
    pub target_coins: i32,
    #[serde(default)]
    pub target_trash: i32,
    #[serde(default)]
    pub target_recycling: i32,
    #[serde(default)]
    pub target_trees_planted: i32,
    #[serde(default)]
    pub target_trees_watered: i32,
}
