//! Builds the trial registry from `.trial.ron` assets at startup.

use {
    bevy::{asset::LoadedFolder, prelude::*},
    states::GameState,
    trial_assets::TrialDefinition,
    trials::TrialRegistry,
};

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_trial_assets).add_systems(
            Update,
            check_trials_loaded.run_if(in_state(GameState::Loading)),
        );
    }
}

#[derive(Resource)]
struct TrialsFolderHandle(Handle<LoadedFolder>);

fn load_trial_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    info!("loading trial definitions");
    let handle = asset_server.load_folder("trials");
    commands.insert_resource(TrialsFolderHandle(handle));
}

fn check_trials_loaded(
    asset_server: Res<AssetServer>,
    folder: Res<TrialsFolderHandle>,
    definitions: Res<Assets<TrialDefinition>>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !asset_server.is_loaded_with_dependencies(folder.0.id()) {
        return;
    }

    let defs: Vec<&TrialDefinition> = definitions.iter().map(|(_, def)| def).collect();
    if defs.is_empty() {
        warn!("no trial definitions found under assets/trials");
    }

    let mut registry = TrialRegistry::from_definitions(defs);
    registry.load_trial(0);
    info!(count = registry.len(), "trial registry built");

    commands.insert_resource(registry);
    next_state.set(GameState::Running);
}
