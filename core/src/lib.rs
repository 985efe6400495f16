//! Top-level plugin wiring the whole game together.

mod systems;

use {
    bevy::prelude::*,
    hud::HudPlugin,
    loading::LoadingPlugin,
    persistence::PersistencePlugin,
    profile::ProfilePlugin,
    session::SessionPlugin,
    states::GameState,
    trial_assets::TrialAssetsPlugin,
    trials::TrialsPlugin,
    world_components::WorldComponentsPlugin,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_plugins((
                WorldComponentsPlugin,
                TrialAssetsPlugin,
                PersistencePlugin::default(),
                ProfilePlugin,
                TrialsPlugin,
                SessionPlugin,
                LoadingPlugin,
                HudPlugin,
            ))
            .add_systems(Startup, systems::setup_camera)
            .add_systems(OnEnter(GameState::Running), systems::spawn_starting_scene);
    }
}
