//! Heads-up display: objective counters, trial timer, objective banner and
//! the time-up / trial-complete menus.
//!
//! All strings rendered here come from the trial model; this crate only
//! places them on screen and forwards button presses as events.

pub mod components;

use {
    bevy::prelude::*,
    components::*,
    session::{LOW_TIME_THRESHOLD, SessionTimer},
    states::{GameState, SessionPhase},
    trial_events::{CelebrationCue, ContinueRequested, RetryRequested},
    trials::TrialRegistry,
    widgets::{UiTheme, spawn_action_button, spawn_menu_panel},
};

/// How often the objective banner re-surfaces, and for how long it stays.
const OBJECTIVE_REPEAT_SECONDS: f32 = 60.0;
const OBJECTIVE_VISIBLE_SECONDS: f32 = 10.0;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ObjectiveBanner>()
            .add_systems(OnEnter(GameState::Running), setup_hud)
            .add_systems(
                Update,
                (
                    update_counter_texts.run_if(resource_changed::<TrialRegistry>),
                    update_timer_text,
                    update_objective_banner,
                    expire_celebration_flashes,
                    handle_retry_button,
                    handle_continue_button,
                )
                    .run_if(in_state(GameState::Running)),
            )
            .add_systems(OnEnter(SessionPhase::Running), show_objective_now)
            .add_systems(OnEnter(SessionPhase::TimedOut), show_time_up_menu)
            .add_systems(OnExit(SessionPhase::TimedOut), despawn_all::<TimeUpMenu>)
            .add_systems(OnEnter(SessionPhase::TrialComplete), show_trial_complete_menu)
            .add_systems(
                OnExit(SessionPhase::TrialComplete),
                despawn_all::<TrialCompleteMenu>,
            )
            .add_observer(on_celebration_cue);
    }
}

/// Cadence state for the repeating objective reminder.
#[derive(Resource)]
struct ObjectiveBanner {
    repeat: Timer,
    visible: Timer,
}

impl Default for ObjectiveBanner {
    fn default() -> Self {
        let mut visible = Timer::from_seconds(OBJECTIVE_VISIBLE_SECONDS, TimerMode::Once);
        // Start hidden until the first show.
        visible.pause();
        Self {
            repeat: Timer::from_seconds(OBJECTIVE_REPEAT_SECONDS, TimerMode::Repeating),
            visible,
        }
    }
}

fn setup_hud(mut commands: Commands) {
    commands
        .spawn((
            HudRoot,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
        ))
        .with_children(|root| {
            let label = |size: f32| TextFont {
                font_size: size,
                ..default()
            };

            root.spawn((
                TrialNameText,
                Text::new(""),
                label(22.0),
                TextColor(UiTheme::TEXT_PRIMARY),
            ));
            root.spawn((
                TimerText,
                Text::new("00:00"),
                label(20.0),
                TextColor(UiTheme::TEXT_PRIMARY),
            ));
            root.spawn((
                CoinText,
                Text::new("0"),
                label(18.0),
                TextColor(UiTheme::TEXT_PRIMARY),
            ));
            root.spawn((
                TrashText,
                Text::new("0/0"),
                label(18.0),
                TextColor(UiTheme::TEXT_MUTED),
            ));
            root.spawn((
                RecyclingText,
                Text::new("0/0"),
                label(18.0),
                TextColor(UiTheme::TEXT_MUTED),
            ));
            root.spawn((
                TreesPlantedText,
                Text::new("0/0"),
                label(18.0),
                TextColor(UiTheme::TEXT_MUTED),
            ));
            root.spawn((
                TreesWateredText,
                Text::new("0/0"),
                label(18.0),
                TextColor(UiTheme::TEXT_MUTED),
            ));
            root.spawn((
                ProgressText,
                Text::new("Overall: 0%"),
                label(18.0),
                TextColor(UiTheme::TEXT_MUTED),
            ));
            root.spawn((
                ObjectiveBannerText,
                Text::new(""),
                label(16.0),
                TextColor(UiTheme::TEXT_MUTED),
            ));
        });
}

fn update_counter_texts(
    registry: Res<TrialRegistry>,
    mut texts: ParamSet<(
        Query<&mut Text, With<CoinText>>,
        Query<&mut Text, With<TrashText>>,
        Query<&mut Text, With<RecyclingText>>,
        Query<&mut Text, With<TreesPlantedText>>,
        Query<&mut Text, With<TreesWateredText>>,
        Query<&mut Text, With<TrialNameText>>,
        Query<&mut Text, With<ProgressText>>,
    )>,
) {
    let Some(trial) = registry.current_trial() else {
        return;
    };

    if let Ok(mut text) = texts.p0().single_mut() {
        text.0 = format!("Coins: {}", trial.coins());
    }
    if let Ok(mut text) = texts.p1().single_mut() {
        text.0 = format!("Trash: {}/{}", trial.trash(), trial.target_trash);
    }
    if let Ok(mut text) = texts.p2().single_mut() {
        text.0 = format!("Recycling: {}/{}", trial.recycling(), trial.target_recycling);
    }
    if let Ok(mut text) = texts.p3().single_mut() {
        text.0 = format!(
            "Trees planted: {}/{}",
            trial.trees_planted(),
            trial.target_trees_planted
        );
    }
    if let Ok(mut text) = texts.p4().single_mut() {
        text.0 = format!(
            "Trees watered: {}/{}",
            trial.trees_watered(),
            trial.target_trees_watered
        );
    }
    if let Ok(mut text) = texts.p5().single_mut() {
        text.0 = trial.name.clone();
    }
    if let Ok(mut text) = texts.p6().single_mut() {
        text.0 = format!("Overall: {:.0}%", trial.overall_progress() * 100.0);
    }
}

fn update_timer_text(
    registry: Res<TrialRegistry>,
    timer: Res<SessionTimer>,
    phase: Res<State<SessionPhase>>,
    mut query: Query<(&mut Text, &mut TextColor), With<TimerText>>,
) {
    let Some(trial) = registry.current_trial() else {
        return;
    };
    let Ok((mut text, mut color)) = query.single_mut() else {
        return;
    };

    if *phase.get() == SessionPhase::TimedOut {
        text.0 = "00:00".to_string();
        color.0 = UiTheme::WARNING;
        return;
    }

    text.0 = trial.formatted_time_left(timer.elapsed());
    color.0 = if timer.remaining(trial.time_limit) <= LOW_TIME_THRESHOLD {
        UiTheme::WARNING
    } else {
        UiTheme::TEXT_PRIMARY
    };
}

fn show_objective_now(
    registry: Res<TrialRegistry>,
    mut banner: ResMut<ObjectiveBanner>,
    mut query: Query<&mut Text, With<ObjectiveBannerText>>,
) {
    let Some(trial) = registry.current_trial() else {
        return;
    };
    if let Ok(mut text) = query.single_mut() {
        text.0 = trial.objective_text.clone();
    }
    banner.repeat.reset();
    banner.visible.reset();
    banner.visible.unpause();
}

fn update_objective_banner(
    time: Res<Time>,
    registry: Res<TrialRegistry>,
    mut banner: ResMut<ObjectiveBanner>,
    mut query: Query<&mut Text, With<ObjectiveBannerText>>,
) {
    let Ok(mut text) = query.single_mut() else {
        return;
    };

    if banner.repeat.tick(time.delta()).just_finished() {
        if let Some(trial) = registry.current_trial() {
            text.0 = trial.progress_report();
            banner.visible.reset();
            banner.visible.unpause();
        }
    }

    if banner.visible.tick(time.delta()).just_finished() {
        text.0.clear();
    }
}

fn on_celebration_cue(_trigger: On<CelebrationCue>, mut commands: Commands) {
    info!("celebration cue");
    commands.spawn((
        CelebrationFlash {
            timer: Timer::from_seconds(1.5, TimerMode::Once),
        },
        Text::new("Trial Complete!"),
        TextFont {
            font_size: 48.0,
            ..default()
        },
        TextColor(UiTheme::ACCENT),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(40.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
    ));
}

fn expire_celebration_flashes(
    time: Res<Time>,
    mut query: Query<(Entity, &mut CelebrationFlash)>,
    mut commands: Commands,
) {
    for (entity, mut flash) in query.iter_mut() {
        if flash.timer.tick(time.delta()).just_finished() {
            commands.entity(entity).despawn();
        }
    }
}

fn show_time_up_menu(mut commands: Commands) {
    spawn_menu_panel(&mut commands, TimeUpMenu, "Time's Up!", |panel| {
        spawn_action_button(panel, "Retry", RetryButton);
    });
}

fn show_trial_complete_menu(registry: Res<TrialRegistry>, mut commands: Commands) {
    let summary = registry
        .current_trial()
        .map(|trial| trial.progress_report())
        .unwrap_or_default();
    spawn_menu_panel(&mut commands, TrialCompleteMenu, "Trial Complete!", move |panel| {
        panel.spawn((
            Text::new(summary),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(UiTheme::TEXT_MUTED),
        ));
        spawn_action_button(panel, "Continue", ContinueButton);
    });
}

fn handle_retry_button(
    interactions: Query<&Interaction, (Changed<Interaction>, With<RetryButton>)>,
    mut commands: Commands,
) {
    for interaction in interactions.iter() {
        if *interaction == Interaction::Pressed {
            commands.trigger(RetryRequested);
        }
    }
}

fn handle_continue_button(
    interactions: Query<&Interaction, (Changed<Interaction>, With<ContinueButton>)>,
    mut commands: Commands,
) {
    for interaction in interactions.iter() {
        if *interaction == Interaction::Pressed {
            commands.trigger(ContinueRequested);
        }
    }
}

fn despawn_all<M: Component>(query: Query<Entity, With<M>>, mut commands: Commands) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
