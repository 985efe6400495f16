use bevy::prelude::*;

#[derive(Component)]
pub struct HudRoot;

#[derive(Component)]
pub struct CoinText;

#[derive(Component)]
pub struct TrashText;

#[derive(Component)]
pub struct RecyclingText;

#[derive(Component)]
pub struct TreesPlantedText;

#[derive(Component)]
pub struct TreesWateredText;

#[derive(Component)]
pub struct ProgressText;

#[derive(Component)]
pub struct TimerText;

#[derive(Component)]
pub struct TrialNameText;

#[derive(Component)]
pub struct ObjectiveBannerText;

#[derive(Component)]
pub struct TimeUpMenu;

#[derive(Component)]
pub struct TrialCompleteMenu;

#[derive(Component)]
pub struct RetryButton;

#[derive(Component)]
pub struct ContinueButton;

/// Short-lived celebratory text spawned by the completion cue.
#[derive(Component)]
pub struct CelebrationFlash {
    pub timer: Timer,
}
