use {
    crate::{model::ProgressUpdate, registry::TrialRegistry},
    bevy::prelude::*,
    gameplay_events::{ItemCollected, TreePlanted, TreeWatered},
    trial_events::{ObjectiveProgress, TrialCompleted},
    world_components::{Collectible, CollectibleKind},
};

/// Observer translating pickups into trial mutations.
pub fn on_item_collected(
    trigger: On<ItemCollected>,
    mut registry: ResMut<TrialRegistry>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Some(trial) = registry.current_trial_mut() else {
        return;
    };

    let update = match event.kind {
        CollectibleKind::Coin => {
            let update = trial.add_coins(event.amount);
            debug!(coins = trial.coins(), "coins collected");
            update
        }
        CollectibleKind::Trash => {
            let update = trial.add_trash(event.amount);
            debug!(
                current = trial.trash(),
                target = trial.target_trash,
                "trash collected"
            );
            update
        }
        CollectibleKind::Recycling => {
            let update = trial.add_recycling(event.amount);
            debug!(
                current = trial.recycling(),
                target = trial.target_recycling,
                "recycling collected"
            );
            update
        }
    };

    publish_progress(update, trial.trial_number, &mut commands);
}

/// Observer for planting; always adds exactly one tree.
pub fn on_tree_planted(
    _trigger: On<TreePlanted>,
    mut registry: ResMut<TrialRegistry>,
    mut commands: Commands,
) {
    let Some(trial) = registry.current_trial_mut() else {
        return;
    };
    let update = trial.add_trees_planted(1);
    debug!(
        current = trial.trees_planted(),
        target = trial.target_trees_planted,
        "tree planted"
    );
    publish_progress(update, trial.trial_number, &mut commands);
}

/// Observer for watering; always adds exactly one tree.
pub fn on_tree_watered(
    _trigger: On<TreeWatered>,
    mut registry: ResMut<TrialRegistry>,
    mut commands: Commands,
) {
    let Some(trial) = registry.current_trial_mut() else {
        return;
    };
    let update = trial.add_trees_watered(1);
    debug!(
        current = trial.trees_watered(),
        target = trial.target_trees_watered,
        "tree watered"
    );
    publish_progress(update, trial.trial_number, &mut commands);
}

fn publish_progress(update: ProgressUpdate, trial_number: u32, commands: &mut Commands) {
    match update {
        ProgressUpdate::Ignored => {}
        ProgressUpdate::Applied { just_completed } => {
            commands.trigger(ObjectiveProgress);
            if just_completed {
                info!(trial_number, "all objectives met");
                commands.trigger(TrialCompleted { trial_number });
            }
        }
    }
}

/// Per-trial completion side effect. Trial 1 ends by clearing whatever litter
/// is still lying around; the collection is an explicit marker query, not a
/// scene-wide tag scan.
pub fn cleanup_completed_trial(
    trigger: On<TrialCompleted>,
    collectibles: Query<(Entity, &Collectible)>,
    mut commands: Commands,
) {
    if trigger.event().trial_number != 1 {
        return;
    }
    let mut removed = 0;
    for (entity, collectible) in collectibles.iter() {
        if matches!(
            collectible.kind,
            CollectibleKind::Trash | CollectibleKind::Recycling
        ) {
            commands.entity(entity).despawn();
            removed += 1;
        }
    }
    debug!(removed, "cleared leftover litter after trial 1");
}
