use {
    bevy::prelude::*,
    gameplay_events::ItemCollected,
    trial_assets::TrialDefinition,
    trial_events::{ObjectiveProgress, TrialCompleted},
    trials::{TrialRegistry, TrialsPlugin},
    world_components::{Collectible, CollectibleKind},
};

#[derive(Resource, Default)]
struct Notifications {
    progress: u32,
    completed: u32,
}

fn test_app(defs: &[TrialDefinition]) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(TrialsPlugin);

    app.init_resource::<Notifications>();
    app.add_observer(
        |_trigger: On<ObjectiveProgress>, mut notifications: ResMut<Notifications>| {
            notifications.progress += 1;
        },
    );
    app.add_observer(
        |_trigger: On<TrialCompleted>, mut notifications: ResMut<Notifications>| {
            notifications.completed += 1;
        },
    );

    let registry = TrialRegistry::from_definitions(defs.iter());
    app.insert_resource(registry);
    app.update();
    app
}

fn def() -> TrialDefinition {
    TrialDefinition {
        trial_number: 1,
        name: "Sorting Trash".to_string(),
        objective_text: "Recycle the campus".to_string(),
        time_limit: 330.0,
        target_coins: 0,
        target_trash: 1,
        target_recycling: 0,
        target_trees_planted: 0,
        target_trees_watered: 0,
    }
}

#[test]
fn duplicate_trial_load_fires_completion_once() {
    let mut app = test_app(&[def()]);

    // A duplicate transition loads the same level twice in a row. The
    // completion observers are registered once at plugin build, so this must
    // not double anything up.
    {
        let mut registry = app.world_mut().resource_mut::<TrialRegistry>();
        assert!(registry.load_trial(0));
        assert!(registry.load_trial(0));
    }

    app.world_mut()
        .trigger(ItemCollected::one(CollectibleKind::Trash));
    app.update();

    let notifications = app.world().resource::<Notifications>();
    assert_eq!(notifications.completed, 1);
    assert_eq!(notifications.progress, 1);
}

#[test]
fn clamped_pickup_still_reports_progress() {
    let mut app = test_app(&[TrialDefinition {
        target_recycling: 1,
        ..def()
    }]);
    app.world_mut()
        .resource_mut::<TrialRegistry>()
        .load_trial(0);

    // Second trash pickup is clamped away; the trial stays incomplete but
    // each pickup still produces a progress notification.
    app.world_mut()
        .trigger(ItemCollected::one(CollectibleKind::Trash));
    app.update();
    app.world_mut()
        .trigger(ItemCollected::one(CollectibleKind::Trash));
    app.update();

    let notifications = app.world().resource::<Notifications>();
    assert_eq!(notifications.progress, 2);
    assert_eq!(notifications.completed, 0);

    let registry = app.world().resource::<TrialRegistry>();
    assert_eq!(registry.current_trial().unwrap().trash(), 1);
}

#[test]
fn completed_trial_swallows_further_mutations() {
    let mut app = test_app(&[def()]);
    app.world_mut()
        .resource_mut::<TrialRegistry>()
        .load_trial(0);

    app.world_mut()
        .trigger(ItemCollected::one(CollectibleKind::Trash));
    app.update();
    app.world_mut()
        .trigger(ItemCollected::one(CollectibleKind::Trash));
    app.update();

    let notifications = app.world().resource::<Notifications>();
    assert_eq!(notifications.completed, 1);
    // The post-completion pickup is ignored outright: no progress re-render.
    assert_eq!(notifications.progress, 1);

    let registry = app.world().resource::<TrialRegistry>();
    assert_eq!(registry.current_trial().unwrap().trash(), 1);
}

#[test]
fn trial_one_completion_clears_leftover_litter() {
    let mut app = test_app(&[def()]);
    app.world_mut()
        .resource_mut::<TrialRegistry>()
        .load_trial(0);

    let trash = app
        .world_mut()
        .spawn(Collectible::new(CollectibleKind::Trash))
        .id();
    let recycling = app
        .world_mut()
        .spawn(Collectible::new(CollectibleKind::Recycling))
        .id();
    let coin = app
        .world_mut()
        .spawn(Collectible::new(CollectibleKind::Coin))
        .id();
    app.update();

    app.world_mut()
        .trigger(ItemCollected::one(CollectibleKind::Trash));
    app.update();

    assert!(app.world().get_entity(trash).is_err());
    assert!(app.world().get_entity(recycling).is_err());
    // Coins are not litter.
    assert!(app.world().get_entity(coin).is_ok());
}
