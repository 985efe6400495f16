use {
    bevy::prelude::*,
    world_components::{Building, Collectible, CollectibleKind, PlantedTree, Player, TreeSpot},
};

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Populates the opening scene: the player, litter to pick up, empty tree
/// spots and the buildings the player can walk into.
pub fn spawn_starting_scene(mut commands: Commands) {
    info!("spawning starting scene");

    commands.spawn((
        Player,
        Sprite {
            color: Color::srgb(0.9, 0.8, 0.4),
            custom_size: Some(Vec2::splat(24.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
    ));

    let collectible = |kind: CollectibleKind, color: Color, x: f32, y: f32| {
        (
            Collectible::new(kind),
            Sprite {
                color,
                custom_size: Some(Vec2::splat(12.0)),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
        )
    };

    for i in 0..10 {
        let x = -220.0 + i as f32 * 48.0;
        commands.spawn(collectible(
            CollectibleKind::Trash,
            Color::srgb(0.45, 0.35, 0.25),
            x,
            -120.0,
        ));
        commands.spawn(collectible(
            CollectibleKind::Recycling,
            Color::srgb(0.3, 0.6, 0.85),
            x,
            -170.0,
        ));
    }

    for i in 0..6 {
        commands.spawn(collectible(
            CollectibleKind::Coin,
            Color::srgb(0.95, 0.85, 0.2),
            -120.0 + i as f32 * 52.0,
            90.0,
        ));
    }

    for i in 0..4 {
        commands.spawn((
            TreeSpot,
            Sprite {
                color: Color::srgb(0.35, 0.25, 0.15),
                custom_size: Some(Vec2::splat(18.0)),
                ..default()
            },
            Transform::from_xyz(-90.0 + i as f32 * 60.0, 180.0, 0.0),
        ));
    }

    // Established town trees; new saplings come from the planting spots.
    for x in [-180.0, 160.0] {
        commands.spawn((
            PlantedTree { watered: true },
            Sprite {
                color: Color::srgb(0.2, 0.5, 0.25),
                custom_size: Some(Vec2::new(22.0, 30.0)),
                ..default()
            },
            Transform::from_xyz(x, 230.0, 0.0),
        ));
    }

    for (name, x) in [("Library", -260.0), ("Town Hall", 260.0)] {
        commands.spawn((
            Building { name: name.into() },
            Sprite {
                color: Color::srgb(0.55, 0.5, 0.6),
                custom_size: Some(Vec2::new(64.0, 80.0)),
                ..default()
            },
            Transform::from_xyz(x, 40.0, 0.0),
        ));
    }
}
