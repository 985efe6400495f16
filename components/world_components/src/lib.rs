use bevy::prelude::*;

pub struct WorldComponentsPlugin;

impl Plugin for WorldComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Collectible>();
        app.register_type::<CollectibleKind>();
        app.register_type::<Building>();
        app.register_type::<TreeSpot>();
        app.register_type::<PlantedTree>();
        app.register_type::<Player>();
    }
}

/// Category of a pickup lying in the world.
#[derive(Reflect, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectibleKind {
    #[default]
    Coin,
    Trash,
    Recycling,
}

/// A pickup the player can gather. The collision layer despawns the entity
/// and reports the gather as a gameplay event.
#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component, Default)]
pub struct Collectible {
    pub kind: CollectibleKind,
}

impl Collectible {
    pub fn new(kind: CollectibleKind) -> Self {
        Self { kind }
    }
}

/// An enterable building on the map.
#[derive(Component, Reflect, Default, Debug, Clone)]
#[reflect(Component, Default)]
pub struct Building {
    pub name: String,
}

/// A plot where a sapling can be planted.
#[derive(Component, Reflect, Default, Debug)]
#[reflect(Component, Default)]
pub struct TreeSpot;

/// A tree that has been planted and may later be watered.
#[derive(Component, Reflect, Default, Debug)]
#[reflect(Component, Default)]
pub struct PlantedTree {
    pub watered: bool,
}

#[derive(Component, Reflect, Default, Debug)]
#[reflect(Component, Default)]
pub struct Player;
