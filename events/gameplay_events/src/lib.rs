//! Discrete input events produced by the collision/interaction layer.
//!
//! The trial progression logic consumes these 1:1; it never inspects physics
//! state directly.

use {bevy::prelude::*, world_components::CollectibleKind};

/// The player picked up a world item.
#[derive(Event, Debug, Clone, Copy)]
pub struct ItemCollected {
    pub kind: CollectibleKind,
    pub amount: i32,
}

impl ItemCollected {
    pub fn one(kind: CollectibleKind) -> Self {
        Self { kind, amount: 1 }
    }
}

/// The player planted a sapling on a free spot.
#[derive(Event, Debug, Clone, Copy)]
pub struct TreePlanted;

/// The player watered a previously planted tree.
#[derive(Event, Debug, Clone, Copy)]
pub struct TreeWatered;

/// The player walked into a building's doorway.
#[derive(Event, Debug, Clone)]
pub struct BuildingEntered {
    pub building: String,
}
