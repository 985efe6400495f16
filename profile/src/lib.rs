//! Identity/profile service: local user cache over the remote store.
//!
//! The cache is a last-known-good snapshot, never authoritative: reads are
//! cache-first with a remote refresh on miss, writes go to the remote and are
//! logged-and-dropped on failure.


use {
    bevy::prelude::*,
    gameplay_events::BuildingEntered,
    persistence::RemoteStore,
    std::collections::HashMap,
};

pub use persistence::UserRecord as User;

pub struct ProfilePlugin;

impl Plugin for ProfilePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UserCache>()
            .add_observer(on_building_entered);
        if !app.world().contains_resource::<ActivePlayer>() {
            app.init_resource::<ActivePlayer>();
        }
    }
}

/// The signed-in player this session acts for.
#[derive(Resource, Debug, Clone)]
pub struct ActivePlayer {
    pub user_id: String,
    pub name: String,
}

impl Default for ActivePlayer {
    fn default() -> Self {
        Self::named("Player")
    }
}

impl ActivePlayer {
    pub fn named(name: &str) -> Self {
        Self {
            user_id: name.to_lowercase().replace(' ', "_"),
            name: name.to_string(),
        }
    }
}

/// Local snapshot of remote user documents.
#[derive(Resource, Default, Debug)]
pub struct UserCache {
    users: HashMap<String, User>,
}

impl UserCache {
    pub fn cached(&self, user_id: &str) -> Option<&User> {
        self.users.get(user_id)
    }

    /// Cache-first read; a miss refreshes from the remote store and keeps the
    /// snapshot. A remote failure yields `None` and a log entry, nothing
    /// more.
    pub fn get_user_profile(&mut self, store: &RemoteStore, user_id: &str) -> Option<User> {
        if let Some(user) = self.users.get(user_id) {
            return Some(user.clone());
        }
        match store.backend().fetch_user(user_id) {
            Ok(user) => {
                self.users.insert(user_id.to_string(), user.clone());
                Some(user)
            }
            Err(err) => {
                warn!(user_id, error = %err, "profile fetch failed");
                None
            }
        }
    }

    /// Adds points to the user and pushes the updated document to the remote
    /// store. Returns the new balance, or `None` when the user is unknown.
    pub fn add_points(&mut self, store: &RemoteStore, user_id: &str, delta: i32) -> Option<i32> {
        self.get_user_profile(store, user_id)?;
        let user = self.users.get_mut(user_id)?;
        user.points += delta;
        if let Err(err) = store.backend().update_user(user) {
            warn!(user_id, error = %err, "failed to push points update");
        }
        Some(user.points)
    }

    pub fn set_current_building(&mut self, store: &RemoteStore, user_id: &str, building: &str) {
        if self.get_user_profile(store, user_id).is_none() {
            return;
        }
        let Some(user) = self.users.get_mut(user_id) else {
            return;
        };
        user.current_building = building.to_string();
        if let Err(err) = store.backend().update_user(user) {
            warn!(user_id, error = %err, "failed to push building update");
        }
    }
}

fn on_building_entered(
    trigger: On<BuildingEntered>,
    store: Res<RemoteStore>,
    player: Res<ActivePlayer>,
    mut cache: ResMut<UserCache>,
) {
    let building = &trigger.event().building;
    debug!(player = %player.name, %building, "building entered");
    cache.set_current_building(&store, &player.user_id, building);
}
