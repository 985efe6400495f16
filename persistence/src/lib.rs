//! Remote data service boundary.
//!
//! Gameplay results and user documents are written through a [`StoreBackend`]
//! behind the [`RemoteStore`] resource. The shipped backend is file-based RON
//! under a data directory; saves run as `IoTaskPool` tasks so the session
//! flow never blocks on I/O. Store failures are surfaced as [`StoreError`]
//! for the caller to log; they must never unwind into gameplay.


use {
    bevy::{
        prelude::*,
        tasks::{IoTaskPool, Task},
    },
    chrono::Local,
    serde::{Deserialize, Serialize},
    std::{fmt, fs, io, path::PathBuf, sync::Arc},
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Record written when a trial is completed.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrialCompletionRecord {
    pub player_name: String,
    pub coins_collected: i32,
    pub trial_number: u32,
    pub completed_at: String,
}

/// Record written when a player starts a play session.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GameAttemptRecord {
    pub player_name: String,
    pub attempted_at: String,
}

/// Remote user document, mirrored locally by the profile cache.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UserRecord {
    pub user_id: String,
    pub notification_token: String,
    pub name: String,
    pub email: String,
    pub last_login: String,
    pub points: i32,
    pub current_building: String,
}

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Encode(ron::Error),
    Decode(ron::error::SpannedError),
    NotFound(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "store i/o failed: {err}"),
            Self::Encode(err) => write!(f, "failed to encode record: {err}"),
            Self::Decode(err) => write!(f, "failed to decode record: {err}"),
            Self::NotFound(id) => write!(f, "no document for '{id}'"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ron::Error> for StoreError {
    fn from(err: ron::Error) -> Self {
        Self::Encode(err)
    }
}

impl From<ron::error::SpannedError> for StoreError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::Decode(err)
    }
}

/// Call surface of the remote data service.
pub trait StoreBackend: Send + Sync + 'static {
    fn save_trial_completion(&self, record: &TrialCompletionRecord) -> Result<(), StoreError>;
    fn save_game_attempt(&self, record: &GameAttemptRecord) -> Result<(), StoreError>;
    fn fetch_user(&self, user_id: &str) -> Result<UserRecord, StoreError>;
    fn update_user(&self, user: &UserRecord) -> Result<(), StoreError>;
}

/// Shared handle to the configured backend.
#[derive(Resource, Clone)]
pub struct RemoteStore(Arc<dyn StoreBackend>);

impl RemoteStore {
    pub fn new(backend: impl StoreBackend) -> Self {
        Self(Arc::new(backend))
    }

    pub fn backend(&self) -> &dyn StoreBackend {
        self.0.as_ref()
    }
}

/// RON-on-disk backend under a single data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn write_record<T: Serialize>(&self, subdir: &str, filename: &str, record: &T) -> Result<(), StoreError> {
        let dir = self.root.join(subdir);
        fs::create_dir_all(&dir)?;
        let contents = ron::ser::to_string_pretty(record, ron::ser::PrettyConfig::default())?;
        fs::write(dir.join(filename), contents)?;
        Ok(())
    }
}

impl StoreBackend for FileStore {
    fn save_trial_completion(&self, record: &TrialCompletionRecord) -> Result<(), StoreError> {
        let filename = format!(
            "trial_{}_{}.ron",
            record.trial_number, record.completed_at
        );
        self.write_record("trials", &filename, record)?;
        debug!(trial_number = record.trial_number, "trial completion stored");
        Ok(())
    }

    fn save_game_attempt(&self, record: &GameAttemptRecord) -> Result<(), StoreError> {
        let filename = format!("attempt_{}.ron", record.attempted_at);
        self.write_record("attempts", &filename, record)?;
        debug!(player = %record.player_name, "game attempt stored");
        Ok(())
    }

    fn fetch_user(&self, user_id: &str) -> Result<UserRecord, StoreError> {
        let path = self.root.join("users").join(format!("{user_id}.ron"));
        if !path.exists() {
            return Err(StoreError::NotFound(user_id.to_string()));
        }
        let contents = fs::read_to_string(path)?;
        Ok(ron::from_str(&contents)?)
    }

    fn update_user(&self, user: &UserRecord) -> Result<(), StoreError> {
        self.write_record("users", &format!("{}.ron", user.user_id), user)
    }
}

/// Backend that fails every call. Stands in for a remote outage in tests.
pub struct FailingStore;

impl FailingStore {
    fn outage() -> StoreError {
        StoreError::Io(io::Error::other("simulated network failure"))
    }
}

impl StoreBackend for FailingStore {
    fn save_trial_completion(&self, _record: &TrialCompletionRecord) -> Result<(), StoreError> {
        Err(Self::outage())
    }

    fn save_game_attempt(&self, _record: &GameAttemptRecord) -> Result<(), StoreError> {
        Err(Self::outage())
    }

    fn fetch_user(&self, user_id: &str) -> Result<UserRecord, StoreError> {
        let _ = user_id;
        Err(Self::outage())
    }

    fn update_user(&self, _user: &UserRecord) -> Result<(), StoreError> {
        Err(Self::outage())
    }
}

pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Starts a trial-completion save on the I/O pool. Callers decide whether to
/// join or detach the task.
pub fn spawn_trial_completion_save(
    store: &RemoteStore,
    player_name: String,
    coins_collected: i32,
    trial_number: u32,
) -> Task<Result<(), StoreError>> {
    let store = store.clone();
    let record = TrialCompletionRecord {
        player_name,
        coins_collected,
        trial_number,
        completed_at: timestamp(),
    };
    IoTaskPool::get().spawn(async move { store.backend().save_trial_completion(&record) })
}

pub fn spawn_game_attempt_save(
    store: &RemoteStore,
    player_name: String,
) -> Task<Result<(), StoreError>> {
    let store = store.clone();
    let record = GameAttemptRecord {
        player_name,
        attempted_at: timestamp(),
    };
    IoTaskPool::get().spawn(async move { store.backend().save_game_attempt(&record) })
}

/// Installs the file backend unless a test already provided one.
pub struct PersistencePlugin {
    pub root: PathBuf,
}

impl Default for PersistencePlugin {
    fn default() -> Self {
        Self {
            root: PathBuf::from("saves"),
        }
    }
}

impl Plugin for PersistencePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<RemoteStore>() {
            app.insert_resource(RemoteStore::new(FileStore::new(self.root.clone())));
        }
    }
}
