/*!
 * Persisted user preferences.
 *
 * A single key-value table in a SQLite database holds user preferences.
 * The only recognized preference today is the display theme. Analysis
 * results are never persisted; the store is unrelated to the pipeline.
 */

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use log::{debug, info};
use rusqlite::{Connection, OptionalExtension};

use crate::errors::PreferenceError;

/// Default database filename
const DEFAULT_DB_FILENAME: &str = "preferences.db";

/// Default database directory name under user's data directory
const DEFAULT_DB_DIRNAME: &str = "docintel";

/// Preference key for the display theme
const THEME_KEY: &str = "theme";

/// Display theme for rendered output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The theme toggled to from this one
    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(anyhow!("Invalid theme: {}", s)),
        }
    }
}

/// Preference store backed by SQLite with thread-safe access
#[derive(Clone)]
pub struct PreferenceStore {
    /// Path to the database file
    db_path: PathBuf,
    /// Thread-safe connection wrapped in Arc<Mutex>
    connection: Arc<Mutex<Connection>>,
}

impl PreferenceStore {
    /// Open the preference store at the default location
    pub fn new_default() -> Result<Self, PreferenceError> {
        let db_path = Self::default_store_path()
            .map_err(|e| PreferenceError::OpenFailed(e.to_string()))?;
        Self::new(&db_path)
    }

    /// Open the preference store at the specified path
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self, PreferenceError> {
        let db_path = db_path.as_ref().to_path_buf();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PreferenceError::OpenFailed(e.to_string()))?;
        }

        info!("Opening preference store at: {:?}", db_path);

        let conn = Connection::open(&db_path)
            .map_err(|e| PreferenceError::OpenFailed(e.to_string()))?;

        Self::initialize_schema(&conn)?;

        Ok(Self {
            db_path,
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create an in-memory preference store (for testing)
    pub fn new_in_memory() -> Result<Self, PreferenceError> {
        debug!("Creating in-memory preference store");

        let conn = Connection::open_in_memory()
            .map_err(|e| PreferenceError::OpenFailed(e.to_string()))?;

        Self::initialize_schema(&conn)?;

        Ok(Self {
            db_path: PathBuf::from(":memory:"),
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Get the default preference store path
    pub fn default_store_path() -> Result<PathBuf> {
        // Try to use the system data directory
        let base_dir = dirs::data_local_dir()
            .or_else(dirs::data_dir)
            .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))
            .ok_or_else(|| anyhow!("Could not determine data directory"))?;

        Ok(base_dir.join(DEFAULT_DB_DIRNAME).join(DEFAULT_DB_FILENAME))
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Get a preference value by key
    pub fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let conn = self.lock()?;
        conn.query_row(
            "SELECT value FROM preferences WHERE key = ?1",
            [key],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| PreferenceError::QueryFailed(e.to_string()))
    }

    /// Set a preference value, replacing any existing one
    pub fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )
        .map_err(|e| PreferenceError::QueryFailed(e.to_string()))?;
        Ok(())
    }

    /// Get the stored display theme, defaulting to light
    pub fn theme(&self) -> Result<Theme, PreferenceError> {
        match self.get(THEME_KEY)? {
            Some(value) => value
                .parse()
                .map_err(|_| PreferenceError::InvalidValue(value)),
            None => Ok(Theme::default()),
        }
    }

    /// Persist the display theme
    pub fn set_theme(&self, theme: Theme) -> Result<(), PreferenceError> {
        self.set(THEME_KEY, &theme.to_string())
    }

    fn initialize_schema(conn: &Connection) -> Result<(), PreferenceError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| PreferenceError::QueryFailed(e.to_string()))?;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, PreferenceError> {
        self.connection
            .lock()
            .map_err(|e| PreferenceError::QueryFailed(e.to_string()))
    }
}
