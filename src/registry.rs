//! # Level Registry
//!
//! The catalog of every [`Level`] a logger can select. A registry starts out
//! with the built-in `DEBUG` and `DEFAULT` levels and only ever grows:
//! registering a name that already exists is an error, and nothing is ever
//! removed, so a level that a logger refers to keeps its meaning for the
//! life of the registry.
//!
//! Loggers do not own levels. Each holds a [`SharedRegistry`] handle and the
//! name of its active level, and resolves that name on every call. Cloning
//! the handle shares the catalog; a level added through one handle is
//! visible through all of them.
//!
//! ```rust
//! use levelog::{Level, SharedRegistry};
//!
//! let registry = SharedRegistry::new();
//! let other = registry.clone();
//!
//! registry.add_level(Level::new("MSG").with_prefix(">>> ")).unwrap();
//! assert_eq!(other.resolve("MSG").unwrap().prefix(), ">>> ");
//! assert!(registry.add_level(Level::new("MSG")).is_err());
//! ```

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::defaults;
use crate::error::{LoggerError, Result};
use crate::level::Level;

/// Name-to-level catalog.
#[derive(Debug, Clone)]
pub struct LevelRegistry {
    levels: BTreeMap<String, Level>,
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelRegistry {
    /// Create a registry holding the built-in levels
    pub fn new() -> Self {
        let mut levels = BTreeMap::new();
        for level in builtin_levels() {
            levels.insert(level.name().to_string(), level);
        }
        Self { levels }
    }

    /// Create a registry with no levels at all
    pub fn empty() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Register a new level.
    ///
    /// ## Errors
    /// - `DuplicateLevel` if a level with the same name is already registered.
    ///   The registry is left unchanged.
    pub fn add_level(&mut self, level: Level) -> Result<()> {
        if self.levels.contains_key(level.name()) {
            return Err(LoggerError::duplicate_level(level.name()));
        }
        self.levels.insert(level.name().to_string(), level);
        Ok(())
    }

    /// Register several levels at once.
    ///
    /// The whole batch is checked before anything is inserted: if any name
    /// collides with a registered level or with another level in the batch,
    /// the call fails and no level from the batch is registered.
    pub fn add_levels(&mut self, levels: Vec<Level>) -> Result<()> {
        {
            let mut seen = HashSet::new();
            for level in &levels {
                if self.levels.contains_key(level.name()) || !seen.insert(level.name()) {
                    return Err(LoggerError::duplicate_level(level.name()));
                }
            }
        }
        for level in levels {
            self.add_level(level)?;
        }
        Ok(())
    }

    /// Look up a level by name.
    ///
    /// ## Errors
    /// - `UndefinedLevel` if no level with that name exists
    pub fn resolve(&self, name: &str) -> Result<Level> {
        self.levels
            .get(name)
            .cloned()
            .ok_or_else(|| LoggerError::undefined_level(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.levels.contains_key(name)
    }

    /// Registered level names in sorted order
    pub fn names(&self) -> Vec<String> {
        self.levels.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// The levels every registry starts with: `DEBUG` in red and a plain
/// `DEFAULT`.
pub fn builtin_levels() -> Vec<Level> {
    vec![
        Level::new(defaults::DEBUG_LEVEL).with_color("red"),
        Level::new(defaults::LEVEL),
    ]
}

/// A cloneable handle to a registry shared between loggers.
///
/// All clones refer to the same catalog, which lives as long as the last
/// handle.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<LevelRegistry>>,
}

impl From<LevelRegistry> for SharedRegistry {
    fn from(registry: LevelRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }
}

impl SharedRegistry {
    /// Create a new catalog seeded with the built-in levels
    pub fn new() -> Self {
        Self::default()
    }

    // Events are emitted only after the write guard is released: a
    // `LevelFormatter` subscriber resolves levels through this same lock.

    pub fn add_level(&self, level: Level) -> Result<()> {
        let name = level.name().to_string();
        self.inner.write().add_level(level)?;
        debug!("Registered level {}", name);
        Ok(())
    }

    pub fn add_levels(&self, levels: Vec<Level>) -> Result<()> {
        let names: Vec<String> = levels.iter().map(|l| l.name().to_string()).collect();
        self.inner.write().add_levels(levels)?;
        debug!("Registered levels {}", names.join(", "));
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<Level> {
        self.inner.read().resolve(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().contains(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.inner.read().names()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Register the levels declared in a JSON file.
    ///
    /// The file holds an array of level objects; omitted fields take the
    /// same defaults as [`Level::new`]:
    ///
    /// ```json
    /// [
    ///   { "name": "WARN", "prefix": "! ", "color": "yellow" },
    ///   { "name": "QUIET", "show_time": false, "simplified": true }
    /// ]
    /// ```
    ///
    /// Registration is all-or-nothing, see [`LevelRegistry::add_levels`].
    ///
    /// ## Returns
    /// The number of levels registered
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| LoggerError::io(path, e))?;
        let levels: Vec<Level> =
            serde_json::from_str(&text).map_err(|source| LoggerError::InvalidLevels {
                path: path.to_path_buf(),
                source,
            })?;

        let count = levels.len();
        self.add_levels(levels)?;
        debug!("Loaded {} level(s) from {}", count, path.display());
        Ok(count)
    }
}
