//! Lexical modules: ordered collections of compilation units.
//!
//! A module is optionally backed by an absolute directory. Opening a
//! directory enumerates it through the module's [`FileSystem`] and creates
//! one unloaded unit per recognized file, bound to its path relative to the
//! directory. Units point back at the module weakly; the module owns them.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::{CompilationUnit, FileSystem, LexicalError, ModuleConfig, NativeFileSystem};

/// State shared between a module and its units' back-references.
pub(crate) struct ModuleShared {
    /// Absolute when set.
    pub(crate) location: RwLock<Option<PathBuf>>,
    pub(crate) fs: Arc<dyn FileSystem>,
    pub(crate) config: ModuleConfig,
}

/// Ordered collection of compilation units.
///
/// Units keep the order they were added in; opening a directory adds them in
/// traversal order (depth-first, entries sorted by file name). Dropping the
/// module retires every unit it still holds.
pub struct LexicalModule {
    shared: Arc<ModuleShared>,
    units: Vec<Arc<CompilationUnit>>,
}

impl LexicalModule {
    /// An empty module with no location, reading through the native file
    /// system.
    pub fn new() -> Self {
        Self::with_file_system(NativeFileSystem::shared())
    }

    /// An empty module with no location.
    pub fn with_file_system(fs: Arc<dyn FileSystem>) -> Self {
        Self::build(None, fs, ModuleConfig::default())
    }

    /// Open the directory `dir` on the native file system with the default
    /// configuration.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, LexicalError> {
        Self::open_with(dir, NativeFileSystem::shared(), ModuleConfig::default())
    }

    /// Open the directory `dir`, enumerating it through `fs` under `config`.
    ///
    /// # Errors
    ///
    /// [`LexicalError::RelativeModuleLocation`] if `dir` is relative;
    /// [`LexicalError::IoFailure`] if a directory cannot be listed.
    pub fn open_with(
        dir: impl Into<PathBuf>,
        fs: Arc<dyn FileSystem>,
        config: ModuleConfig,
    ) -> Result<Self, LexicalError> {
        let dir = dir.into();
        if !dir.is_absolute() {
            return Err(LexicalError::RelativeModuleLocation(dir));
        }

        let mut locations = Vec::new();
        enumerate(fs.as_ref(), &config, &dir, &dir, &mut locations)?;
        debug!(
            location = %dir.display(),
            units = locations.len(),
            "enumerated lexical module"
        );

        let mut module = Self::build(Some(dir), fs, config);
        for location in locations {
            module.push_unit(Some(location), None);
        }
        Ok(module)
    }

    pub(crate) fn build(
        location: Option<PathBuf>,
        fs: Arc<dyn FileSystem>,
        config: ModuleConfig,
    ) -> Self {
        LexicalModule {
            shared: Arc::new(ModuleShared {
                location: RwLock::new(location),
                fs,
                config,
            }),
            units: Vec::new(),
        }
    }

    pub(crate) fn push_unit(
        &mut self,
        location: Option<PathBuf>,
        representation: Option<String>,
    ) -> Arc<CompilationUnit> {
        let unit = Arc::new(CompilationUnit::restored(
            Arc::downgrade(&self.shared),
            location,
            representation,
        ));
        self.units.push(Arc::clone(&unit));
        unit
    }

    pub(crate) fn shared(&self) -> &Arc<ModuleShared> {
        &self.shared
    }

    /// Read-only ordered view of the units.
    pub fn compilation_units(&self) -> &[Arc<CompilationUnit>] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// First unit bound to the relative `location`.
    pub fn unit_at_location(&self, location: impl AsRef<Path>) -> Option<&Arc<CompilationUnit>> {
        let location = location.as_ref();
        self.units.iter().find(|unit| unit.has_location(location))
    }

    /// Append an in-memory unit with no location.
    pub fn add_blank_unit(&mut self) -> Arc<CompilationUnit> {
        self.push_unit(None, None)
    }

    /// Append an unloaded unit bound to the relative `location`.
    ///
    /// # Errors
    ///
    /// [`LexicalError::AbsoluteUnitLocation`] if `location` is absolute.
    pub fn add_unit_at(
        &mut self,
        location: impl Into<PathBuf>,
    ) -> Result<Arc<CompilationUnit>, LexicalError> {
        let location = location.into();
        if location.is_absolute() {
            return Err(LexicalError::AbsoluteUnitLocation(location));
        }
        Ok(self.push_unit(Some(location), None))
    }

    /// Remove `unit` from the module and retire it.
    ///
    /// Returns `false` if the unit is not in this module.
    pub fn remove_unit(&mut self, unit: &Arc<CompilationUnit>) -> bool {
        let Some(position) = self.units.iter().position(|u| Arc::ptr_eq(u, unit)) else {
            return false;
        };
        self.units.remove(position).retire();
        true
    }

    pub fn location(&self) -> Option<PathBuf> {
        self.shared.location.read().clone()
    }

    /// Rebase the module. Units keep their relative locations and resolve
    /// against the new location on their next load.
    ///
    /// # Errors
    ///
    /// [`LexicalError::RelativeModuleLocation`] if `location` is relative.
    pub fn set_location(&mut self, location: Option<PathBuf>) -> Result<(), LexicalError> {
        if let Some(path) = location.as_deref().filter(|path| !path.is_absolute()) {
            return Err(LexicalError::RelativeModuleLocation(path.to_path_buf()));
        }
        *self.shared.location.write() = location;
        Ok(())
    }

    pub fn config(&self) -> &ModuleConfig {
        &self.shared.config
    }

    pub fn file_system(&self) -> &Arc<dyn FileSystem> {
        &self.shared.fs
    }

    /// Load every file-backed unit in order. Blank units are skipped.
    ///
    /// Returns how many representations changed.
    ///
    /// # Errors
    ///
    /// The first load failure; units after it are left as they were.
    pub fn load_all(&self) -> Result<usize, LexicalError> {
        let mut changed = 0;
        for unit in self.units.iter().filter(|unit| unit.location().is_some()) {
            if unit.load_persistent_representation()? {
                changed += 1;
            }
        }
        Ok(changed)
    }
}

fn enumerate(
    fs: &dyn FileSystem,
    config: &ModuleConfig,
    root: &Path,
    dir: &Path,
    found: &mut Vec<PathBuf>,
) -> Result<(), LexicalError> {
    let mut entries = fs
        .read_dir(dir)
        .map_err(|source| LexicalError::io(dir, source))?;
    entries.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

    for entry in entries {
        let Some(name) = entry.path.file_name() else {
            continue;
        };
        if config.skips_name(name) {
            continue;
        }
        if entry.is_dir {
            if config.descends_into(name) {
                enumerate(fs, config, root, &entry.path, found)?;
            }
        } else if config.accepts_extension(entry.path.extension()) {
            if let Ok(relative) = entry.path.strip_prefix(root) {
                found.push(relative.to_path_buf());
            }
        }
    }
    Ok(())
}

impl Default for LexicalModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LexicalModule {
    fn drop(&mut self) {
        for unit in &self.units {
            unit.retire();
        }
    }
}

impl fmt::Debug for LexicalModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexicalModule")
            .field("location", &*self.shared.location.read())
            .field("units", &self.units)
            .field("fs", &self.shared.fs)
            .finish()
    }
}

#[cfg(test)]
mod tests;
