//! Serializable description of a module and its units.
//!
//! A manifest records what survives a process restart: locations, unit
//! order, and the text of blank units (which have no file to reload from).
//! Generations and tokens are never recorded; a restored module starts
//! every unit at generation zero.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};

use crate::{CompilationUnit, FileSystem, LexicalError, LexicalModule, ModuleConfig};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleManifest {
    pub location: Option<PathBuf>,
    #[serde(default)]
    pub units: Vec<UnitManifest>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitManifest {
    pub location: Option<PathBuf>,
    /// Only present for units without a location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representation: Option<String>,
}

impl CompilationUnit {
    pub fn manifest(&self) -> UnitManifest {
        let location = self.location();
        let representation = match location {
            Some(_) => None,
            None => self.representation().map(|text| text.to_string()),
        };
        UnitManifest {
            location,
            representation,
        }
    }
}

impl LexicalModule {
    pub fn manifest(&self) -> ModuleManifest {
        ModuleManifest {
            location: self.location(),
            units: self
                .compilation_units()
                .iter()
                .map(|unit| unit.manifest())
                .collect(),
        }
    }

    /// Rebuild a module from its manifest without touching the file system.
    ///
    /// File-backed units come back unloaded; blank units come back with their
    /// recorded text. Every unit starts at generation zero.
    ///
    /// # Errors
    ///
    /// [`LexicalError::RelativeModuleLocation`] or
    /// [`LexicalError::AbsoluteUnitLocation`] if the manifest breaks the
    /// location rules.
    pub fn from_manifest(
        manifest: ModuleManifest,
        fs: Arc<dyn FileSystem>,
        config: ModuleConfig,
    ) -> Result<Self, LexicalError> {
        if let Some(location) = manifest.location.as_ref().filter(|l| !l.is_absolute()) {
            return Err(LexicalError::RelativeModuleLocation(location.clone()));
        }
        if let Some(location) = manifest
            .units
            .iter()
            .filter_map(|unit| unit.location.as_ref())
            .find(|l| l.is_absolute())
        {
            return Err(LexicalError::AbsoluteUnitLocation(location.clone()));
        }

        let mut module = LexicalModule::build(manifest.location, fs, config);
        for unit in manifest.units {
            let representation = match unit.location {
                Some(_) => None,
                None => unit.representation,
            };
            module.push_unit(unit.location, representation);
        }
        Ok(module)
    }
}

impl Serialize for CompilationUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.manifest().serialize(serializer)
    }
}

impl Serialize for LexicalModule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.manifest().serialize(serializer)
    }
}
