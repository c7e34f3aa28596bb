//! Directory enumeration policy for lexical modules.

use std::ffi::OsStr;

use serde::Deserialize;

/// Which files of a module directory become compilation units.
///
/// Every field has a default, so a partial JSON object such as
/// `{"extension": "lft"}` is a complete configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModuleConfig {
    /// File extension recognized as a compilation unit, without the dot.
    pub extension: String,
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Skip files and directories whose name starts with `.`.
    pub skip_hidden: bool,
    /// Directory names that are never descended into.
    pub ignored_dirs: Vec<String>,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        ModuleConfig {
            extension: "lift".to_string(),
            recursive: true,
            skip_hidden: true,
            ignored_dirs: vec!["target".to_string()],
        }
    }
}

impl ModuleConfig {
    /// Whether an entry with this file name is skipped before anything else.
    pub(crate) fn skips_name(&self, name: &OsStr) -> bool {
        self.skip_hidden && name.to_str().is_some_and(|n| n.starts_with('.'))
    }

    /// Whether a directory with this name is descended into.
    pub(crate) fn descends_into(&self, name: &OsStr) -> bool {
        self.recursive && !self.ignored_dirs.iter().any(|dir| OsStr::new(dir) == name)
    }

    /// Whether a file with this extension is a compilation unit.
    pub(crate) fn accepts_extension(&self, extension: Option<&OsStr>) -> bool {
        extension.is_some_and(|ext| ext == OsStr::new(&self.extension))
    }
}
