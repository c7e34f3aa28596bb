//! Command handlers for the `lift` CLI.
//!
//! Each submodule renders one command's output. Shared pieces (the error
//! type, path and config resolution) live here in the module root.

use std::io;
use std::path::{Path, PathBuf};

use lift_lexical::{LexicalError, ModuleConfig};
use thiserror::Error;

mod lex;
mod manifest;
mod module;

pub use lex::{lex_file, render_tokens};
pub use manifest::{module_manifest, render_manifest};
pub use module::{check_module, render_module};

/// Failure of a CLI command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Lexical(#[from] LexicalError),

    #[error("cannot read config `{}`: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config `{}`: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot resolve `{}`: {source}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot render manifest: {0}")]
    Render(#[from] serde_json::Error),
}

/// Load a [`ModuleConfig`] from a JSON file, or the default when `path` is
/// `None`.
pub fn load_config(path: Option<&Path>) -> Result<ModuleConfig, CommandError> {
    let Some(path) = path else {
        return Ok(ModuleConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|source| CommandError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CommandError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Module directories must be absolute; resolve relative arguments against
/// the working directory.
pub(crate) fn absolute_dir(dir: &Path) -> Result<PathBuf, CommandError> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(dir))
        .map_err(|source| CommandError::Resolve {
            path: dir.to_path_buf(),
            source,
        })
}

/// Print a command failure and exit with status 1.
pub(crate) fn fail(err: &CommandError) -> ! {
    // Every message already names its cause.
    eprintln!("error: {err}");
    std::process::exit(1)
}
