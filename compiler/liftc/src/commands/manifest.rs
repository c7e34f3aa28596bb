//! `lift manifest`: print the serializable description of a module.

use std::path::Path;

use lift_lexical::{ModuleConfig, ModuleManifest};

use super::module::open_module;
use super::{fail, load_config, CommandError};

/// Enumerate `dir` (without loading) and print its manifest as JSON.
pub fn module_manifest(dir: &str, config_path: Option<&str>) {
    let result = load_config(config_path.map(Path::new))
        .and_then(|config| open_manifest(Path::new(dir), config))
        .and_then(|manifest| render_manifest(&manifest));
    match result {
        Ok(json) => println!("{json}"),
        Err(err) => fail(&err),
    }
}

fn open_manifest(dir: &Path, config: ModuleConfig) -> Result<ModuleManifest, CommandError> {
    Ok(open_module(dir, config)?.manifest())
}

/// Pretty-printed JSON for `manifest`.
pub fn render_manifest(manifest: &ModuleManifest) -> Result<String, CommandError> {
    Ok(serde_json::to_string_pretty(manifest)?)
}
