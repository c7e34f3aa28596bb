//! `lift module`: open a directory as a lexical module and summarize it.

use std::path::Path;

use lift_lexical::{LexicalModule, ModuleConfig, NativeFileSystem};
use tracing::debug;

use super::{absolute_dir, fail, load_config, CommandError};

/// Open `dir`, load every unit, and print per-unit token counts.
pub fn check_module(dir: &str, config_path: Option<&str>) {
    let result = load_config(config_path.map(Path::new)).and_then(|config| {
        let module = open_module(Path::new(dir), config)?;
        module.load_all()?;
        Ok(render_module(&module))
    });
    match result {
        Ok(summary) => print!("{summary}"),
        Err(err) => fail(&err),
    }
}

/// Summary of a loaded module: one line per unit and a totals line.
///
/// Units that are not loaded are listed as such.
pub fn render_module(module: &LexicalModule) -> String {
    let location = module
        .location()
        .map_or_else(|| "<memory>".to_string(), |l| l.display().to_string());
    let mut out = format!("Module '{location}' ({} units):\n", module.len());

    let mut total_tokens = 0;
    let mut total_malformed = 0;
    for (index, unit) in module.compilation_units().iter().enumerate() {
        let name = unit
            .location()
            .map_or_else(|| format!("<blank #{index}>"), |l| l.display().to_string());
        let Some(tokens) = unit.tokens() else {
            out.push_str(&format!("  {name}: not loaded\n"));
            continue;
        };
        let significant = tokens.significant().count();
        let malformed = tokens.malformed().count();
        total_tokens += significant;
        total_malformed += malformed;
        out.push_str(&format!(
            "  {name}: {significant} tokens, {malformed} malformed\n"
        ));
    }
    debug!(units = module.len(), total_tokens, total_malformed, "summarized module");
    out.push_str(&format!(
        "Total: {total_tokens} tokens, {total_malformed} malformed\n"
    ));
    out
}

/// Open `dir` on the native file system, resolving a relative path first.
pub(crate) fn open_module(dir: &Path, config: ModuleConfig) -> Result<LexicalModule, CommandError> {
    let dir = absolute_dir(dir)?;
    Ok(LexicalModule::open_with(dir, NativeFileSystem::shared(), config)?)
}
