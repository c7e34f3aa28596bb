use super::*;
use crate::{DirEntry, Generation, MemoryFileSystem, UnitStatus};
use pretty_assertions::assert_eq;

fn open(fs: &MemoryFileSystem, config: ModuleConfig) -> LexicalModule {
    match LexicalModule::open_with("/m", Arc::new(fs.clone()), config) {
        Ok(module) => module,
        Err(err) => panic!("open failed: {err}"),
    }
}

fn locations(module: &LexicalModule) -> Vec<PathBuf> {
    module
        .compilation_units()
        .iter()
        .filter_map(|unit| unit.location())
        .collect()
}

fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}

fn sample() -> MemoryFileSystem {
    MemoryFileSystem::with_files([
        ("/m/zeta.lift", "let z = 1"),
        ("/m/alpha.lift", "let a = 2"),
        ("/m/notes.txt", "not source"),
        ("/m/lib/b.lift", "func b() {}"),
        ("/m/lib/a.lift", "func a() {}"),
        ("/m/lib/deep/c.lift", "var c"),
        ("/m/.hidden/h.lift", "hidden"),
        ("/m/.dot.lift", "hidden file"),
        ("/m/target/out.lift", "build output"),
    ])
}

// === Enumeration ===

#[test]
fn open_enumerates_depth_first_sorted() {
    let module = open(&sample(), ModuleConfig::default());
    assert_eq!(
        locations(&module),
        paths(&[
            "alpha.lift",
            "lib/a.lift",
            "lib/b.lift",
            "lib/deep/c.lift",
            "zeta.lift",
        ])
    );
    assert_eq!(module.location(), Some(PathBuf::from("/m")));
    assert!(module
        .compilation_units()
        .iter()
        .all(|unit| unit.state() == UnitStatus::Unloaded));
}

#[test]
fn non_recursive_config_stays_at_top_level() {
    let config = ModuleConfig {
        recursive: false,
        ..ModuleConfig::default()
    };
    let module = open(&sample(), config);
    assert_eq!(locations(&module), paths(&["alpha.lift", "zeta.lift"]));
}

#[test]
fn hidden_and_ignored_entries_are_configurable() {
    let config = ModuleConfig {
        skip_hidden: false,
        ignored_dirs: Vec::new(),
        ..ModuleConfig::default()
    };
    let module = open(&sample(), config);
    assert_eq!(
        locations(&module),
        paths(&[
            ".dot.lift",
            ".hidden/h.lift",
            "alpha.lift",
            "lib/a.lift",
            "lib/b.lift",
            "lib/deep/c.lift",
            "target/out.lift",
            "zeta.lift",
        ])
    );
}

#[test]
fn custom_extension() {
    let config = ModuleConfig {
        extension: "txt".to_string(),
        ..ModuleConfig::default()
    };
    let module = open(&sample(), config);
    assert_eq!(locations(&module), paths(&["notes.txt"]));
}

/// A file system that lists entries in reverse order.
#[derive(Debug)]
struct Reversed(MemoryFileSystem);

impl FileSystem for Reversed {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.0.read_to_string(path)
    }

    fn read_dir(&self, path: &Path) -> std::io::Result<Vec<DirEntry>> {
        let mut entries = self.0.read_dir(path)?;
        entries.reverse();
        Ok(entries)
    }
}

#[test]
fn order_does_not_depend_on_listing_order() {
    let fs = sample();
    let forward = open(&fs, ModuleConfig::default());
    let reversed = LexicalModule::open_with("/m", Arc::new(Reversed(fs)), ModuleConfig::default());
    assert_eq!(
        reversed.map(|module| locations(&module)).ok(),
        Some(locations(&forward))
    );
}

#[test]
fn relative_directory_is_rejected() {
    let result = LexicalModule::open_with(
        "relative/dir",
        Arc::new(MemoryFileSystem::new()),
        ModuleConfig::default(),
    );
    assert!(matches!(
        result,
        Err(LexicalError::RelativeModuleLocation(_))
    ));
}

#[test]
fn unreadable_directory_is_io_failure() {
    let result = LexicalModule::open_with(
        "/missing",
        Arc::new(MemoryFileSystem::new()),
        ModuleConfig::default(),
    );
    match result {
        Err(LexicalError::IoFailure { path, .. }) => assert_eq!(path, PathBuf::from("/missing")),
        other => panic!("expected IoFailure, got {other:?}"),
    }
}

#[test]
fn open_native_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    std::fs::create_dir(dir.path().join("sub"))?;
    std::fs::write(dir.path().join("main.lift"), "func main() {}")?;
    std::fs::write(dir.path().join("sub").join("util.lift"), "let x = 1")?;
    std::fs::write(dir.path().join("README.md"), "# readme")?;

    let module = LexicalModule::open(dir.path())?;
    assert_eq!(
        locations(&module),
        vec![PathBuf::from("main.lift"), Path::new("sub").join("util.lift")]
    );
    assert_eq!(module.load_all()?, 2);
    assert_eq!(
        module
            .unit_at_location("main.lift")
            .and_then(|unit| unit.representation())
            .as_deref(),
        Some("func main() {}")
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn symlinked_directories_are_not_followed() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("a.lift"), "let a = 1")?;
    std::fs::create_dir(dir.path().join("real"))?;
    std::fs::write(dir.path().join("real").join("b.lift"), "let b = 2")?;
    std::os::unix::fs::symlink(dir.path(), dir.path().join("loop"))?;
    std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("alias"))?;
    std::os::unix::fs::symlink(dir.path().join("a.lift"), dir.path().join("c.lift"))?;

    let module = LexicalModule::open(dir.path())?;
    assert_eq!(
        locations(&module),
        vec![
            PathBuf::from("a.lift"),
            PathBuf::from("c.lift"),
            Path::new("real").join("b.lift"),
        ]
    );
    assert_eq!(module.load_all()?, 3);
    Ok(())
}

// === Collection ===

#[test]
fn blank_module_has_no_location() {
    let module = LexicalModule::new();
    assert!(module.is_empty());
    assert_eq!(module.len(), 0);
    assert_eq!(module.location(), None);
}

#[test]
fn add_and_find_units() {
    let mut module = LexicalModule::new();
    let blank = module.add_blank_unit();
    let Ok(bound) = module.add_unit_at("src/a.lift") else {
        panic!("relative location rejected");
    };
    assert_eq!(module.len(), 2);
    assert!(Arc::ptr_eq(&module.compilation_units()[0], &blank));
    assert!(module
        .unit_at_location("src/a.lift")
        .is_some_and(|unit| Arc::ptr_eq(unit, &bound)));
    assert!(module.unit_at_location("src/b.lift").is_none());
    assert!(bound.belongs_to(&module));
}

#[test]
fn add_unit_at_rejects_absolute_location() {
    let mut module = LexicalModule::new();
    assert!(matches!(
        module.add_unit_at("/abs.lift"),
        Err(LexicalError::AbsoluteUnitLocation(_))
    ));
    assert!(module.is_empty());
}

#[test]
fn remove_unit_retires_only_members() {
    let mut module = LexicalModule::new();
    let first = module.add_blank_unit();
    let second = module.add_blank_unit();

    let mut other = LexicalModule::new();
    let stranger = other.add_blank_unit();

    assert!(!module.remove_unit(&stranger));
    assert!(!stranger.is_retired());

    assert!(module.remove_unit(&first));
    assert!(first.is_retired());
    assert!(!module.remove_unit(&first));
    assert_eq!(module.len(), 1);
    assert!(Arc::ptr_eq(&module.compilation_units()[0], &second));
}

#[test]
fn set_location_requires_absolute_path() {
    let mut module = LexicalModule::new();
    assert!(matches!(
        module.set_location(Some(PathBuf::from("rel"))),
        Err(LexicalError::RelativeModuleLocation(_))
    ));
    assert!(module.set_location(Some(PathBuf::from("/abs"))).is_ok());
    assert_eq!(module.location(), Some(PathBuf::from("/abs")));
}

#[test]
fn rebasing_changes_where_units_load_from() {
    let fs = MemoryFileSystem::with_files([("/one/a.lift", "1"), ("/two/a.lift", "2")]);
    let Ok(mut module) = LexicalModule::open_with("/one", Arc::new(fs), ModuleConfig::default())
    else {
        panic!("open failed");
    };
    let Some(unit) = module.unit_at_location("a.lift").cloned() else {
        panic!("a.lift not enumerated");
    };
    assert!(unit.load_persistent_representation().is_ok());
    assert_eq!(unit.representation().as_deref(), Some("1"));

    assert!(module.set_location(Some(PathBuf::from("/two"))).is_ok());
    assert_eq!(unit.module_location(), Some(PathBuf::from("/two")));
    assert!(matches!(unit.load_persistent_representation(), Ok(true)));
    assert_eq!(unit.representation().as_deref(), Some("2"));
}

// === Loading ===

#[test]
fn load_all_loads_file_backed_units() {
    let fs = sample();
    let mut module = open(&fs, ModuleConfig::default());
    let blank = module.add_blank_unit();

    assert!(matches!(module.load_all(), Ok(5)));
    assert_eq!(blank.state(), UnitStatus::Unloaded);
    // Nothing changed on disk.
    assert!(matches!(module.load_all(), Ok(0)));

    fs.write_file("/m/zeta.lift", "let z = 2");
    assert!(matches!(module.load_all(), Ok(1)));
    let zeta = module.unit_at_location("zeta.lift");
    assert_eq!(zeta.map(|u| u.generation()), Some(Generation::INITIAL.next()));
}

#[test]
fn load_all_stops_at_first_failure() {
    let fs = sample();
    let module = open(&fs, ModuleConfig::default());
    assert!(fs.remove_file(Path::new("/m/lib/b.lift")));

    match module.load_all() {
        Err(LexicalError::IoFailure { path, .. }) => {
            assert_eq!(path, PathBuf::from("/m/lib/b.lift"));
        }
        other => panic!("expected IoFailure, got {other:?}"),
    }
    let states: Vec<_> = module
        .compilation_units()
        .iter()
        .map(|unit| unit.state())
        .collect();
    assert_eq!(
        states,
        vec![
            UnitStatus::Loaded,
            UnitStatus::Loaded,
            UnitStatus::Unloaded,
            UnitStatus::Unloaded,
            UnitStatus::Unloaded,
        ]
    );
}

#[test]
fn dropping_module_retires_units() {
    let module = open(&sample(), ModuleConfig::default());
    let units = module.compilation_units().to_vec();
    drop(module);
    assert!(units.iter().all(|unit| unit.is_retired()));
}
