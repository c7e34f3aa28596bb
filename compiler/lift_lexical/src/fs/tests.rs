use super::*;
use pretty_assertions::assert_eq;

fn sorted(mut entries: Vec<DirEntry>) -> Vec<DirEntry> {
    entries.sort();
    entries
}

// === MemoryFileSystem ===

#[test]
fn memory_reads_written_file() {
    let fs = MemoryFileSystem::new();
    fs.write_file("/m/a.lift", "let a = 1");
    assert_eq!(
        fs.read_to_string(Path::new("/m/a.lift")).ok(),
        Some("let a = 1".to_string())
    );
}

#[test]
fn memory_missing_file_is_not_found() {
    let fs = MemoryFileSystem::new();
    let err = fs.read_to_string(Path::new("/nope.lift"));
    assert!(err.is_err_and(|e| e.kind() == io::ErrorKind::NotFound));
}

#[test]
fn memory_directories_are_implied_by_files() {
    let fs = MemoryFileSystem::with_files([
        ("/m/a.lift", "a"),
        ("/m/sub/b.lift", "b"),
        ("/m/sub/deep/c.lift", "c"),
    ]);
    assert!(fs.exists(Path::new("/m/sub/deep")));

    let listing = fs.read_dir(Path::new("/m")).map(sorted);
    assert_eq!(
        listing.ok(),
        Some(vec![
            DirEntry::file("/m/a.lift"),
            DirEntry::dir("/m/sub"),
        ])
    );
}

#[test]
fn memory_listing_excludes_name_prefix_siblings() {
    let fs = MemoryFileSystem::with_files([("/m/a.lift", "a"), ("/m b/x.lift", "x")]);
    let listing = fs.read_dir(Path::new("/m")).map(sorted);
    assert_eq!(listing.ok(), Some(vec![DirEntry::file("/m/a.lift")]));
}

#[test]
fn memory_empty_directory() {
    let fs = MemoryFileSystem::new();
    fs.create_dir("/empty");
    assert_eq!(fs.read_dir(Path::new("/empty")).ok(), Some(Vec::new()));
}

#[test]
fn memory_read_dir_errors() {
    let fs = MemoryFileSystem::with_files([("/m/a.lift", "a")]);
    assert!(fs
        .read_dir(Path::new("/missing"))
        .is_err_and(|e| e.kind() == io::ErrorKind::NotFound));
    assert!(fs
        .read_dir(Path::new("/m/a.lift"))
        .is_err_and(|e| e.kind() == io::ErrorKind::InvalidInput));
    assert!(fs
        .read_to_string(Path::new("/m"))
        .is_err_and(|e| e.kind() == io::ErrorKind::InvalidInput));
}

#[test]
fn memory_overwrite_and_remove() {
    let fs = MemoryFileSystem::new();
    fs.write_file("/a.lift", "one");
    fs.write_file("/a.lift", "two");
    assert_eq!(
        fs.read_to_string(Path::new("/a.lift")).ok().as_deref(),
        Some("two")
    );
    assert!(fs.remove_file(Path::new("/a.lift")));
    assert!(!fs.remove_file(Path::new("/a.lift")));
    assert!(!fs.exists(Path::new("/a.lift")));
}

#[test]
fn memory_clones_share_storage() {
    let fs = MemoryFileSystem::new();
    let other = fs.clone();
    other.write_file("/shared.lift", "x");
    assert!(fs.exists(Path::new("/shared.lift")));
}

#[test]
fn memory_debug_counts_nodes() {
    let fs = MemoryFileSystem::with_files([("/m/a.lift", "a")]);
    assert_eq!(
        format!("{fs:?}"),
        "MemoryFileSystem { files: 1, dirs: 2 }"
    );
}

// === NativeFileSystem ===

#[test]
fn native_lists_and_reads() -> io::Result<()> {
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("a.lift"), "let a = 1")?;
    fs::create_dir(dir.path().join("sub"))?;

    let native = NativeFileSystem;
    let listing = sorted(native.read_dir(dir.path())?);
    assert_eq!(
        listing,
        vec![
            DirEntry::file(dir.path().join("a.lift")),
            DirEntry::dir(dir.path().join("sub")),
        ]
    );
    assert_eq!(
        native.read_to_string(&dir.path().join("a.lift"))?,
        "let a = 1"
    );
    Ok(())
}

#[test]
fn native_rejects_non_utf8() -> io::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bad.lift");
    fs::write(&path, [0xff, 0xfe, 0x00])?;
    let err = NativeFileSystem.read_to_string(&path);
    assert!(err.is_err_and(|e| e.kind() == io::ErrorKind::InvalidData));
    Ok(())
}
