use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;

// =============================================================================
// State Path Tests
// =============================================================================

#[test]
fn prefs_path_construction() {
    let temp_dir = TempDir::new().unwrap();
    assert_eq!(
        prefs_path(temp_dir.path()),
        temp_dir.path().join("preferences.json")
    );
}

#[test]
fn lock_dir_is_next_to_prefs_file() {
    let prefs = Path::new("/state/gtest-scaffold/preferences.json");
    assert_eq!(
        lock_dir_for(prefs),
        Path::new("/state/gtest-scaffold/locks")
    );
}

#[test]
fn lock_file_is_stable_per_target() {
    let lock_dir = Path::new("/locks");
    let a1 = lock_file_for(lock_dir, Path::new("/proj/FooTest.cpp"));
    let a2 = lock_file_for(lock_dir, Path::new("/proj/FooTest.cpp"));
    let b = lock_file_for(lock_dir, Path::new("/proj/BarTest.cpp"));
    assert_eq!(a1, a2);
    assert_ne!(a1, b);
    assert_eq!(a1.parent(), Some(lock_dir));
    assert!(a1.to_string_lossy().ends_with(".lock"));
}

#[test]
fn ensure_parent_dir_creates_nested_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested_path = temp_dir.path().join("a").join("b").join("file.json");

    ensure_parent_dir(&nested_path).unwrap();

    assert!(nested_path.parent().unwrap().exists());
}

#[test]
fn ensure_parent_dir_handles_root_path() {
    let result = ensure_parent_dir(Path::new("file.json"));
    assert!(result.is_ok());
}

// =============================================================================
// Lock Tests
// =============================================================================

#[test]
fn lock_error_display_timeout() {
    let err = LockError::Timeout;
    assert_eq!(format!("{err}"), "lock acquisition timed out");
}

#[test]
fn lock_error_display_io() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
    let err = LockError::Io(io_err);
    assert!(format!("{err}").contains("lock I/O error"));
}

#[test]
fn exclusive_lock_times_out_when_held() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("test.lock");

    let file1 = fs::File::create(&file_path).unwrap();
    file1.lock().unwrap();

    let file2 = fs::File::open(&file_path).unwrap();
    let result = try_lock_exclusive_with_timeout(&file2, 100);

    assert!(matches!(result, Err(LockError::Timeout)));

    file1.unlock().unwrap();
}

#[test]
fn multiple_shared_locks_allowed() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("test.lock");

    let file1 = fs::File::create(&file_path).unwrap();
    assert!(try_lock_shared_with_timeout(&file1, 100).is_ok());

    let file2 = fs::File::open(&file_path).unwrap();
    assert!(try_lock_shared_with_timeout(&file2, 100).is_ok());

    unlock_file(&file1);
    unlock_file(&file2);
}

#[test]
fn lock_guard_creates_lock_file() {
    let temp_dir = TempDir::new().unwrap();
    let lock_path = temp_dir.path().join("locks").join("x.lock");

    let _guard = LockGuard::exclusive(&lock_path, 100).unwrap();
    assert!(lock_path.exists());
}

#[test]
fn lock_guard_times_out_while_held() {
    let temp_dir = TempDir::new().unwrap();
    let lock_path = temp_dir.path().join("x.lock");

    let _held = LockGuard::exclusive(&lock_path, 100).unwrap();
    let err = LockGuard::exclusive(&lock_path, 100).unwrap_err();
    assert!(matches!(err, ScaffoldError::LockTimeout { .. }));
}

#[test]
fn lock_guard_unlocks_on_drop() {
    let temp_dir = TempDir::new().unwrap();
    let lock_path = temp_dir.path().join("x.lock");

    {
        let _guard = LockGuard::exclusive(&lock_path, 100).unwrap();
    }

    assert!(LockGuard::exclusive(&lock_path, 100).is_ok());
}

#[test]
fn shared_guard_blocks_exclusive() {
    let temp_dir = TempDir::new().unwrap();
    let lock_path = temp_dir.path().join("x.lock");

    let _reader = LockGuard::shared(&lock_path, 100).unwrap();
    assert!(LockGuard::shared(&lock_path, 100).is_ok());
    assert!(LockGuard::exclusive(&lock_path, 100).is_err());
}

// =============================================================================
// Atomic Write Tests
// =============================================================================

#[test]
fn atomic_write_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("FooTest.cpp");

    atomic_write(&file_path, b"content").unwrap();

    assert_eq!(fs::read(&file_path).unwrap(), b"content");
}

#[test]
fn atomic_write_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("a").join("b").join("FooTest.cpp");

    atomic_write(&file_path, b"nested").unwrap();

    assert_eq!(fs::read(&file_path).unwrap(), b"nested");
}

#[test]
fn atomic_write_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("FooTest.cpp");
    fs::write(&file_path, "a much longer original content").unwrap();

    atomic_write(&file_path, b"short").unwrap();

    assert_eq!(fs::read_to_string(&file_path).unwrap(), "short");
}

#[test]
fn atomic_write_cleans_up_temp_files() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("FooTest.cpp");

    atomic_write(&file_path, b"content").unwrap();

    let entries: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(std::result::Result::ok)
        .collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].file_name(), "FooTest.cpp");
}

#[test]
fn atomic_write_fails_when_target_is_directory() {
    let temp_dir = TempDir::new().unwrap();
    let dir_target = temp_dir.path().join("FooTest.cpp");
    fs::create_dir(&dir_target).unwrap();
    fs::write(dir_target.join("keep"), "x").unwrap();

    let err = atomic_write(&dir_target, b"content").unwrap_err();
    assert_eq!(err.error_type(), "FileWrite");
    assert!(dir_target.join("keep").exists());

    let leftovers = fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .count();
    assert_eq!(leftovers, 0);
}
