use cucumber_results::registry::file_store::FileStore;
use cucumber_results::registry::memory_store::MemoryStore;
use cucumber_results::registry::store::{BuildStore, StoreError};

mod common;

// ============================================================================
// 1. FileStore layout and round-trips
// ============================================================================

#[test]
fn file_store_round_trips_raw_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let metadata = common::metadata_at("ui-tests", "42", common::base_time());

    // Byte-for-byte: whitespace, key order, trailing newline all preserved.
    let raw = b"[\n  {\"name\": \"F1\", \"elements\": []}\n]\n";
    store.put("ui-tests-42-abc", raw, &metadata).unwrap();

    assert_eq!(store.get_raw("ui-tests-42-abc").unwrap(), raw);
}

#[test]
fn file_store_writes_one_directory_per_build() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let metadata = common::metadata_at("ui-tests", "42", common::base_time());

    store.put("b-1", b"[]", &metadata).unwrap();

    assert!(dir.path().join("b-1").join("cucumber.json").is_file());
    assert!(dir.path().join("b-1").join("metadata.json").is_file());
}

#[test]
fn file_store_round_trips_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let mut metadata = common::metadata_at("ui-tests", "42", common::base_time());
    metadata.build_url = Some("https://ci.example/job/42".to_string());
    metadata.branch = Some("main".to_string());

    store.put("b-1", b"[]", &metadata).unwrap();

    assert_eq!(store.get_metadata("b-1").unwrap(), metadata);
}

#[test]
fn file_store_lists_stored_ids() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let metadata = common::metadata_at("ui-tests", "42", common::base_time());

    store.put("b-b", b"[]", &metadata).unwrap();
    store.put("b-a", b"[]", &metadata).unwrap();

    assert_eq!(store.list_ids().unwrap(), vec!["b-a", "b-b"]);
}

#[test]
fn file_store_missing_root_lists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("never-created"));
    assert!(store.list_ids().unwrap().is_empty());
}

#[test]
fn file_store_skips_directories_without_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let metadata = common::metadata_at("ui-tests", "42", common::base_time());

    store.put("b-complete", b"[]", &metadata).unwrap();
    // A crashed partial write: directory with a payload but no metadata.
    std::fs::create_dir_all(dir.path().join("b-partial")).unwrap();
    std::fs::write(dir.path().join("b-partial").join("cucumber.json"), b"[]").unwrap();
    // Stray file at the root.
    std::fs::write(dir.path().join("notes.txt"), b"hi").unwrap();

    assert_eq!(store.list_ids().unwrap(), vec!["b-complete"]);
}

#[test]
fn file_store_not_found_errors() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    assert!(matches!(
        store.get_raw("nope").unwrap_err(),
        StoreError::NotFound(_)
    ));
    assert!(matches!(
        store.get_metadata("nope").unwrap_err(),
        StoreError::NotFound(_)
    ));
}

#[test]
fn file_store_corrupt_metadata_errors() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    std::fs::create_dir_all(dir.path().join("b-bad")).unwrap();
    std::fs::write(dir.path().join("b-bad").join("metadata.json"), b"not json").unwrap();

    assert!(matches!(
        store.get_metadata("b-bad").unwrap_err(),
        StoreError::CorruptMetadata { .. }
    ));
}

// ============================================================================
// 2. MemoryStore
// ============================================================================

#[test]
fn memory_store_round_trips() {
    let store = MemoryStore::new();
    let metadata = common::metadata_at("ui-tests", "1", common::base_time());

    store.put("b-1", b"[1]", &metadata).unwrap();

    assert_eq!(store.get_raw("b-1").unwrap(), b"[1]");
    assert_eq!(store.get_metadata("b-1").unwrap(), metadata);
    assert_eq!(store.list_ids().unwrap(), vec!["b-1"]);
}

#[test]
fn memory_store_not_found() {
    let store = MemoryStore::new();
    assert!(matches!(
        store.get_raw("nope").unwrap_err(),
        StoreError::NotFound(_)
    ));
}
