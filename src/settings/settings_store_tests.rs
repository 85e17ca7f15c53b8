//! Tests for settings/settings_store

use super::*;

#[test]
fn test_memory_settings_starts_empty() {
    let store = MemorySettings::new();
    assert!(store.is_empty());
    assert_eq!(store.get("anything"), None);
}

#[test]
fn test_memory_settings_set_then_get() {
    let mut store = MemorySettings::new();
    store.set("key", "value");
    assert_eq!(store.get("key"), Some("value".to_string()));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_memory_settings_last_writer_wins() {
    let mut store = MemorySettings::new();
    store.set("key", "first");
    store.set("key", "second");
    assert_eq!(store.get("key"), Some("second".to_string()));
    assert_eq!(store.len(), 1);
}

fn write_through<S: SettingsStore>(mut store: S) -> Option<String> {
    store.set("key", "through ref");
    store.get("key")
}

#[test]
fn test_mut_ref_forwards_to_inner_store() {
    let mut store = MemorySettings::new();
    assert_eq!(write_through(&mut store), Some("through ref".to_string()));
    assert_eq!(store.get("key"), Some("through ref".to_string()));
}

#[test]
fn test_boxed_store_is_a_store() {
    let mut store: Box<dyn SettingsStore> = Box::new(MemorySettings::new());
    store.set("key", "boxed");
    assert_eq!(store.get("key"), Some("boxed".to_string()));
}
