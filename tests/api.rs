use pref_store::{Error, PrefStore, StoreConfig};
use tempfile::TempDir;

fn temp_store() -> (TempDir, PrefStore) {
    let dir = TempDir::new().unwrap();
    let store = PrefStore::open(dir.path().join("prefs"));
    (dir, store)
}

// ---- get / insert -----------------------------------------------------------

#[test]
fn insert_then_get_roundtrip() {
    let (_dir, store) = temp_store();
    assert!(store.insert("theme", "dark", None).unwrap());
    assert_eq!(store.get("theme", None).unwrap().as_deref(), Some("dark"));
    assert_eq!(store.get_or("theme", "light", None).unwrap(), "dark");
}

#[test]
fn insert_overwrites_existing() {
    let (_dir, store) = temp_store();
    store.insert("lang", "en", None).unwrap();
    store.insert("lang", "de", None).unwrap();
    assert_eq!(store.get("lang", None).unwrap().as_deref(), Some("de"));
}

#[test]
fn get_missing_key_is_none() {
    let (_dir, store) = temp_store();
    assert_eq!(store.get("nope", None).unwrap(), None);
}

#[test]
fn non_string_values_are_stored_as_strings() {
    let (_dir, store) = temp_store();
    store.insert("retries", 3, None).unwrap();
    store.insert("enabled", true, None).unwrap();
    store.insert("ratio", 1.5, None).unwrap();
    assert_eq!(store.get("retries", None).unwrap().as_deref(), Some("3"));
    assert_eq!(store.get("enabled", None).unwrap().as_deref(), Some("true"));
    assert_eq!(store.get("ratio", None).unwrap().as_deref(), Some("1.5"));
}

// ---- get_or -----------------------------------------------------------------

#[test]
fn get_or_falls_back_to_default() {
    let (_dir, store) = temp_store();
    assert_eq!(store.get_or("missing", "fallback", None).unwrap(), "fallback");
    assert_eq!(store.get_or("missing", 42, None).unwrap(), "42");
}

#[test]
fn get_or_does_not_write_the_default_back() {
    let (_dir, store) = temp_store();
    let _ = store.get_or("missing", "fallback", None).unwrap();
    assert!(!store.contains_key("missing", None).unwrap());
}

// ---- contains_key -----------------------------------------------------------

#[test]
fn contains_key_reports_presence() {
    let (_dir, store) = temp_store();
    assert!(!store.contains_key("flag", None).unwrap());
    store.insert("flag", "on", None).unwrap();
    assert!(store.contains_key("flag", None).unwrap());
}

#[test]
fn contains_key_is_exact_match() {
    let (_dir, store) = temp_store();
    store.insert("Theme", "dark", None).unwrap();
    assert!(!store.contains_key("theme", None).unwrap());
}

// ---- remove -----------------------------------------------------------------

#[test]
fn remove_present_key() {
    let (_dir, store) = temp_store();
    store.insert("gone", "soon", None).unwrap();
    assert!(store.remove("gone", None).unwrap());
    assert!(!store.contains_key("gone", None).unwrap());
}

#[test]
fn remove_absent_key_is_a_successful_noop() {
    let (_dir, store) = temp_store();
    store.insert("keep", "me", None).unwrap();
    assert!(store.remove("never_there", None).unwrap());
    assert_eq!(store.get("keep", None).unwrap().as_deref(), Some("me"));
}

// ---- batch ops --------------------------------------------------------------

#[test]
fn insert_many_returns_stored_values_in_input_order() {
    let (_dir, store) = temp_store();
    let stored = store
        .insert_many(vec![("a", "1"), ("b", "2")], None)
        .unwrap();
    assert_eq!(stored, vec!["1".to_string(), "2".to_string()]);
}

#[test]
fn insert_many_coerces_values() {
    let (_dir, store) = temp_store();
    let stored = store
        .insert_many(vec![("a".to_string(), serde_json::json!(1)), ("b".to_string(), serde_json::json!(2))], None)
        .unwrap();
    assert_eq!(stored, vec!["1".to_string(), "2".to_string()]);
    assert_eq!(store.get("a", None).unwrap().as_deref(), Some("1"));
}

#[test]
fn get_many_preserves_order_and_reports_missing() {
    let (_dir, store) = temp_store();
    store.insert_many(vec![("a", "1"), ("b", "2")], None).unwrap();
    let values = store.get_many(["a", "b", "c"], None).unwrap();
    assert_eq!(
        values,
        vec![Some("1".to_string()), Some("2".to_string()), None]
    );
}

#[test]
fn get_many_preserves_duplicates() {
    let (_dir, store) = temp_store();
    store.insert("a", "1", None).unwrap();
    let values = store.get_many(["a", "x", "a"], None).unwrap();
    assert_eq!(values, vec![Some("1".to_string()), None, Some("1".to_string())]);
}

// ---- named files ------------------------------------------------------------

#[test]
fn named_files_are_independent() {
    let (_dir, store) = temp_store();
    store.insert("key", "default-file", None).unwrap();
    store.insert("key", "alternate", Some("alt.json")).unwrap();

    assert_eq!(
        store.get("key", None).unwrap().as_deref(),
        Some("default-file")
    );
    assert_eq!(
        store.get("key", Some("alt.json")).unwrap().as_deref(),
        Some("alternate")
    );
}

#[test]
fn default_path_points_at_settings_json() {
    let (_dir, store) = temp_store();
    assert!(store.default_path().ends_with("Settings.json"));
    store.insert("k", "v", None).unwrap();
    assert!(store.default_path().exists());
}

// ---- name validation --------------------------------------------------------

#[test]
fn empty_file_name_is_rejected() {
    let (_dir, store) = temp_store();
    assert!(matches!(
        store.get("k", Some("")),
        Err(Error::InvalidName(_))
    ));
}

#[test]
fn escaping_file_names_are_rejected() {
    let (_dir, store) = temp_store();
    for name in ["../escape.json", "/etc/passwd", "a/../../b.json"] {
        assert!(
            matches!(store.insert("k", "v", Some(name)), Err(Error::InvalidName(_))),
            "{name} should be rejected"
        );
    }
}

// ---- output format ----------------------------------------------------------

#[test]
fn pretty_config_writes_indented_json() {
    let dir = TempDir::new().unwrap();
    let store = PrefStore::new(StoreConfig::new(dir.path()).pretty(true));
    store.insert("hello", "world", None).unwrap();

    let raw = std::fs::read_to_string(store.default_path()).unwrap();
    // pretty JSON has newlines and indentation
    assert!(raw.contains('\n'));
    assert!(raw.contains("  "));
}

#[test]
fn compact_config_writes_single_line_json() {
    let dir = TempDir::new().unwrap();
    let store = PrefStore::open(dir.path());
    store.insert("hello", "world", None).unwrap();

    let raw = std::fs::read_to_string(store.default_path()).unwrap();
    assert!(!raw.contains('\n'));
}
