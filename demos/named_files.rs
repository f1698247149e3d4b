use pref_store::PrefStore;

fn main() -> Result<(), pref_store::Error> {
    let dir = std::env::temp_dir().join("pref_store_demo_named");
    let store = PrefStore::open(&dir);

    // batches persist with a single write per file
    store.insert_many(
        vec![("width", 1280), ("height", 720), ("maximized", 0)],
        Some("window.json"),
    )?;
    store.insert("theme", "dark", None)?;

    // each logical file is independent
    let window = store.get_many(["width", "height", "maximized"], Some("window.json"))?;
    println!("window.json   = {window:?}");
    println!("Settings.json = {:?}", store.get("theme", None)?);
    println!("width in default file? {:?}", store.get("width", None)?);

    let _ = std::fs::remove_dir_all(&dir);
    Ok(())
}
