use pref_store::{PrefStore, StoreConfig};

fn main() -> Result<(), pref_store::Error> {
    let dir = std::env::temp_dir().join("pref_store_demo_basic");
    let store = PrefStore::new(StoreConfig::new(&dir).pretty(true));

    // insert / get / get_or
    store.insert("theme", "dark", None)?;
    store.insert("font_size", 14, None)?;
    println!("theme     = {:?}", store.get("theme", None)?);
    println!("font_size = {:?}", store.get("font_size", None)?);
    println!("language  = {} (defaulted)", store.get_or("language", "en", None)?);

    // presence and removal
    println!("has theme?  {}", store.contains_key("theme", None)?);
    store.remove("theme", None)?;
    println!("after remove: {:?}", store.get("theme", None)?);

    // the default file is plain JSON on disk
    let contents = std::fs::read_to_string(store.default_path())?;
    println!("On-disk JSON:\n{contents}");

    let _ = std::fs::remove_dir_all(&dir);
    Ok(())
}
