use pref_store::AsyncPrefStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), pref_store::Error> {
    let dir = std::env::temp_dir().join("pref_store_demo_nonblocking");
    let store = AsyncPrefStore::open(&dir);

    store.insert("volume", 80, None).await?;
    println!("volume = {:?}", store.get("volume", None).await?);

    // unawaited overlapping writes race last-write-wins; the file stays intact
    let (a, b) = tokio::join!(
        store.insert("volume", 10, None),
        store.insert("volume", 90, None)
    );
    println!("saves: {:?} {:?}", a?, b?);
    println!("volume after race = {:?}", store.get("volume", None).await?);

    // the blocking view shares the same files
    println!(
        "sync read: {:?}",
        store.blocking().get_or("volume", 50, None)?
    );

    let _ = std::fs::remove_dir_all(&dir);
    Ok(())
}
