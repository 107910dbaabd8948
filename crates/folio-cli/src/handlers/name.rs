use anyhow::Result;
use folio_store::Store;

pub fn set(store: &Store, name: &str) -> Result<()> {
    let trimmed = name.trim();
    // Empty input leaves the saved name untouched.
    if !trimmed.is_empty() {
        store.set_username(trimmed)?;
    }
    super::greet::handle(store)
}

pub fn clear(store: &Store) -> Result<()> {
    store.clear_username()?;
    super::greet::handle(store)
}
