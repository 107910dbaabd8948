use anyhow::Result;
use chrono::{Local, Timelike};
use folio_engine::greeting_line;
use folio_store::Store;

pub fn handle(store: &Store) -> Result<()> {
    let name = store.username();
    println!("{}", greeting_line(Local::now().hour(), name.as_deref()));

    Ok(())
}
