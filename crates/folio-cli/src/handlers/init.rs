use crate::config::Config;
use anyhow::Result;
use folio_store::Store;
use std::path::Path;

pub fn handle(data_dir: &Path) -> Result<()> {
    println!("Initializing folio\n");

    let config_path = data_dir.join("config.toml");
    if config_path.exists() {
        println!("Config: {} (existing)", config_path.display());
    } else {
        Config::default().save_to(&config_path)?;
        println!("Config: {} (created)", config_path.display());
    }

    let db_path = data_dir.join("folio.db");
    let store = Store::open(&db_path)?;
    println!("Store:  {} (theme: {})", db_path.display(), store.theme());

    println!("\nNext steps:");
    println!("  folio project list                # Browse the catalog");
    println!("  folio name set <NAME>             # Personalize the greeting");
    println!("  folio --help");

    Ok(())
}
