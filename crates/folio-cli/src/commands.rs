use super::args::{Cli, Commands, NameCommand, ProjectCommand, ThemeCommand};
use super::handlers;
use crate::config::Config;
use anyhow::Result;
use chrono::Timelike;
use folio_store::Store;
use std::path::{Path, PathBuf};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = expand_tilde(&cli.data_dir);

    let Some(command) = cli.command else {
        show_guidance(&data_dir)?;
        return Ok(());
    };

    match command {
        Commands::Project { command } => match command {
            ProjectCommand::List {
                category,
                search,
                sort,
                format,
            } => handlers::project_list::handle(&category, &search, sort, format),
            ProjectCommand::Show { id, format } => handlers::project_show::handle(id, format),
        },

        Commands::Theme { command } => {
            let store = open_store(&data_dir)?;
            handlers::theme::handle(&store, command.unwrap_or(ThemeCommand::Show))
        }

        Commands::Name { command } => {
            let store = open_store(&data_dir)?;
            match command {
                NameCommand::Set { name } => handlers::name::set(&store, &name),
                NameCommand::Clear => handlers::name::clear(&store),
            }
        }

        Commands::Greet => {
            let store = open_store(&data_dir)?;
            handlers::greet::handle(&store)
        }

        Commands::Contact {
            name,
            email,
            message,
        } => handlers::contact::handle(&name, &email, &message),

        Commands::Quote => {
            let config_path = data_dir.join("config.toml");
            let config = Config::load_from(&config_path)?;
            handlers::quote::handle(&config)
        }

        Commands::Init => handlers::init::handle(&data_dir),
    }
}

fn open_store(data_dir: &Path) -> Result<Store> {
    Store::open(&data_dir.join("folio.db"))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

fn show_guidance(data_dir: &Path) -> Result<()> {
    let config_path = data_dir.join("config.toml");
    let db_path = data_dir.join("folio.db");

    let config_exists = config_path.exists();
    let db_exists = db_path.exists();

    // Bare invocation must not create the store; only read a name that
    // is already there.
    let name = if db_exists {
        Store::open(&db_path).ok().and_then(|store| store.username())
    } else {
        None
    };
    let hour = chrono::Local::now().hour();
    println!("{}\n", folio_engine::greeting_line(hour, name.as_deref()));

    println!("folio - Portfolio console\n");

    if !config_exists || !db_exists {
        println!("Get started:");
        println!("  folio init\n");
        println!("The init command will:");
        println!("  1. Write a default config.toml");
        println!("  2. Set up the preference store");
        println!("  3. Show where your data lives\n");
    } else {
        println!("Quick commands:");
        println!("  folio project list                # Browse the catalog");
        println!("  folio project show <ID>           # View one project");
        println!("  folio theme toggle                # Switch light/dark");
        println!("  folio quote                       # Fetch a random quote\n");
    }

    println!("For more commands:");
    println!("  folio --help");

    Ok(())
}
