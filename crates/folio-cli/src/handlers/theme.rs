use crate::args::ThemeCommand;
use anyhow::Result;
use folio_store::Store;
use folio_types::Theme;

pub fn handle(store: &Store, command: ThemeCommand) -> Result<()> {
    match command {
        ThemeCommand::Show => {
            println!("{}", store.theme());
        }
        ThemeCommand::Set { theme } => {
            let theme: Theme = theme.into();
            store.set_theme(theme)?;
            println!("Theme set to {}", theme);
        }
        ThemeCommand::Toggle => {
            let next = store.theme().toggled();
            store.set_theme(next)?;
            println!("Theme set to {}", next);
        }
    }

    Ok(())
}
