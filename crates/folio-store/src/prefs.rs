use crate::kv::Store;
use anyhow::Result;
use folio_types::Theme;

const THEME_KEY: &str = "theme";
const USERNAME_KEY: &str = "username";

/// Typed accessors for the preferences the CLI actually stores.
impl Store {
    /// Saved theme, or the default when unset or unreadable.
    pub fn theme(&self) -> Theme {
        self.get(THEME_KEY).unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.set(THEME_KEY, &theme)
    }

    pub fn username(&self) -> Option<String> {
        self.get(USERNAME_KEY)
    }

    pub fn set_username(&self, name: &str) -> Result<()> {
        self.set(USERNAME_KEY, &name)
    }

    pub fn clear_username(&self) -> Result<()> {
        self.remove(USERNAME_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults_to_light() {
        let store = Store::open_in_memory().unwrap();

        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_theme_round_trips() {
        let store = Store::open_in_memory().unwrap();

        store.set_theme(Theme::Dark).unwrap();

        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggled_theme_persists() {
        let store = Store::open_in_memory().unwrap();

        let next = store.theme().toggled();
        store.set_theme(next).unwrap();

        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn test_username_unset_is_none() {
        let store = Store::open_in_memory().unwrap();

        assert_eq!(store.username(), None);
    }

    #[test]
    fn test_username_set_and_clear() {
        let store = Store::open_in_memory().unwrap();

        store.set_username("Ada").unwrap();
        assert_eq!(store.username(), Some("Ada".to_string()));

        store.clear_username().unwrap();
        assert_eq!(store.username(), None);
    }
}
