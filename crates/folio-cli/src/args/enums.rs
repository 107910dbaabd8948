use clap::ValueEnum;
use folio_engine::SortOrder;
use folio_types::Theme;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum SortArg {
    DateAsc,
    DateDesc,
    TitleAsc,
    TitleDesc,
}

impl fmt::Display for SortArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortArg::DateAsc => write!(f, "date-asc"),
            SortArg::DateDesc => write!(f, "date-desc"),
            SortArg::TitleAsc => write!(f, "title-asc"),
            SortArg::TitleDesc => write!(f, "title-desc"),
        }
    }
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::DateAsc => SortOrder::DateAsc,
            SortArg::DateDesc => SortOrder::DateDesc,
            SortArg::TitleAsc => SortOrder::TitleAsc,
            SortArg::TitleDesc => SortOrder::TitleDesc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ThemeArg {
    Light,
    Dark,
}

impl fmt::Display for ThemeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeArg::Light => write!(f, "light"),
            ThemeArg::Dark => write!(f, "dark"),
        }
    }
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}
