use super::enums::{OutputFormat, SortArg, ThemeArg};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Browse and search the project catalog")]
    Project {
        #[command(subcommand)]
        command: ProjectCommand,
    },

    #[command(about = "Show or change the display theme")]
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommand>,
    },

    #[command(about = "Manage the saved display name")]
    Name {
        #[command(subcommand)]
        command: NameCommand,
    },

    #[command(about = "Print a time-of-day greeting")]
    Greet,

    #[command(about = "Validate and send a contact message")]
    Contact {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        message: String,
    },

    #[command(about = "Fetch a random quote from the configured API")]
    Quote,

    #[command(about = "Initialize folio configuration")]
    Init,
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    #[command(about = "List catalog entries with filtering and sorting")]
    List {
        #[arg(long, default_value = "all", help = "Category to keep, or 'all'")]
        category: String,

        #[arg(long, default_value = "", help = "Case-insensitive substring search")]
        search: String,

        #[arg(long, default_value = "date-desc")]
        sort: SortArg,

        #[arg(long, default_value = "plain", help = "Output format")]
        format: OutputFormat,
    },

    #[command(about = "Show one catalog entry in full")]
    Show {
        id: u32,

        #[arg(long, default_value = "plain", help = "Output format")]
        format: OutputFormat,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    #[command(about = "Print the active theme")]
    Show,

    #[command(about = "Set the theme")]
    Set { theme: ThemeArg },

    #[command(about = "Switch between light and dark")]
    Toggle,
}

#[derive(Subcommand)]
pub enum NameCommand {
    #[command(about = "Save the display name used in greetings")]
    Set { name: String },

    #[command(about = "Forget the saved display name")]
    Clear,
}
