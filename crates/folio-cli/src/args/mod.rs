// NOTE: Command Organization
//
// Why namespaced subcommands (not flat)?
// - project/theme/name group related operations and keep --help scannable
// - Example: `project list` and `theme set` instead of flat `list-projects`
//   and `set-theme`
// - Commands without variants (greet, contact, quote, init) stay flat

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse and search the portfolio catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "~/.folio", global = true)]
    pub data_dir: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
