use crate::args::{OutputFormat, SortArg};
use crate::presentation::formatters::ProjectListView;
use anyhow::Result;
use folio_engine::{evaluate, CategoryFilter, QueryParams};
use folio_types::seed_projects;
use is_terminal::IsTerminal;

pub fn handle(category: &str, search: &str, sort: SortArg, format: OutputFormat) -> Result<()> {
    let params = QueryParams::new()
        .category(CategoryFilter::from_selection(category))
        .search(search)
        .sort(sort.into());

    let projects = evaluate(&seed_projects(), &params);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&projects)?);
        }
        OutputFormat::Plain => {
            if projects.is_empty() {
                println!("No projects match your filters.");
            } else {
                let colored = std::io::stdout().is_terminal();
                print!("{}", ProjectListView::new(projects, colored));
            }
        }
    }

    Ok(())
}
