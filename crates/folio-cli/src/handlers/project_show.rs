use crate::args::OutputFormat;
use crate::presentation::formatters::ProjectCardView;
use anyhow::Result;
use folio_types::seed_projects;

pub fn handle(id: u32, format: OutputFormat) -> Result<()> {
    let Some(project) = seed_projects().into_iter().find(|p| p.id == id) else {
        anyhow::bail!("No project with id {}", id);
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&project)?),
        OutputFormat::Plain => print!("{}", ProjectCardView::new(project)),
    }

    Ok(())
}
