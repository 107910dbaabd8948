use crate::presentation::formatters::time;
use folio_types::Project;
use std::fmt;

/// Full detail card for a single project.
pub struct ProjectCardView {
    project: Project,
}

impl ProjectCardView {
    pub fn new(project: Project) -> Self {
        Self { project }
    }
}

impl fmt::Display for ProjectCardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let project = &self.project;

        writeln!(f, "{}", project.title)?;
        writeln!(
            f,
            "{} • {}",
            project.category.to_uppercase(),
            time::format_display_date(&project.date)
        )?;
        writeln!(f)?;
        writeln!(f, "{}", project.summary)?;
        writeln!(f)?;
        writeln!(f, "Stack: {}", project.stack.join(", "))?;
        writeln!(f, "Project ID: {}", project.id)?;

        Ok(())
    }
}
