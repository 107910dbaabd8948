use crate::presentation::formatters::time;
use folio_types::Project;
use owo_colors::OwoColorize;
use std::fmt;

/// One line per project, in the order the query produced.
pub struct ProjectListView {
    projects: Vec<Project>,
    colored: bool,
}

impl ProjectListView {
    pub fn new(projects: Vec<Project>, colored: bool) -> Self {
        Self { projects, colored }
    }
}

impl fmt::Display for ProjectListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for project in &self.projects {
            let id_display = format!("#{}", project.id);
            let date_display = time::format_display_date(&project.date);
            let category_display = format!("[{}]", project.category);
            let stack_display = project.stack.join(" · ");

            if self.colored {
                writeln!(
                    f,
                    "{} {} {} {} {}",
                    id_display.yellow(),
                    date_display.bright_black(),
                    category_display.blue(),
                    project.title,
                    stack_display.bright_black()
                )?;
            } else {
                writeln!(
                    f,
                    "{} {} {} {} {}",
                    id_display, date_display, category_display, project.title, stack_display
                )?;
            }
        }

        Ok(())
    }
}
