use serde::{Deserialize, Serialize};

/// A single portfolio entry as shown in the catalog.
///
/// Serialized form keeps the `type` key for the category so exported JSON
/// stays compatible with earlier dumps of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub category: String,
    /// ISO calendar date (`YYYY-MM-DD`).
    pub date: String,
    pub summary: String,
    pub stack: Vec<String>,
}

impl Project {
    /// Title, summary, and stack joined into one lowercase haystack for
    /// substring search.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.summary, self.stack.join(" ")).to_lowercase()
    }
}

/// The built-in catalog, in insertion order.
pub fn seed_projects() -> Vec<Project> {
    fn entry(id: u32, title: &str, category: &str, date: &str, summary: &str, stack: &[&str]) -> Project {
        Project {
            id,
            title: title.to_string(),
            category: category.to_string(),
            date: date.to_string(),
            summary: summary.to_string(),
            stack: stack.iter().map(|s| s.to_string()).collect(),
        }
    }

    vec![
        entry(
            1,
            "Responsive Web Landing",
            "web",
            "2025-05-20",
            "Marketing landing with responsive grid.",
            &["HTML", "CSS", "JS"],
        ),
        entry(
            2,
            "Data Explorer",
            "data",
            "2025-03-02",
            "Client-side CSV explorer and charts.",
            &["JS", "D3"],
        ),
        entry(
            3,
            "Portfolio Redesign",
            "design",
            "2025-08-15",
            "High-fidelity Figma components.",
            &["Figma"],
        ),
        entry(
            4,
            "API Dashboard",
            "web",
            "2025-10-01",
            "Dashboard with fetch, retries, and caching.",
            &["JS", "API"],
        ),
    ]
}
