use folio_types::Project;
use std::cmp::Ordering;

/// Result ordering for catalog queries.
///
/// Dates are ISO `YYYY-MM-DD` strings, so plain byte comparison is
/// already chronological. Titles compare case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    DateAsc,
    DateDesc,
    TitleAsc,
    TitleDesc,
}

impl SortOrder {
    /// Parse a selection string. Unknown selections yield `None`
    /// rather than an error; callers keep the input order in that case.
    pub fn from_selection(selection: &str) -> Option<Self> {
        match selection {
            "date-asc" => Some(SortOrder::DateAsc),
            "date-desc" => Some(SortOrder::DateDesc),
            "title-asc" => Some(SortOrder::TitleAsc),
            "title-desc" => Some(SortOrder::TitleDesc),
            _ => None,
        }
    }

    fn compare(self, a: &Project, b: &Project) -> Ordering {
        match self {
            SortOrder::DateAsc => a.date.cmp(&b.date),
            SortOrder::DateDesc => b.date.cmp(&a.date),
            SortOrder::TitleAsc => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortOrder::TitleDesc => b.title.to_lowercase().cmp(&a.title.to_lowercase()),
        }
    }
}

/// Category selection. The literal `all` is the no-filter sentinel;
/// any other selection must equal a project category exactly, so an
/// unknown category matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_selection(selection: &str) -> Self {
        if selection == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(selection.to_string())
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == *category,
        }
    }
}

/// One complete query: category narrowing, free-text search, ordering.
///
/// `sort: None` keeps the input order, for callers that paginate or
/// pre-order the catalog themselves.
#[derive(Debug, Clone)]
pub struct QueryParams {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: Option<SortOrder>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            sort: Some(SortOrder::DateDesc),
        }
    }
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn unsorted(mut self) -> Self {
        self.sort = None;
        self
    }
}

/// Run a query against a catalog slice: category filter first, then
/// search, then sort. The sort is stable, so equal keys keep their
/// input order, and the input slice itself is never reordered.
///
/// Search is a case-insensitive substring test over the combined
/// title/summary/stack text, so a query may span field boundaries.
/// An empty query matches every project.
pub fn evaluate(projects: &[Project], params: &QueryParams) -> Vec<Project> {
    let needle = params.search.to_lowercase();

    let mut results: Vec<Project> = projects
        .iter()
        .filter(|p| params.category.matches(p))
        .filter(|p| needle.is_empty() || p.search_text().contains(&needle))
        .cloned()
        .collect();

    if let Some(order) = params.sort {
        results.sort_by(|a, b| order.compare(a, b));
    }

    results
}
