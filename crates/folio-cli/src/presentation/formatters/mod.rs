pub mod project_card;
pub mod project_list;
pub mod time;

pub use project_card::ProjectCardView;
pub use project_list::ProjectListView;
