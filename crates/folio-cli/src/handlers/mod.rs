pub mod contact;
pub mod greet;
pub mod init;
pub mod name;
pub mod project_list;
pub mod project_show;
pub mod quote;
pub mod theme;
