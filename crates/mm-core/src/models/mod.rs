pub mod lead;
pub mod project;
