pub mod academic;
pub mod achievements;
pub mod auth;
pub mod contact;
pub mod core;
pub mod form_ops;
pub mod gallery;
pub mod student_results;
pub mod teachers;
