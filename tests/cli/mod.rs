pub mod comment;
pub mod show;
