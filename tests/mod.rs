// Integration tests for dbcomment

pub mod cli;
pub mod statement;
