//! CLI commands

pub mod init;
pub mod report;
