pub mod build;
pub mod report;
