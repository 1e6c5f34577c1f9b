pub mod executor;
pub mod report;
