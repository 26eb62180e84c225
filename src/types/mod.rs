pub mod answers;
pub mod config;
pub mod item;
pub mod report;
pub mod scoring;
