pub mod api;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod models;
pub mod report;
