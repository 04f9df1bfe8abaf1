pub mod config;
pub mod open;
pub mod report;
pub mod track;
