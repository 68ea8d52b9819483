pub mod catalog;
pub mod ports;
pub mod types;
pub mod workflow;
