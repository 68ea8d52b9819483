pub mod insert;
pub mod search;
