mod client;
mod response;

pub use client::{FetchError, TatoebaClient};
pub use response::SearchResponse;
