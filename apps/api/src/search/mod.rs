// Proximity & fielded search.
// Both engines scan the full collection fetched from the store; no index.

pub mod handlers;
pub mod keyword;
pub mod proximity;
