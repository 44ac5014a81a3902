//! Database row types and their mapping to domain types.

pub mod movie;
