//! Domain types, field rules and the error taxonomy shared by the data-access
//! and HTTP layers.

pub mod error;
pub mod movie;
pub mod types;
pub mod validation;
