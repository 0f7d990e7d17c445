//! Adapters between the outside world's document formats and the domain model.

pub mod json;
