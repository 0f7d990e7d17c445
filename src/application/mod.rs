//! Application layer: the form spec registry and the capability check that
//! guards what an override document may activate.

pub mod capability;
pub mod provider;
