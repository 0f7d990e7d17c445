//! Domain model for payment method form specs and the ports the application
//! layer depends on.

pub mod field_spec;
pub mod form_spec;
pub mod next_action;
pub mod ports;
