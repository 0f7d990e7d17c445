pub mod form_spec_reader;
pub mod form_spec_writer;
