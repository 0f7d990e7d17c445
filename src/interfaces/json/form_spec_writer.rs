use crate::domain::form_spec::FormSpec;
use crate::error::Result;
use std::io::Write;

/// Writes form specs as a pretty-printed JSON array in the same shape the
/// reader accepts.
pub struct FormSpecWriter<W: Write> {
    writer: W,
}

impl<W: Write> FormSpecWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_specs<'a>(&mut self, specs: impl IntoIterator<Item = &'a FormSpec>) -> Result<()> {
        let specs: Vec<&FormSpec> = specs.into_iter().collect();
        serde_json::to_writer_pretty(&mut self.writer, &specs)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::json::form_spec_reader::FormSpecReader;
    use serde_json::json;

    #[test]
    fn test_written_output_reads_back() {
        let doc = json!([{
            "type": "eps",
            "async": false,
            "fields": [
                {"type": "name", "api_path": {"v1": "billing_details[name]"}},
                {"type": "sepa_mandate"}
            ],
            "next_action_spec": {
                "confirm_response_status_specs": {
                    "requires_action": {"type": "redirect_to_url"}
                }
            }
        }]);
        let specs = FormSpecReader::from_value(&doc).unwrap();

        let mut out = Vec::new();
        FormSpecWriter::new(&mut out).write_specs(&specs).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"billing_details[name]\""));
        assert!(text.contains("\"next_action[redirect_to_url][url]\""));
        assert!(!text.contains("post_confirm_handling_pi_status_specs"));
        assert_eq!(FormSpecReader::from_slice(text.as_bytes()).unwrap(), specs);
    }
}
