use super::field_spec::FieldSpec;
use super::next_action::NextActionSpec;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Everything needed to render and drive one payment method's form.
///
/// A `FormSpec` is never edited in place: overrides replace the whole entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSpec {
    /// Payment method identifier, e.g. `"eps"` or `"ideal"`.
    pub r#type: String,
    /// Whether confirmation waits on an external redirect before settling.
    #[serde(default)]
    pub r#async: bool,
    /// Fields in presentation order.
    #[serde(deserialize_with = "deserialize_known_fields")]
    pub fields: Vec<FieldSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_action_spec: Option<NextActionSpec>,
}

impl FormSpec {
    pub fn payment_method_type(&self) -> &str {
        &self.r#type
    }

    /// True if the next action spec names an action this build cannot run.
    pub fn has_unknown_next_actions(&self) -> bool {
        self.next_action_spec
            .as_ref()
            .is_some_and(NextActionSpec::has_unsupported_actions)
    }
}

/// Decodes the `fields` array one element at a time, dropping elements that
/// do not decode so older builds keep working when new field kinds ship.
fn deserialize_known_fields<'de, D>(deserializer: D) -> Result<Vec<FieldSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    let fields = raw
        .into_iter()
        .filter_map(|value| {
            let kind = value
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("<missing>")
                .to_string();
            match FieldSpec::deserialize(value) {
                Ok(field) => Some(field),
                Err(e) => {
                    tracing::debug!(field_type = %kind, error = %e, "skipping undecodable field");
                    None
                }
            }
        })
        .collect();
    Ok(fields)
}
