use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a payment method reacts to intent statuses during and after confirmation.
///
/// Both maps are keyed by the PaymentIntent status string (`requires_action`,
/// `succeeded`, ...). An absent post-confirm map means no post-confirm
/// handling is defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextActionSpec {
    pub confirm_response_status_specs: BTreeMap<String, ConfirmResponseAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_confirm_handling_pi_status_specs: Option<BTreeMap<String, PostConfirmAction>>,
}

/// Reaction to the status returned by the confirm API call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConfirmResponseAction {
    RedirectToUrl(RedirectToUrl),
    Finished,
    Canceled,
    /// Any action kind this build cannot execute.
    #[serde(other)]
    Unsupported,
}

/// Terminal handling once the intent settles after confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PostConfirmAction {
    Finished,
    Canceled,
    #[serde(other)]
    Unsupported,
}

pub const DEFAULT_REDIRECT_URL_PATH: &str = "next_action[redirect_to_url][url]";
pub const DEFAULT_RETURN_URL_PATH: &str = "next_action[redirect_to_url][return_url]";

/// Key paths into the confirm response locating the redirect and return URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectToUrl {
    pub url_path: String,
    pub return_url_path: String,
}

impl Default for RedirectToUrl {
    fn default() -> Self {
        Self {
            url_path: DEFAULT_REDIRECT_URL_PATH.to_string(),
            return_url_path: DEFAULT_RETURN_URL_PATH.to_string(),
        }
    }
}

impl ConfirmResponseAction {
    pub fn is_supported(&self) -> bool {
        !matches!(self, ConfirmResponseAction::Unsupported)
    }
}

impl PostConfirmAction {
    pub fn is_supported(&self) -> bool {
        !matches!(self, PostConfirmAction::Unsupported)
    }
}

impl NextActionSpec {
    /// True if any status in either map decoded to an unsupported action.
    pub fn has_unsupported_actions(&self) -> bool {
        let confirm = self
            .confirm_response_status_specs
            .values()
            .any(|action| !action.is_supported());
        let post_confirm = self
            .post_confirm_handling_pi_status_specs
            .as_ref()
            .is_some_and(|specs| specs.values().any(|action| !action.is_supported()));
        confirm || post_confirm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_redirect_defaults_are_filled() {
        let action: ConfirmResponseAction =
            serde_json::from_value(json!({"type": "redirect_to_url"})).unwrap();
        assert_eq!(action, ConfirmResponseAction::RedirectToUrl(RedirectToUrl::default()));
    }

    #[test]
    fn test_redirect_custom_paths() {
        let action: ConfirmResponseAction = serde_json::from_value(json!({
            "type": "redirect_to_url",
            "url_path": "next_action[alipay_handle_redirect][url]"
        }))
        .unwrap();
        let ConfirmResponseAction::RedirectToUrl(redirect) = action else {
            panic!("expected redirect_to_url");
        };
        assert_eq!(redirect.url_path, "next_action[alipay_handle_redirect][url]");
        assert_eq!(redirect.return_url_path, DEFAULT_RETURN_URL_PATH);
    }

    #[test]
    fn test_unknown_tags_decode_to_unsupported() {
        let confirm: ConfirmResponseAction =
            serde_json::from_value(json!({"type": "redirect_to_url_v2_NotSupported"})).unwrap();
        assert_eq!(confirm, ConfirmResponseAction::Unsupported);

        let post: PostConfirmAction =
            serde_json::from_value(json!({"type": "finished_NotSupportedType"})).unwrap();
        assert_eq!(post, PostConfirmAction::Unsupported);
    }

    #[test]
    fn test_missing_post_confirm_map_stays_absent() {
        let spec: NextActionSpec = serde_json::from_value(json!({
            "confirm_response_status_specs": {
                "requires_action": {"type": "redirect_to_url"}
            }
        }))
        .unwrap();
        assert!(spec.post_confirm_handling_pi_status_specs.is_none());
        assert!(!spec.has_unsupported_actions());
    }

    #[test]
    fn test_has_unsupported_actions_checks_both_maps() {
        let spec: NextActionSpec = serde_json::from_value(json!({
            "confirm_response_status_specs": {
                "requires_action": {"type": "redirect_to_url"}
            },
            "post_confirm_handling_pi_status_specs": {
                "succeeded": {"type": "finished"},
                "requires_action": {"type": "teleport"}
            }
        }))
        .unwrap();
        assert!(spec.has_unsupported_actions());
    }
}
