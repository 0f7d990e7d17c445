use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where a field's value goes in an outgoing request, keyed by API version.
///
/// `{"v1": "billing_details[name]"}` means "write this value to
/// `billing_details[name]` when talking to the v1 API".
pub type ApiPath = BTreeMap<String, String>;

/// Declarative description of one form input or static content block.
///
/// The `type` key of the JSON object selects the variant. Variants that carry
/// no user input (headers, mandates) only exist to render disclosure text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldSpec {
    Name(NameFieldSpec),
    Email(BaseFieldSpec),
    Phone(BaseFieldSpec),
    Iban(BaseFieldSpec),
    BillingAddress(BillingAddressSpec),
    Country(CountrySpec),
    KlarnaCountry(CountrySpec),
    Selector(SelectorSpec),
    AuBecsBsbNumber(BaseFieldSpec),
    AuBecsAccountNumber(BaseFieldSpec),
    AffirmHeader,
    AfterpayHeader,
    KlarnaHeader,
    SepaMandate,
    AuBecsMandate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameFieldSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_path: Option<ApiPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_id: Option<String>,
}

/// Attributes shared by plain text inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseFieldSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_path: Option<ApiPath>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAddressSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_country_codes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_path: Option<ApiPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_country_codes: Option<Vec<String>>,
}

/// A dropdown. `items` keeps the order the document lists them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_id: Option<String>,
    pub items: Vec<SelectorItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_path: Option<ApiPath>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorItem {
    pub display_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_value: Option<String>,
}

impl FieldSpec {
    /// The `type` tag this variant is decoded from.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldSpec::Name(_) => "name",
            FieldSpec::Email(_) => "email",
            FieldSpec::Phone(_) => "phone",
            FieldSpec::Iban(_) => "iban",
            FieldSpec::BillingAddress(_) => "billing_address",
            FieldSpec::Country(_) => "country",
            FieldSpec::KlarnaCountry(_) => "klarna_country",
            FieldSpec::Selector(_) => "selector",
            FieldSpec::AuBecsBsbNumber(_) => "au_becs_bsb_number",
            FieldSpec::AuBecsAccountNumber(_) => "au_becs_account_number",
            FieldSpec::AffirmHeader => "affirm_header",
            FieldSpec::AfterpayHeader => "afterpay_header",
            FieldSpec::KlarnaHeader => "klarna_header",
            FieldSpec::SepaMandate => "sepa_mandate",
            FieldSpec::AuBecsMandate => "au_becs_mandate",
        }
    }

    pub fn api_path(&self) -> Option<&ApiPath> {
        match self {
            FieldSpec::Name(spec) => spec.api_path.as_ref(),
            FieldSpec::Email(spec)
            | FieldSpec::Phone(spec)
            | FieldSpec::Iban(spec)
            | FieldSpec::AuBecsBsbNumber(spec)
            | FieldSpec::AuBecsAccountNumber(spec) => spec.api_path.as_ref(),
            FieldSpec::Country(spec) | FieldSpec::KlarnaCountry(spec) => spec.api_path.as_ref(),
            FieldSpec::Selector(spec) => spec.api_path.as_ref(),
            FieldSpec::BillingAddress(_)
            | FieldSpec::AffirmHeader
            | FieldSpec::AfterpayHeader
            | FieldSpec::KlarnaHeader
            | FieldSpec::SepaMandate
            | FieldSpec::AuBecsMandate => None,
        }
    }

    /// Localization key overriding the default label, if any.
    pub fn translation_id(&self) -> Option<&str> {
        match self {
            FieldSpec::Name(spec) => spec.translation_id.as_deref(),
            FieldSpec::Selector(spec) => spec.translation_id.as_deref(),
            _ => None,
        }
    }

    /// True for disclosure-only variants that collect no input.
    pub fn is_static(&self) -> bool {
        matches!(
            self,
            FieldSpec::AffirmHeader
                | FieldSpec::AfterpayHeader
                | FieldSpec::KlarnaHeader
                | FieldSpec::SepaMandate
                | FieldSpec::AuBecsMandate
        )
    }
}
