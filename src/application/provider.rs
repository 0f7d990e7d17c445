use crate::application::capability;
use crate::domain::form_spec::FormSpec;
use crate::domain::ports::{FormSpecStoreBox, SpecSourceBox};
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryFormSpecStore;
use crate::infrastructure::source::BundledSpecSource;
use crate::interfaces::json::form_spec_reader::FormSpecReader;
use serde_json::Value;
use tracing::{info, warn};

/// Outcome of applying an override document, in processing order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OverrideReport {
    /// Identifiers whose entry was replaced.
    pub applied: Vec<String>,
    /// Identifiers dropped because they named an unsupported next action.
    pub rejected: Vec<String>,
}

/// Owns the mapping from payment method identifier to its current form spec.
///
/// Defaults come from a [`SpecSource`](crate::domain::ports::SpecSource) via
/// [`load`](Self::load); override documents are merged in with
/// [`load_from`](Self::load_from). Callers are expected to let the default
/// load finish before applying overrides.
pub struct FormSpecProvider {
    store: FormSpecStoreBox,
    source: SpecSourceBox,
    loaded: bool,
}

impl FormSpecProvider {
    /// Creates a provider over an explicit store and default-document source.
    ///
    /// # Arguments
    ///
    /// * `store` - The registry the provider reads and writes.
    /// * `source` - Where [`load`](Self::load) reads the default document from.
    pub fn new(store: FormSpecStoreBox, source: SpecSourceBox) -> Self {
        Self {
            store,
            source,
            loaded: false,
        }
    }

    /// Loads the default document into the registry.
    ///
    /// Resolves exactly once with `true` on success. On a read or decode
    /// failure it resolves with `false` and the registry is left as it was.
    pub async fn load(&mut self) -> bool {
        match self.read_defaults().await {
            Ok(specs) => {
                let count = specs.len();
                for spec in specs {
                    self.store.store(spec);
                }
                self.loaded = true;
                info!(source = %self.source.describe(), count, "loaded default form specs");
                true
            }
            Err(e) => {
                warn!(source = %self.source.describe(), error = %e, "failed to load default form specs");
                false
            }
        }
    }

    async fn read_defaults(&self) -> Result<Vec<FormSpec>> {
        let bytes = self.source.read().await?;
        FormSpecReader::from_slice(&bytes)
    }

    /// Merges an override document into the registry.
    ///
    /// The whole document is decoded first; a decode error is returned and
    /// nothing is written. Each decoded entry is then checked on its own: an
    /// entry naming an unsupported next action is dropped and the existing
    /// entry for that identifier is kept, otherwise the entry replaces it
    /// wholesale. Later entries for the same identifier win.
    pub fn load_from(&mut self, value: &Value) -> Result<OverrideReport> {
        let specs = FormSpecReader::from_value(value)?;
        let mut report = OverrideReport::default();

        for spec in specs {
            if self.contains_unknown_next_actions(std::slice::from_ref(&spec)) {
                warn!(
                    payment_method_type = %spec.r#type,
                    "rejecting form spec override with unsupported next action"
                );
                report.rejected.push(spec.r#type);
            } else {
                report.applied.push(spec.r#type.clone());
                self.store.store(spec);
            }
        }

        info!(
            applied = report.applied.len(),
            rejected = report.rejected.len(),
            "applied form spec overrides"
        );
        Ok(report)
    }

    /// See [`capability::contains_unknown_next_actions`].
    pub fn contains_unknown_next_actions(&self, form_specs: &[FormSpec]) -> bool {
        capability::contains_unknown_next_actions(form_specs)
    }

    /// The current spec for a payment method, or `None` if this build has none.
    pub fn form_spec(&self, payment_method_type: &str) -> Option<&FormSpec> {
        self.store.get(payment_method_type)
    }

    /// Whether a default load has completed successfully.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// All identifiers currently in the registry, sorted.
    pub fn payment_method_types(&self) -> Vec<&str> {
        self.store
            .all()
            .into_iter()
            .map(FormSpec::payment_method_type)
            .collect()
    }

    pub fn form_specs(&self) -> Vec<&FormSpec> {
        self.store.all()
    }
}

impl Default for FormSpecProvider {
    fn default() -> Self {
        Self::new(
            Box::new(InMemoryFormSpecStore::new()),
            Box::new(BundledSpecSource),
        )
    }
}
