use crate::domain::form_spec::FormSpec;
use crate::domain::ports::FormSpecStore;
use std::collections::HashMap;

/// An in-memory registry of form specs keyed by payment method identifier.
///
/// Holds no lock: mutation goes through `&mut self`, so the owner decides how
/// (and whether) to share it.
#[derive(Default, Debug, Clone)]
pub struct InMemoryFormSpecStore {
    specs: HashMap<String, FormSpec>,
}

impl InMemoryFormSpecStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormSpecStore for InMemoryFormSpecStore {
    fn store(&mut self, spec: FormSpec) {
        self.specs.insert(spec.r#type.clone(), spec);
    }

    fn get(&self, payment_method_type: &str) -> Option<&FormSpec> {
        self.specs.get(payment_method_type)
    }

    fn all(&self) -> Vec<&FormSpec> {
        let mut specs: Vec<_> = self.specs.values().collect();
        specs.sort_by(|a, b| a.r#type.cmp(&b.r#type));
        specs
    }

    fn len(&self) -> usize {
        self.specs.len()
    }
}
