use super::form_spec::FormSpec;
use crate::error::Result;
use async_trait::async_trait;

/// The registry mapping from payment method identifier to its current spec.
///
/// Writes replace the stored entry wholesale.
pub trait FormSpecStore: Send + Sync {
    fn store(&mut self, spec: FormSpec);
    fn get(&self, payment_method_type: &str) -> Option<&FormSpec>;
    fn all(&self) -> Vec<&FormSpec>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Producer of a raw form spec document.
#[async_trait]
pub trait SpecSource: Send + Sync {
    async fn read(&self) -> Result<Vec<u8>>;

    /// Human readable origin, used in log output.
    fn describe(&self) -> String;
}

pub type FormSpecStoreBox = Box<dyn FormSpecStore>;
pub type SpecSourceBox = Box<dyn SpecSource>;
