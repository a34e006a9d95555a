use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::capability::ModelCapability;
use super::catalog::Catalog;
use super::key::CompositeKey;
use super::provider::ModelProvider;
use super::validate::{CatalogError, validate};

/// Composite-key lookup over a validated catalog.
///
/// Built once and read-only afterwards; share it behind an `Arc` or a
/// [`SharedRegistry`](super::SharedRegistry).
#[derive(Debug, Clone)]
pub struct CapabilityIndex {
    catalog: Catalog,
    positions: HashMap<CompositeKey, usize>,
}

impl CapabilityIndex {
    /// Validates every record, then indexes it under its composite key.
    ///
    /// Two records resolving to the same key are rejected instead of letting
    /// the later one win.
    pub fn build(catalog: Catalog) -> Result<Self, CatalogError> {
        let mut positions = HashMap::with_capacity(catalog.len());

        for (position, record) in catalog.iter().enumerate() {
            validate(record)?;

            match positions.entry(record.key()) {
                Entry::Occupied(existing) => {
                    let first = catalog
                        .get(*existing.get())
                        .cloned()
                        .unwrap_or_else(|| record.clone());
                    return Err(CatalogError::DuplicateKey {
                        key: existing.key().clone(),
                        first: Box::new(first),
                        second: Box::new(record.clone()),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }

        tracing::debug!(models = catalog.len(), "capability index built");

        Ok(Self { catalog, positions })
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::build(Catalog::builtin())
    }

    /// Exact match on provider and model id; unknown pairs yield `None`.
    pub fn get(&self, provider: &ModelProvider, model_id: &str) -> Option<&ModelCapability> {
        self.get_by_key(&CompositeKey::new(provider.clone(), model_id))
    }

    pub fn get_by_key(&self, key: &CompositeKey) -> Option<&ModelCapability> {
        let position = *self.positions.get(key)?;
        self.catalog.get(position)
    }

    pub fn contains(&self, provider: &ModelProvider, model_id: &str) -> bool {
        self.get(provider, model_id).is_some()
    }

    /// Records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ModelCapability> {
        self.catalog.iter()
    }

    pub fn for_provider<'a>(
        &'a self,
        provider: &'a ModelProvider,
    ) -> impl Iterator<Item = &'a ModelCapability> {
        self.catalog.by_provider(provider)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}
