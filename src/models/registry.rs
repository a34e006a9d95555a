use std::sync::{Arc, RwLock};

use super::capability::ModelCapability;
use super::catalog::Catalog;
use super::index::CapabilityIndex;
use super::validate::CatalogError;

/// Registry that accepts runtime registration of custom models.
///
/// Readers take an immutable [`CapabilityIndex`] snapshot. Registration is the
/// only writer: it builds and validates a complete replacement index while
/// holding the write lock, then swaps it in, so a reader never observes a
/// partially registered record.
#[derive(Debug)]
pub struct SharedRegistry {
    current: RwLock<Arc<CapabilityIndex>>,
}

impl SharedRegistry {
    pub fn new(index: CapabilityIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
        }
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        CapabilityIndex::builtin().map(Self::new)
    }

    pub fn snapshot(&self) -> Arc<CapabilityIndex> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Adds records on top of the current catalog.
    ///
    /// On error the current index is left untouched. A record whose key already
    /// exists is rejected as [`CatalogError::DuplicateKey`].
    pub fn register_custom(
        &self,
        records: impl IntoIterator<Item = ModelCapability>,
    ) -> Result<Arc<CapabilityIndex>, CatalogError> {
        let mut current = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let mut catalog: Catalog = current.catalog().clone();
        let before = catalog.len();
        catalog.extend(records);
        let added = catalog.len() - before;

        let next = Arc::new(CapabilityIndex::build(catalog)?);
        *current = Arc::clone(&next);

        tracing::info!(added, total = next.len(), "registered custom models");

        Ok(next)
    }
}
