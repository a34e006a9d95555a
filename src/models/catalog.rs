use super::builtin;
use super::capability::ModelCapability;
use super::provider::ModelProvider;

/// Ordered list of capability records.
///
/// Order is insertion order. It only matters for listing; lookups go through
/// [`CapabilityIndex`](super::CapabilityIndex).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ModelCapability>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        builtin::register_all(&mut catalog);
        catalog
    }

    pub fn push(&mut self, record: ModelCapability) {
        self.records.push(record);
    }

    pub fn with(mut self, record: ModelCapability) -> Self {
        self.push(record);
        self
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = ModelCapability>) {
        self.records.extend(records);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelCapability> {
        self.records.iter()
    }

    pub fn by_provider<'a>(
        &'a self,
        provider: &'a ModelProvider,
    ) -> impl Iterator<Item = &'a ModelCapability> {
        self.records.iter().filter(move |r| &r.provider == provider)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn get(&self, position: usize) -> Option<&ModelCapability> {
        self.records.get(position)
    }
}

impl FromIterator<ModelCapability> for Catalog {
    fn from_iter<I: IntoIterator<Item = ModelCapability>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Catalog {
    type Item = ModelCapability;
    type IntoIter = std::vec::IntoIter<ModelCapability>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::capability::test_support::gpt_4o;

    #[test]
    fn test_insertion_order_preserved() {
        let first = gpt_4o();
        let second = ModelCapability {
            model_id: "openai/gpt-4o-mini".into(),
            ..gpt_4o()
        };
        let catalog = Catalog::new().with(first).with(second);

        let ids: Vec<&str> = catalog.iter().map(|r| r.model_id.as_str()).collect();
        assert_eq!(ids, ["openai/gpt-4o", "openai/gpt-4o-mini"]);
    }

    #[test]
    fn test_by_provider() {
        let catalog = Catalog::builtin();
        assert!(catalog.by_provider(&ModelProvider::OpenAI).count() > 0);
        assert!(
            catalog
                .by_provider(&ModelProvider::OpenRouter)
                .all(|r| r.base_url == "https://openrouter.ai/api/v1")
        );
        assert_eq!(catalog.by_provider(&ModelProvider::Together).count(), 0);
    }
}
