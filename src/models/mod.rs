//! Model capability registry.
//!
//! A [`Catalog`] of [`ModelCapability`] records is validated and indexed once
//! into a [`CapabilityIndex`]; callers then look records up by provider and
//! model id for the lifetime of the process.

mod builtin;
mod capability;
mod catalog;
mod custom;
mod features;
mod index;
mod key;
mod provider;
mod registry;
mod validate;

pub use capability::{ModelCapability, ModelId, TokenLimits};
pub use catalog::Catalog;
pub use custom::{load_custom_models, parse_custom_models};
pub use features::{Feature, FeatureSet, OutputFormat, ReasoningEffort};
pub use index::CapabilityIndex;
pub use key::{CompositeKey, KEY_SEPARATOR};
pub use provider::ModelProvider;
pub use registry::SharedRegistry;
pub use validate::{CatalogError, validate, validate_catalog};
