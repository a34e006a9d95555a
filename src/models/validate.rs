//! Integrity checks run over the catalog before an index is exposed.
//!
//! Every failure here is an authoring defect in static data. The error carries
//! the complete offending record so it can be found in source.

use thiserror::Error;

use super::capability::ModelCapability;
use super::catalog::Catalog;
use super::key::{CompositeKey, KEY_SEPARATOR};
use super::provider::ModelProvider;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("model capability is missing required field `{field}`:\n{record:#?}")]
    MissingField {
        field: &'static str,
        record: Box<ModelCapability>,
    },

    #[error("model capability has invalid `{field}` ({reason}):\n{record:#?}")]
    InvalidField {
        field: &'static str,
        reason: String,
        record: Box<ModelCapability>,
    },

    #[error("model capability violates token budget ({reason}):\n{record:#?}")]
    TokenBudget {
        reason: String,
        record: Box<ModelCapability>,
    },

    #[error("duplicate composite key `{key}`:\nfirst: {first:#?}\nsecond: {second:#?}")]
    DuplicateKey {
        key: CompositeKey,
        first: Box<ModelCapability>,
        second: Box<ModelCapability>,
    },
}

impl CatalogError {
    /// Record that triggered the failure (the later one for duplicates).
    pub fn record(&self) -> &ModelCapability {
        match self {
            Self::MissingField { record, .. }
            | Self::InvalidField { record, .. }
            | Self::TokenBudget { record, .. } => record,
            Self::DuplicateKey { second, .. } => second,
        }
    }

    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field, .. } | Self::InvalidField { field, .. } => Some(*field),
            _ => None,
        }
    }
}

type Presence = fn(&ModelCapability) -> bool;

// Checked in this order; the first absent field is reported.
// `preferred_output_format` is an enum and cannot be absent once constructed.
const REQUIRED: &[(&str, Presence)] = &[
    ("description", |m| !m.description.is_empty()),
    ("provider", |m| !m.provider.as_str().is_empty()),
    ("model_id", |m| !m.model_id.is_empty()),
    ("default_max_convo_tokens", |m| m.default_max_convo_tokens > 0),
    ("max_tokens", |m| m.max_tokens > 0),
    ("max_output_tokens", |m| m.max_output_tokens > 0),
    ("reserved_output_tokens", |m| m.reserved_output_tokens > 0),
    ("api_key_env_var", |m| !m.api_key_env_var.is_empty()),
    ("base_url", |m| !m.base_url.is_empty()),
];

pub fn validate(record: &ModelCapability) -> Result<(), CatalogError> {
    for &(field, present) in REQUIRED {
        if !present(record) {
            return Err(CatalogError::MissingField {
                field,
                record: Box::new(record.clone()),
            });
        }
    }

    if let ModelProvider::Custom(name) = &record.provider {
        let reason = if name.contains(KEY_SEPARATOR) {
            Some(format!(
                "custom provider name must not contain '{}'",
                KEY_SEPARATOR
            ))
        } else if !ModelProvider::from(name.as_str()).is_custom() {
            Some(format!("custom provider name '{name}' is a known provider"))
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(CatalogError::InvalidField {
                field: "provider",
                reason,
                record: Box::new(record.clone()),
            });
        }
    }

    check_token_budget(record)
}

fn check_token_budget(record: &ModelCapability) -> Result<(), CatalogError> {
    let reason = if record.reserved_output_tokens > record.max_output_tokens {
        format!(
            "reserved_output_tokens {} exceeds max_output_tokens {}",
            record.reserved_output_tokens, record.max_output_tokens
        )
    } else if record.max_output_tokens > record.max_tokens {
        format!(
            "max_output_tokens {} exceeds max_tokens {}",
            record.max_output_tokens, record.max_tokens
        )
    } else if record.reserved_output_tokens >= record.max_tokens {
        format!(
            "reserved_output_tokens {} leaves no input budget within max_tokens {}",
            record.reserved_output_tokens, record.max_tokens
        )
    } else {
        return Ok(());
    };

    Err(CatalogError::TokenBudget {
        reason,
        record: Box::new(record.clone()),
    })
}

pub fn validate_catalog(catalog: &Catalog) -> Result<(), CatalogError> {
    catalog.iter().try_for_each(validate)
}
