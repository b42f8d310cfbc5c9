//! Core types for asset-chain diagnostics
//!
//! Structured error records, per-case outcomes, ground-truth fixtures and
//! request descriptors shared by the validator, the case catalog and the
//! diagnostic suite.

use serde::{Deserialize, Serialize};

// ============================================================================
// Validation Errors
// ============================================================================

/// Classification of a single diagnostic finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The upstream API explicitly reported a failure
    #[serde(rename = "rpc error")]
    RpcError,
    /// A field was present but had the wrong type or value
    #[serde(rename = "incorrect data")]
    IncorrectData,
    /// Transport or parse fault, or an unexpected fault during a case
    #[serde(rename = "exception")]
    Exception,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RpcError => write!(f, "rpc error"),
            Self::IncorrectData => write!(f, "incorrect data"),
            Self::Exception => write!(f, "exception"),
        }
    }
}

/// One structured finding produced while checking an asset block
///
/// `field` is non-empty only for `IncorrectData`, where it names exactly one
/// asset-block field (or a structural pseudo-field such as
/// `asset_chain.length`). `mint_block_hash` is empty for faults that cannot
/// be tied to a specific asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mint_block_hash: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub field: String,
    pub message: String,
}

impl ValidationError {
    /// Upstream reported failure for the asset identified by `mint_block_hash`
    pub fn rpc_error(mint_block_hash: &str, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::RpcError,
            mint_block_hash: mint_block_hash.to_string(),
            field: String::new(),
            message: message.into(),
        }
    }

    /// Wrong type or value in one named field
    pub fn incorrect_data(
        mint_block_hash: &str,
        field: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: ErrorKind::IncorrectData,
            mint_block_hash: mint_block_hash.to_string(),
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Fault not attributable to a specific asset
    pub fn exception(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Exception,
            mint_block_hash: String::new(),
            field: String::new(),
            message: message.into(),
        }
    }

    /// Transport or parse fault while fetching one asset's data
    pub fn exception_for(mint_block_hash: &str, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Exception,
            mint_block_hash: mint_block_hash.to_string(),
            field: String::new(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.field.is_empty() {
            write!(f, "[{}] {}", self.kind, self.message)
        } else {
            write!(f, "[{}] {}: {}", self.kind, self.field, self.message)
        }
    }
}

// ============================================================================
// Diagnostic Outcome
// ============================================================================

/// Result of one diagnostic case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

impl DiagnosticOutcome {
    /// Build an outcome from accumulated errors; success iff none
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            success: errors.is_empty(),
            errors,
        }
    }
}

// ============================================================================
// Ground Truth Fixtures
// ============================================================================

/// Hand-verified expected state of one asset block
///
/// Compile-time data; never mutated at runtime. `verified: false` marks the
/// fixtures whose expected hashes were recorded without independent manual
/// verification; they are kept verbatim rather than re-derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedAssetState {
    pub mint_block_hash: &'static str,
    pub block_hash: &'static str,
    pub account: &'static str,
    pub owner: &'static str,
    pub locked: bool,
    pub verified: bool,
}

// ============================================================================
// Request Descriptors
// ============================================================================

/// Queryable endpoints of the asset-chain API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Current frontier block of an asset's chain
    AssetFrontier,
    /// Full chain from mint to frontier
    AssetChain,
    /// Block at a given chain position
    AssetAtHeight,
}

impl Endpoint {
    /// URL path segment for this endpoint
    pub fn path(&self) -> &'static str {
        match self {
            Self::AssetFrontier => "get_asset_frontier",
            Self::AssetChain => "get_asset_chain",
            Self::AssetAtHeight => "get_asset_at_height",
        }
    }
}

/// One GET request against the asset-chain API
///
/// `height` is meaningful only for [`Endpoint::AssetAtHeight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub issuer: &'static str,
    pub mint_block_hash: &'static str,
    pub height: Option<u64>,
}
