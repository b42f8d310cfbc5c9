//! nft-doctor: diagnoses an NFT asset-chain indexing API against known
//! ledger histories.
//!
//! The doctor replays a fixed catalog of hand-verified mint/send/receive/
//! atomic-swap histories and asserts that the API's current answers match
//! ground truth. Cases are independent failure domains; every finding is a
//! structured [`types::ValidationError`] and a run always produces one
//! outcome per case.

pub mod catalog;
pub mod client;
pub mod config;
pub mod report;
pub mod runner;
pub mod suite;
pub mod types;
pub mod validator;

// Re-export key types for convenience
pub use catalog::{case_catalog, DiagnosticCase};
pub use client::{AssetChainApi, ClientError, HttpAssetChainApi};
pub use config::DoctorConfig;
pub use report::{Report, ReportFormat};
pub use runner::{run_case, LineBuffer, NoopSink, ProgressSink};
pub use suite::{diagnose_target, DiagnosticSuite};
pub use types::{
    ApiRequest, DiagnosticOutcome, Endpoint, ErrorKind, ExpectedAssetState, ValidationError,
};
pub use validator::validate_asset_block;
