//! Diagnostic suite orchestration
//!
//! Owns the run: one shared chain fetch up front, then the case catalog
//! executed strictly sequentially, each case's own requests overlapping
//! internally. Cases are independent failure domains; only an invalid base
//! address can fail a run before it starts.

use crate::catalog::{case_catalog, Check, SHARED_CHAIN_MINT, SHARED_CHAIN_REQUEST};
use crate::client::{AssetChainApi, HttpAssetChainApi};
use crate::report::Report;
use crate::runner::{run_case, ProgressSink};
use crate::types::{ExpectedAssetState, ValidationError};
use crate::validator::validate_asset_block;
use anyhow::Result;
use futures::future::join_all;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

// ============================================================================
// Shared Chain Fetch
// ============================================================================

/// Response of the one chain fetch performed during suite setup.
///
/// A failed fetch is captured, not raised; dependent cases receive the
/// captured fault as ordinary invalid input and report it without retrying.
#[derive(Debug, Clone)]
pub struct SharedChain {
    pub mint_block_hash: &'static str,
    response: Result<Value, ValidationError>,
}

impl SharedChain {
    pub fn fetched(response: Value) -> Self {
        Self {
            mint_block_hash: SHARED_CHAIN_MINT,
            response: Ok(response),
        }
    }

    pub fn failed(error: ValidationError) -> Self {
        Self {
            mint_block_hash: SHARED_CHAIN_MINT,
            response: Err(error),
        }
    }

    /// The chain's block sequence, or the single error standing in for it.
    fn chain(&self) -> Result<&[Value], ValidationError> {
        let response = match &self.response {
            Ok(response) => response,
            Err(captured) => return Err(captured.clone()),
        };
        if let Some(upstream) = response.get("error") {
            let message = match upstream {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            return Err(ValidationError::rpc_error(self.mint_block_hash, message));
        }
        response
            .get("asset_chain")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                ValidationError::exception_for(
                    self.mint_block_hash,
                    "asset chain response has no asset_chain array",
                )
            })
    }

    /// Exact-length structural assertion.
    fn check_length(&self, expected_len: usize) -> Vec<ValidationError> {
        match self.chain() {
            Err(error) => vec![error],
            Ok(chain) if chain.len() == expected_len => Vec::new(),
            Ok(chain) => vec![ValidationError::incorrect_data(
                self.mint_block_hash,
                "asset_chain.length",
                format!(
                    "Expected NFT with mint block hash: {} to have an asset chain length \
                     of {}, got: {}. Atomic swap blocks with receive height set to less \
                     than two should be ignored.",
                    self.mint_block_hash,
                    expected_len,
                    chain.len()
                ),
            )],
        }
    }

    /// Validate the chain's last block against expected frontier state.
    fn check_frontier(&self, expected: &ExpectedAssetState) -> Vec<ValidationError> {
        match self.chain() {
            Err(error) => vec![error],
            Ok(chain) => match chain.last() {
                Some(frontier) => validate_asset_block(frontier, expected),
                None => vec![ValidationError::exception_for(
                    self.mint_block_hash,
                    "asset chain is empty",
                )],
            },
        }
    }
}

/// Perform the one shared chain fetch, capturing any failure.
pub async fn fetch_shared_chain(api: &dyn AssetChainApi) -> SharedChain {
    match api.fetch(&SHARED_CHAIN_REQUEST).await {
        Ok(response) => SharedChain::fetched(response),
        Err(error) => {
            debug!(%error, "shared chain fetch failed; dependent cases will report it");
            SharedChain::failed(ValidationError::exception_for(
                SHARED_CHAIN_MINT,
                error.to_string(),
            ))
        }
    }
}

// ============================================================================
// Case Execution
// ============================================================================

/// Evaluate one check. Block checks fetch fresh data; shared checks reuse
/// the setup fetch. Transport and parse faults become `exception` entries,
/// so this never raises.
async fn evaluate_check(
    api: &dyn AssetChainApi,
    shared: &SharedChain,
    check: &Check,
) -> Vec<ValidationError> {
    match check {
        Check::Block { request, expected } => match api.fetch(request).await {
            Ok(block) => validate_asset_block(&block, expected),
            Err(error) => vec![ValidationError::exception_for(
                request.mint_block_hash,
                error.to_string(),
            )],
        },
        Check::SharedChainLength { expected_len } => shared.check_length(*expected_len),
        Check::SharedChainFrontier { expected } => shared.check_frontier(expected),
    }
}

/// Run every check of one case. Checks with no causal dependency run
/// concurrently; errors concatenate in check declaration order. A fault in
/// one check never prevents the others from completing.
async fn execute_case(
    api: &dyn AssetChainApi,
    shared: &SharedChain,
    checks: &[Check],
) -> Result<Vec<ValidationError>> {
    let results = join_all(
        checks
            .iter()
            .map(|check| evaluate_check(api, shared, check)),
    )
    .await;
    Ok(results.into_iter().flatten().collect())
}

// ============================================================================
// Suite
// ============================================================================

/// Runs the full case catalog against one API
pub struct DiagnosticSuite<'a> {
    api: &'a dyn AssetChainApi,
}

impl<'a> DiagnosticSuite<'a> {
    pub fn new(api: &'a dyn AssetChainApi) -> Self {
        Self { api }
    }

    /// Execute the catalog and return the complete report: one outcome per
    /// registered case, even when the shared setup fetch failed.
    pub async fn diagnose(&self, sink: &mut dyn ProgressSink) -> Report {
        let catalog = case_catalog();
        info!(cases = catalog.len(), "starting diagnosis");

        let shared = fetch_shared_chain(self.api).await;

        let mut report = Report::new();
        for case in &catalog {
            run_case(
                case.name,
                execute_case(self.api, &shared, &case.checks),
                &mut report,
                sink,
            )
            .await;
        }

        info!(
            passed = report.len() - report.failed_cases().len(),
            failed = report.failed_cases().len(),
            "diagnosis finished"
        );
        report
    }
}

/// Diagnose the API at `base`. The only fault that propagates is an invalid
/// base address before any case has started.
pub async fn diagnose_target(
    base: &str,
    timeout: Duration,
    sink: &mut dyn ProgressSink,
) -> Result<Report> {
    let api = HttpAssetChainApi::new(base, timeout)?;
    Ok(DiagnosticSuite::new(&api).diagnose(sink).await)
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
