// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod replay;

use clap::Parser;
use futures::StreamExt;
use maxcheck_harness::{
    ContractVerifier, ExpectationRow, ScenarioError, ScenarioOutcome, TransportError,
    expectation_table,
};
use replay::ReplayTransport;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// MAXCheck Runner - drives the visitor scan contract scenarios
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory of recorded response fixtures to replay
    #[arg(short, long, default_value = "crates/runner/fixtures")]
    fixtures: PathBuf,

    /// Upper bound on concurrently outstanding scenarios
    #[arg(short, long, default_value_t = 4)]
    concurrency: usize,

    /// Per-scenario deadline in seconds
    #[arg(short, long, default_value_t = 10)]
    timeout_secs: u64,
}

/// Runs one scenario on a blocking worker under a deadline.
///
/// Scenarios share no mutable state, so any number of them may be in
/// flight at once; the caller bounds how many. A deadline expiry is a
/// transport failure, never a contract violation.
async fn run_scenario_with_deadline(
    verifier: Arc<ContractVerifier<ReplayTransport>>,
    row: ExpectationRow,
    timeout_secs: u64,
) -> ScenarioOutcome {
    let label: &'static str = row.label;
    let barcode: &'static str = row.barcode;

    let handle = tokio::task::spawn_blocking(move || verifier.run_scenario(&row));
    let result: Result<(), ScenarioError> =
        match tokio::time::timeout(Duration::from_secs(timeout_secs), handle).await {
            Err(_) => Err(ScenarioError::Transport {
                barcode: barcode.to_string(),
                error: TransportError::TimedOut { timeout_secs },
            }),
            Ok(Err(join_error)) => Err(ScenarioError::Transport {
                barcode: barcode.to_string(),
                error: TransportError::Exception {
                    message: join_error.to_string(),
                },
            }),
            Ok(Ok(result)) => result,
        };

    ScenarioOutcome {
        label,
        barcode,
        result,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!(
        fixtures = %args.fixtures.display(),
        concurrency = args.concurrency,
        "Initializing MAXCheck runner"
    );

    let verifier: Arc<ContractVerifier<ReplayTransport>> =
        Arc::new(ContractVerifier::new(ReplayTransport::new(args.fixtures)));

    let outcomes: Vec<ScenarioOutcome> =
        futures::stream::iter(expectation_table().into_iter().map(|row| {
            run_scenario_with_deadline(Arc::clone(&verifier), row, args.timeout_secs)
        }))
        .buffer_unordered(args.concurrency.max(1))
        .collect()
        .await;

    let mut failed: usize = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(()) => info!(scenario = outcome.label, barcode = outcome.barcode, "PASS"),
            Err(e) => {
                failed += 1;
                error!(
                    scenario = outcome.label,
                    category = e.category(),
                    "FAIL: {e}"
                );
            }
        }
    }

    info!(
        total = outcomes.len(),
        passed = outcomes.len() - failed,
        failed = failed,
        "Verification complete"
    );

    if failed > 0 {
        return Err(format!("{failed} of {} scenarios failed", outcomes.len()).into());
    }
    Ok(())
}
