//! Fleetfin period result reporter
//!
//! Prints the monthly income, expense and net result of a branch as JSON.
//!
//! Usage: fleetfin-reporter --branch <UUID> --month 3 --year 2024 [--cost-center <UUID>] [--pretty]

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use fleetfin_core::financial::{PeriodQuery, PeriodResultAggregator};
use fleetfin_db::{BranchRepository, CostCenterRepository, FinancialTransactionRepository, connect};
use fleetfin_shared::config::LoggingConfig;
use fleetfin_shared::types::{BranchId, CostCenterId};
use fleetfin_shared::{AppConfig, AppError, AppResult};

#[derive(Debug, Parser)]
#[command(
    name = "fleetfin-reporter",
    version,
    about = "Monthly financial result of a branch"
)]
struct Cli {
    /// Branch ID
    #[arg(long)]
    branch: BranchId,

    /// Month (1-12)
    #[arg(long)]
    month: u32,

    /// Calendar year
    #[arg(long)]
    year: i32,

    /// Restrict totals to one cost center (disables breakdowns)
    #[arg(long)]
    cost_center: Option<CostCenterId>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn query(&self) -> PeriodQuery {
        PeriodQuery {
            branch_id: self.branch,
            month: self.month,
            year: self.year,
            cost_center_id: self.cost_center,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().map_err(AppError::from);

    let logging = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    init_tracing(&logging)?;

    let outcome = match config {
        Ok(config) => run(&cli, &config).await,
        Err(err) => Err(err),
    };

    match outcome {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!(
                error_code = err.error_code(),
                status = err.status_code(),
                error = %err,
                "Period result failed"
            );
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&logging.filter))?;

    let fmt = if logging.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry().with(filter).with(fmt).try_init()?;
    Ok(())
}

async fn run(cli: &Cli, config: &AppConfig) -> AppResult<String> {
    let timezone = config.reporting.timezone()?;

    let db = connect(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!(timezone = %timezone, "Connected to database");

    let aggregator = PeriodResultAggregator::new(
        FinancialTransactionRepository::new(db.clone()),
        BranchRepository::new(db.clone()),
        CostCenterRepository::new(db),
    )
    .with_timezone(timezone);

    let result = aggregator.result_by_period(cli.query()).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };
    output.map_err(|e| AppError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_query_arguments() {
        let branch = BranchId::new();
        let cli = Cli::try_parse_from([
            "fleetfin-reporter",
            "--branch",
            &branch.to_string(),
            "--month",
            "2",
            "--year",
            "2024",
        ])
        .unwrap();

        let query = cli.query();
        assert_eq!(query.branch_id, branch);
        assert_eq!(query.month, 2);
        assert_eq!(query.year, 2024);
        assert!(query.cost_center_id.is_none());
        assert!(!cli.pretty);
    }

    #[test]
    fn test_parse_cost_center_and_pretty() {
        let cost_center = CostCenterId::new();
        let cli = Cli::try_parse_from([
            "fleetfin-reporter",
            "--branch",
            &BranchId::new().to_string(),
            "--month",
            "12",
            "--year",
            "2023",
            "--cost-center",
            &cost_center.to_string(),
            "--pretty",
        ])
        .unwrap();

        assert_eq!(cli.query().cost_center_id, Some(cost_center));
        assert!(cli.pretty);
    }

    #[rstest]
    #[case(&["--branch", "not-a-uuid", "--month", "1", "--year", "2024"])]
    #[case(&["--month", "1", "--year", "2024"])]
    #[case(&["--branch", "0190c8a4-2f6e-7a1b-9c3d-4e5f6a7b8c9d", "--month", "x", "--year", "2024"])]
    fn test_rejects_malformed_arguments(#[case] args: &[&str]) {
        let argv = std::iter::once("fleetfin-reporter").chain(args.iter().copied());
        assert!(Cli::try_parse_from(argv).is_err());
    }
}
