//! Environment doctor
//!
//! Runs the health check suite, classifies the host environment through the
//! desktop provider, and prints both. Exit code follows the report.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use strata::config::StrataConfig;
use strata::context::StrataContext;
use strata::health;
use strata::input::{ActionBindings, ActionBinding, KeyCode};
use strata::provider::DesktopProvider;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let report = health::run_all_checks();
    health::print_report(&report);

    let config = StrataConfig::load_from_env().unwrap_or_default();
    let bindings = ActionBindings::new().with_action(
        "confirm",
        ActionBinding::builder().keys(vec![KeyCode::Enter]).build(),
    );
    let context = StrataContext::new(Box::new(DesktopProvider::new()), bindings, config);

    let profile = context.profile();
    info!(
        device_type = ?profile.device_type,
        platform = ?profile.platform,
        input_mode = ?profile.input_mode,
        orientation = ?profile.orientation,
        "classified host environment"
    );
    println!("\n{:#?}", profile);

    std::process::exit(report.exit_code());
}
