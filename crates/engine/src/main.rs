//! AD&D 2e Engine - Main entry point.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use add2e_engine::cli::Cli;
use add2e_engine::infrastructure::{random::SystemRandom, settings::load_rules_config};
use add2e_engine::App;

fn main() -> anyhow::Result<()> {
    // Load environment from repo root so the binary behaves the same from any crate directory.
    load_dotenv_from_repo_root();

    // Initialize logging. Stdout carries the JSON output, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "add2e_engine=info,add2e_shared=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = load_rules_config(cli.config.as_deref())?;
    tracing::debug!(
        use_exceptional_strength = config.use_exceptional_strength,
        base_hit_points = config.base_hit_points,
        "Rules configuration"
    );

    let app = App::new(config, Arc::new(SystemRandom::new()));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    cli.command
        .execute(&app, &mut stdin.lock(), &mut stdout.lock())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
