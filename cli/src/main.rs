//! CLI for the Release Note Drafter.
//!
//! Compares two branches of a GitHub repository and prints a release note
//! listing the referenced issues and the committers to credit.

use clap::Parser;
use release_note_drafter::{
    load_settings, ConfigOverrides, ReleaseNote, Runner, RunnerConfig, RunnerError, Settings,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the GitHub token.
const TOKEN_ENV: &str = "GH_TOKEN";

/// Release Note Drafter - Draft a release note from the commits between two branches.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// (required) GitHub token to use in the API calls.
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    token: Option<String>,

    /// (required) Username owner of the repo.
    #[arg(long)]
    user: Option<String>,

    /// (required) Repo to use.
    #[arg(long)]
    repo: Option<String>,

    /// Branch holding the changes to release [default: staging].
    #[arg(long)]
    from: Option<String>,

    /// Branch being released into [default: master].
    #[arg(long)]
    to: Option<String>,

    /// Maximum concurrent issue lookups [default: 8].
    #[arg(long)]
    concurrency: Option<usize>,

    /// Seconds allowed for resolving all issues [default: 30].
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Path to a TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    install_crypto_provider();

    let args = Args::parse();

    match run(args).await {
        Ok(note) => {
            println!("{note}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Events are written to standard error so that standard output carries
/// only the release note. The level is taken from `RUST_LOG` and defaults
/// to "warn", which surfaces skipped commits and unresolved issues.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

/// Selects aws-lc-rs as the process-wide rustls crypto provider.
///
/// The dependency graph compiles in more than one provider, in which case
/// rustls cannot pick one on its own and the GitHub client would panic.
fn install_crypto_provider() {
    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        debug!("A rustls crypto provider was already installed, keeping it");
    }
}

/// Main execution logic.
async fn run(args: Args) -> Result<ReleaseNote, RunnerError> {
    let config = build_config(args)?;
    debug!(?config, "Resolved configuration");

    let runner = Runner::new(config)?;
    runner.run().await
}

/// Layers command line values over the optional settings file.
fn build_config(args: Args) -> Result<RunnerConfig, RunnerError> {
    let settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };

    // An empty `--token` falls back to the environment, like an absent one.
    let token = args
        .token
        .filter(|token| !token.is_empty())
        .or_else(|| std::env::var(TOKEN_ENV).ok());

    let overrides = ConfigOverrides {
        token,
        user: args.user,
        repo: args.repo,
        from: args.from,
        to: args.to,
        concurrency: args.concurrency,
        timeout_secs: args.timeout_secs,
    };

    Ok(RunnerConfig::resolve(overrides, settings)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use release_note_drafter::ConfigError;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("release-note-drafter").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn token_falls_back_to_environment() {
        temp_env::with_var("GH_TOKEN", Some("ghp_from_env"), || {
            let config = build_config(parse(&["--user", "acme", "--repo", "widgets"])).unwrap();

            assert_eq!(config.token(), "ghp_from_env");
            assert_eq!(config.from(), "staging");
            assert_eq!(config.to(), "master");
        });
    }

    #[test]
    fn flag_wins_over_environment_token() {
        temp_env::with_var("GH_TOKEN", Some("ghp_from_env"), || {
            let args = parse(&["--token", "ghp_flag", "--user", "acme", "--repo", "widgets"]);

            assert_eq!(build_config(args).unwrap().token(), "ghp_flag");
        });
    }

    #[test]
    fn empty_token_flag_falls_back_to_environment() {
        temp_env::with_var("GH_TOKEN", Some("ghp_from_env"), || {
            let args = parse(&["--token", "", "--user", "acme", "--repo", "widgets"]);

            assert_eq!(build_config(args).unwrap().token(), "ghp_from_env");
        });
    }

    #[tokio::test]
    async fn runner_builds_once_crypto_provider_is_installed() {
        install_crypto_provider();
        // A second call must not panic either.
        install_crypto_provider();

        let config = RunnerConfig::new("ghp_test", "acme", "widgets").unwrap();

        assert!(Runner::new(config).is_ok());
    }

    #[test]
    fn missing_values_are_reported_by_name() {
        temp_env::with_var_unset("GH_TOKEN", || {
            let error = build_config(parse(&["--user", "acme", "--repo", "widgets"])).unwrap_err();
            assert_eq!(error.to_string(), "`token` not set.");

            let error =
                build_config(parse(&["--token", "", "--user", "acme", "--repo", "widgets"]))
                    .unwrap_err();
            assert!(matches!(
                error,
                RunnerError::Config(ConfigError::MissingValue { name: "token" })
            ));
            assert_eq!(error.to_string(), "`token` not set.");

            let error = build_config(parse(&["--token", "t", "--repo", "widgets"])).unwrap_err();
            assert_eq!(error.to_string(), "`user` not set.");

            let error = build_config(parse(&["--token", "t", "--user", "acme"])).unwrap_err();
            assert_eq!(error.to_string(), "`repo` not set.");
        });
    }

    #[test]
    fn parses_branches_and_pool_limits() {
        let args = parse(&[
            "--token",
            "t",
            "--user",
            "acme",
            "--repo",
            "widgets",
            "--from",
            "develop",
            "--to",
            "main",
            "--concurrency",
            "2",
            "--timeout-secs",
            "5",
        ]);

        let config = build_config(args).unwrap();

        assert_eq!(config.from(), "develop");
        assert_eq!(config.to(), "main");
        assert_eq!(config.pool().concurrency(), 2);
        assert_eq!(config.pool().timeout().as_secs(), 5);
    }
}
