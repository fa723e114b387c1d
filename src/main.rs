use std::path::PathBuf;
use std::time::Duration;

use ai_toolkit::api::InferenceClient;
use ai_toolkit::config::{Config, ConfigStore};
use ai_toolkit::logging::init_tracing;
use anyhow::{Context, Result};
use clap::Parser;

/// Terminal front end for an image captioning and text summarization
/// service.
#[derive(Parser, Debug)]
#[command(name = "ai-toolkit", version)]
#[command(about = "Caption images and summarize text with a remote inference service")]
struct Cli {
    /// Config file (default: <config dir>/ai-toolkit/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Inference service base URL, overrides `service.base_url`
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Page to open on start: /, /caption, /summarize or /about
    #[arg(long, value_name = "PATH")]
    page: Option<String>,

    /// Log file, overrides `logging.file`
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.base_url {
            config.service.base_url = url.clone();
        }
        if let Some(page) = &self.page {
            config.ui.start_page = page.clone();
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)?;
    let store = ConfigStore::new(config, path);
    store.update(|config| cli.apply(config))?;
    let config = store.get();

    let log_file = config.log_file();
    init_tracing(&config.logging.level, &log_file)
        .with_context(|| format!("Failed to open log file '{}'", log_file.display()))?;
    tracing::info!(
        config = %store.path().display(),
        base_url = %config.service.base_url,
        "Starting ai-toolkit v{}",
        env!("CARGO_PKG_VERSION")
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let client = InferenceClient::new(&config.service)?;

    ai_toolkit::ui::run(&config, client, runtime.handle()).context("Terminal UI failed")?;

    runtime.shutdown_timeout(Duration::from_millis(500));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "ai-toolkit",
            "--base-url",
            "http://10.0.0.2:9000",
            "--page",
            "/summarize",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.service.base_url, "http://10.0.0.2:9000");
        assert_eq!(config.ui.start_page, "/summarize");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn no_flags_keep_defaults() {
        let cli = Cli::parse_from(["ai-toolkit"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }
}
