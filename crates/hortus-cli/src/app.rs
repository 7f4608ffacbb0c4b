//! Command dispatch and serve wiring.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use hortus_notion::{NotionClient, NotionConfig};
use hortus_web::AppState;

use crate::cli::{CliArgs, Command, ConfigAction};
use crate::config::HortusConfig;
use crate::error::Result;

/// Initialise tracing-based logging.
///
/// Uses `RUST_LOG` if set, otherwise defaults based on verbosity flags.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Ignore error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Run the CLI with the given arguments.
pub async fn run(args: CliArgs) -> Result<()> {
    init_logging(args.verbose, args.quiet);

    let command = args.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    });

    match command {
        Command::Serve { host, port } => {
            let config = HortusConfig::load(args.config.as_deref())?;
            serve(config, host, port).await
        }
        Command::Version => {
            println!("hortus {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Config(config_cmd) => {
            handle_config(args.config.as_deref(), config_cmd.command)
        }
    }
}

/// Start the blog server from the resolved configuration.
async fn serve(config: HortusConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    let notion = notion_config(&config)?;
    let client = NotionClient::new(notion);
    let state = AppState::new(Arc::new(client), config.site_config())?;

    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;

    info!(site = %config.site.name, "starting hortus");
    hortus_web::serve(addr, state).await?;
    Ok(())
}

/// Validate the Notion section and turn it into client configuration.
fn notion_config(config: &HortusConfig) -> Result<NotionConfig> {
    let notion = &config.notion;
    let require = |value: &str, what: &str| -> Result<()> {
        if value.is_empty() {
            return Err(hortus_core::Error::config(format!("{what} is not set")).into());
        }
        Ok(())
    };
    require(&notion.api_token, "notion.api_token (or HORTUS_NOTION_TOKEN)")?;
    require(&notion.post_database_id, "notion.post_database_id")?;
    require(&notion.home_page_id, "notion.home_page_id")?;

    let mut built = NotionConfig::new(
        &notion.api_token,
        &notion.post_database_id,
        &notion.home_page_id,
    )
    .with_author(&config.site.author, &config.site.author_image);
    if let Some(base) = &notion.api_base_url {
        built = built.with_base_url(base);
    }
    Ok(built)
}

/// Handle `hortus config ...` subcommands.
fn handle_config(config_flag: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => {
            match HortusConfig::resolve_config_path(config_flag) {
                Some(path) => println!("{}", path.display()),
                None => println!("(no config path could be determined)"),
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = HortusConfig::load(config_flag)?;
            println!("{}", config.redacted().to_toml_string()?);
            Ok(())
        }
        ConfigAction::Init { file, force } => {
            let path = file
                .map(std::path::PathBuf::from)
                .or_else(|| HortusConfig::resolve_config_path(config_flag))
                .ok_or_else(|| hortus_core::Error::config("no config path to write to"))?;

            if path.exists() && !force {
                return Err(hortus_core::Error::config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ))
                .into());
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, HortusConfig::default().to_toml_string()?)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_config() -> HortusConfig {
        let mut config = HortusConfig::default();
        config.notion.api_token = "token".to_string();
        config.notion.post_database_id = "db".to_string();
        config.notion.home_page_id = "home".to_string();
        config
    }

    #[test]
    fn test_notion_config_requires_token() {
        let mut config = complete_config();
        config.notion.api_token = String::new();
        let err = notion_config(&config).unwrap_err();
        assert!(err.to_string().contains("api_token"));
    }

    #[test]
    fn test_notion_config_requires_database_and_home() {
        let mut config = complete_config();
        config.notion.post_database_id = String::new();
        assert!(notion_config(&config).is_err());

        let mut config = complete_config();
        config.notion.home_page_id = String::new();
        assert!(notion_config(&config).is_err());
    }

    #[test]
    fn test_notion_config_carries_author_and_base_url() {
        let mut config = complete_config();
        config.site.author = "A. Writer".to_string();
        config.notion.api_base_url = Some("http://localhost:4000".to_string());

        let notion = notion_config(&config).unwrap();
        assert_eq!(notion.author, "A. Writer");
        assert_eq!(notion.api_base_url, "http://localhost:4000");
    }

    #[test]
    fn test_config_init_then_show() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let flag = path.to_str().unwrap();

        handle_config(
            Some(flag),
            ConfigAction::Init {
                file: None,
                force: false,
            },
        )
        .unwrap();
        assert!(path.exists());

        // A second init without --force refuses to overwrite.
        let err = handle_config(
            Some(flag),
            ConfigAction::Init {
                file: None,
                force: false,
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("already exists"));

        handle_config(Some(flag), ConfigAction::Show).unwrap();
    }
}
