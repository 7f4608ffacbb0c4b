//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "hortus", author, version, about = "Notion-backed blog server")]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "HORTUS_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute (defaults to `serve`).
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the blog server.
    Serve {
        /// Host address to bind to (overrides the config file).
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides the config file).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print version information.
    Version,

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Print the resolved configuration (secrets redacted).
    Show,

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to the XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_default() {
        let args = CliArgs::parse_from(["hortus"]);
        assert!(args.config.is_none());
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_cli_args_verbose_and_quiet() {
        let args = CliArgs::parse_from(["hortus", "--verbose"]);
        assert!(args.verbose);

        let args = CliArgs::parse_from(["hortus", "--quiet"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_args_config_flag() {
        let args = CliArgs::parse_from(["hortus", "--config", "/etc/hortus.toml"]);
        assert_eq!(args.config, Some("/etc/hortus.toml".to_string()));
    }

    #[test]
    fn test_serve_command_defaults() {
        let args = CliArgs::parse_from(["hortus", "serve"]);
        match args.command {
            Some(Command::Serve { host, port }) => {
                assert!(host.is_none());
                assert!(port.is_none());
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_serve_command_overrides() {
        let args = CliArgs::parse_from(["hortus", "serve", "--host", "0.0.0.0", "--port", "8080"]);
        match args.command {
            Some(Command::Serve { host, port }) => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_version_command() {
        let args = CliArgs::parse_from(["hortus", "version"]);
        assert!(matches!(args.command, Some(Command::Version)));
    }

    #[test]
    fn test_config_path_command() {
        let args = CliArgs::parse_from(["hortus", "config", "path"]);
        match args.command {
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Path,
            })) => {}
            _ => panic!("Expected Config Path command"),
        }
    }

    #[test]
    fn test_config_init_force() {
        let args = CliArgs::parse_from(["hortus", "config", "init", "--force"]);
        match args.command {
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Init { file, force },
            })) => {
                assert!(file.is_none());
                assert!(force);
            }
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_config_show_command() {
        let args = CliArgs::parse_from(["hortus", "config", "show"]);
        match args.command {
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Show,
            })) => {}
            _ => panic!("Expected Config Show command"),
        }
    }
}
