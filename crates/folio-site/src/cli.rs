//! Command line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "folio", author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true, env = "FOLIO_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Log level, overrides the configured one
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Directory of locale files, overrides the configured one
    #[arg(long, global = true)]
    pub locales_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// What to do once translations are loaded
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Resolve one dotted key
    Resolve {
        /// Key such as `navigation.links.contact`
        key: String,
        /// Locale to resolve in instead of the default
        #[arg(short = 'L', long)]
        locale: Option<String>,
        /// Text printed when the key does not resolve
        #[arg(short, long)]
        fallback: Option<String>,
    },
    /// Print the navigation bar labels
    Nav {
        /// Locale to render in instead of the default
        #[arg(short = 'L', long)]
        locale: Option<String>,
    },
    /// Print the fixed labels of each page section
    Sections {
        /// Locale to render in instead of the default
        #[arg(short = 'L', long)]
        locale: Option<String>,
    },
    /// List available locales
    Locales,
    /// Report keys missing from each locale
    Check {
        /// Locale the others are compared with (default: the configured default)
        #[arg(short, long)]
        reference: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let args = Args::try_parse_from([
            "folio", "resolve", "nav.home", "-L", "fr", "--fallback", "N/A",
        ])
        .unwrap();
        assert_eq!(
            args.command,
            Command::Resolve {
                key: "nav.home".to_string(),
                locale: Some("fr".to_string()),
                fallback: Some("N/A".to_string()),
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["folio", "check", "--locales-dir", "content", "-l", "debug"])
            .unwrap();
        assert_eq!(args.locales_dir, Some(PathBuf::from("content")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.command, Command::Check { reference: None });
    }
}
