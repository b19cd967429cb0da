use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::scheduler::SelectionPolicy;

#[derive(Debug, Clone, Parser)]
#[command(name = "vet-schedule")]
#[command(about = "Schedule a clinic day and price every appointment")]
pub struct CliConfig {
    #[arg(long, help = "TOML clinic configuration (defaults to the standard day)")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, help = "Override the vet/tech selection policy")]
    pub policy: Option<SelectionPolicy>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Append run KPIs to the text report")]
    pub summary: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = CliConfig::parse_from(["vet-schedule"]);
        assert!(cli.config.is_none());
        assert!(cli.policy.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.summary);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_all_flags() {
        let cli = CliConfig::parse_from([
            "vet-schedule",
            "--config",
            "clinic.toml",
            "--policy",
            "exhaustive",
            "--format",
            "json",
            "--summary",
            "--verbose",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("clinic.toml")));
        assert_eq!(cli.policy, Some(SelectionPolicy::Exhaustive));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.summary);
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let result = CliConfig::try_parse_from(["vet-schedule", "--policy", "best"]);
        assert!(result.is_err());
    }
}
