pub mod generate;
pub mod init;
pub mod outline;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use contractr_common::contract::ContractConfig;
use tracing::warn;

const DEFAULT_OUTPUT: &str = "Contract.md";
const DEFAULT_CONTRACT_FILE: &str = "contract.toml";

#[derive(Parser)]
#[command(name = "contractr", version)]
#[command(about = "Generates freelance development contracts.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print less; repeat to hide warnings as well
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the version banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the contract to Markdown and write it to disk
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Write a sample contract parameters file
    #[command(alias = "i")]
    Init(InitArgs),
    /// Show the section layout of the contract
    #[command(alias = "o")]
    Outline(OutlineArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Contract parameters (TOML); the built-in sample is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write the rendered contract
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Do not echo the rendered contract to stdout
    #[arg(long)]
    pub no_stdout: bool,
}

#[derive(Args)]
pub struct InitArgs {
    /// File to create
    #[arg(default_value = DEFAULT_CONTRACT_FILE)]
    pub path: PathBuf,

    /// Overwrite the file if it already exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct OutlineArgs {
    /// Contract parameters (TOML); the built-in sample is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn load_contract(path: Option<&Path>) -> anyhow::Result<ContractConfig> {
    match path {
        Some(path) => Ok(ContractConfig::load(path)?),
        None => {
            warn!("No contract file given, using the built-in sample (see `contractr init`)");
            Ok(ContractConfig::sample())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_defaults() {
        let cli = CommandLine::try_parse_from(["contractr", "generate"]).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(args.config.is_none());
        assert!(!args.no_stdout);
        assert_eq!(cli.quiet, 0);
    }

    #[test]
    fn aliases_and_global_flags() {
        let cli = CommandLine::try_parse_from(["contractr", "g", "-qq", "-c", "deal.toml", "--no-stdout"])
            .unwrap();
        assert_eq!(cli.quiet, 2);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.config, Some(PathBuf::from("deal.toml")));
        assert!(args.no_stdout);

        let cli = CommandLine::try_parse_from(["contractr", "i", "--force"]).unwrap();
        let Commands::Init(args) = cli.command else {
            panic!("expected init");
        };
        assert_eq!(args.path, PathBuf::from(DEFAULT_CONTRACT_FILE));
        assert!(args.force);

        let cli = CommandLine::try_parse_from(["contractr", "--no-banner", "o"]).unwrap();
        assert!(cli.no_banner);
        assert!(matches!(cli.command, Commands::Outline(_)));
    }

    #[test]
    fn missing_config_falls_back_to_sample() {
        assert_eq!(load_contract(None).unwrap(), ContractConfig::sample());
    }

    #[test]
    fn given_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deal.toml");
        let mut contract = ContractConfig::sample();
        contract.project_type = String::from("mobile");
        std::fs::write(&path, contract.to_toml_string().unwrap()).unwrap();

        assert_eq!(load_contract(Some(&path)).unwrap(), contract);
    }

    #[test]
    fn unreadable_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_contract(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
