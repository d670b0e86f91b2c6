use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "charinfo", version, about = "Browse Marvel characters in the terminal")]
pub struct Cli {
    /// Character id to show on startup
    #[arg(long)]
    pub id: Option<u32>,

    /// Config file (default: <config_dir>/charinfo/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch one character and print it as JSON
    Fetch {
        /// Character id
        id: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_runs_the_panel_without_id() {
        let cli = Cli::try_parse_from(["charinfo"]).unwrap();
        assert!(cli.id.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn id_flag_is_parsed() {
        let cli = Cli::try_parse_from(["charinfo", "--id", "1011334"]).unwrap();
        assert_eq!(cli.id, Some(1011334));
    }

    #[test]
    fn fetch_subcommand_takes_an_id() {
        let cli = Cli::try_parse_from(["charinfo", "fetch", "1011335"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Fetch { id: 1011335 })));
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        assert!(Cli::try_parse_from(["charinfo", "--id", "hulk"]).is_err());
    }
}
