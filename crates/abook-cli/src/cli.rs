use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "abook", about = "Address Book API server", version)]
pub struct Cli {
    /// Address to listen on (overrides the config file).
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,

    /// Path to a TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bind_override() {
        let cli = Cli::parse_from(["abook", "--bind", "0.0.0.0:8080"]);
        assert_eq!(cli.bind, Some("0.0.0.0:8080".parse().unwrap()));
        assert!(cli.config.is_none());
    }

    #[test]
    fn defaults_to_no_overrides() {
        let cli = Cli::parse_from(["abook"]);
        assert!(cli.bind.is_none());
        assert!(cli.config.is_none());
    }
}
