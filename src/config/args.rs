use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "user-intake")]
#[command(about = "Validate and normalize a user registration payload")]
pub struct CliConfig {
    /// Payload file, `-` or nothing reads stdin
    pub input: Option<PathBuf>,

    /// Write the normalized JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Dump internal field names (full_name) instead of aliases (fullName)
    #[arg(long)]
    pub by_name: bool,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn by_alias(&self) -> bool {
        !self.by_name
    }

    fn pretty(&self) -> bool {
        self.pretty
    }

    fn output_path(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(output) = &self.output {
            validation::validate_path("output", &output.to_string_lossy())?;
        }
        Ok(())
    }
}
