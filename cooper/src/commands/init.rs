use std::path::PathBuf;

use clap::Args;
use cooper_core::{File, WriteResult};
use cooper_manifest::CooperToml;
use eyre::{Context, Result};

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the manifest (defaults to ./cooper.toml)
    #[arg(short, long, default_value = "cooper.toml")]
    pub config: PathBuf,

    /// Barrel file extension, including the leading dot
    #[arg(short, long, default_value = ".ts")]
    pub extension: String,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let starter = CooperToml::starter(&self.extension);
        let file = File::if_missing(&self.config, starter);

        match file.write().wrap_err("Failed to write cooper.toml")? {
            WriteResult::Written => {
                println!("Created {}", self.config.display());
                println!("Add your target directories to get started");
            }
            WriteResult::Skipped => {
                println!("{} already exists, leaving it untouched", self.config.display());
            }
        }

        Ok(())
    }
}
