use std::path::PathBuf;

use clap::Args;
use cooper_manifest::CooperToml;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to cooper.toml (defaults to ./cooper.toml)
    #[arg(short, long, default_value = "cooper.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let cooper_toml = CooperToml::open(&self.config).unwrap_or_exit();
        let manifest = cooper_toml.manifest();

        if manifest.generator.targets.is_empty() {
            println!("No targets defined");
            return Ok(());
        }

        println!("Targets:");
        for target in &manifest.generator.targets {
            println!(
                "  {} ({})",
                target.path(),
                manifest.export_type_for(target)
            );
        }

        Ok(())
    }
}
