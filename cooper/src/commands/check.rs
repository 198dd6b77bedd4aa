use std::path::PathBuf;

use clap::Args;
use cooper_manifest::CooperToml;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to cooper.toml (defaults to ./cooper.toml)
    #[arg(short, long, default_value = "cooper.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let cooper_toml = CooperToml::open(&self.config).unwrap_or_exit();
        let manifest = cooper_toml.manifest();

        println!("✓ {} is valid\n", self.config.display());

        println!("  extension: {}", manifest.generator.extension);
        if let Some(base_dir) = &manifest.generator.base_dir {
            println!("  base_dir: {}", base_dir.display());
        }

        let count = manifest.generator.targets.len();
        println!(
            "  {} target{}:",
            count,
            if count == 1 { "" } else { "s" }
        );
        for target in &manifest.generator.targets {
            println!(
                "    {} ({})",
                target.path(),
                manifest.export_type_for(target)
            );
        }

        Ok(())
    }
}
