use std::path::PathBuf;

use clap::Args;
use cooper_codegen::{Generator, TargetStatus};
use cooper_manifest::CooperToml;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to cooper.toml (defaults to ./cooper.toml)
    #[arg(short, long, default_value = "cooper.toml")]
    pub config: PathBuf,

    /// Preview generated barrels without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let cooper_toml = CooperToml::open(&self.config).unwrap_or_exit();
        let mut generator = Generator::new(cooper_toml.manifest());

        if self.dry_run {
            return Self::run_preview(&generator);
        }

        let report = generator.generate()?;

        for outcome in &report.outcomes {
            match &outcome.status {
                TargetStatus::Written { entries } => {
                    println!(
                        "  wrote {} ({} export{})",
                        outcome.directory.display(),
                        entries,
                        if *entries == 1 { "" } else { "s" }
                    );
                }
                TargetStatus::Unchanged => {
                    println!("  unchanged {}", outcome.directory.display());
                }
                TargetStatus::Failed(err) => {
                    eprintln!("error: {err}");
                }
            }
        }

        println!(
            "\n{} written, {} unchanged",
            report.written_count(),
            report.unchanged_count()
        );

        if report.has_failures() {
            std::process::exit(1);
        }

        Ok(())
    }

    fn run_preview(generator: &Generator) -> Result<()> {
        let files = generator.preview()?;

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} barrels would be written", files.len());

        Ok(())
    }
}
