//! Generate command - writes `<stem>_enums.rs` companions next to their sources.

use super::{load_config, resolve_inputs};
use crate::cli::{Cli, GenerateArgs};
use enumforge_core::error::Result;
use enumforge_core::tooling::{Configuration, EnumGenerator, GenerationReport};
use tracing::{debug, info};

/// Runs generation for the configured `filenames` with default settings.
pub fn run_default(cli: &Cli) -> Result<()> {
    run(cli, GenerateArgs::default()).map(|_| ())
}

/// Runs the generate command.
pub fn run(cli: &Cli, args: GenerateArgs) -> Result<Option<GenerationReport>> {
    let mut config = load_config(cli)?;
    apply_overrides(&mut config, cli, &args)?;

    let inputs = resolve_inputs(&args.files, &config)?;
    let verbose = config.verbose;
    let generator = EnumGenerator::new(config);

    if args.dry_run {
        for path in generator.collect_sources(&inputs)? {
            let rendered = generator.render_file(&path)?;
            println!(
                "{} -> {} ({} enum(s), {} bytes)",
                rendered.source.display(),
                rendered.output_path.display(),
                rendered.enums.len(),
                rendered.content.len()
            );
        }
        info!("Dry run complete, nothing written");
        return Ok(None);
    }

    let report = generator.generate_all(&inputs)?;
    for file in &report.files {
        if verbose {
            println!(
                "{} -> {} ({} enum(s), {} bytes)",
                file.source.display(),
                file.path.display(),
                file.enum_count,
                file.bytes_written
            );
        }
        debug!("Generated {:?}", file.path);
    }
    info!(
        "Generated {} file(s) for {} enum type(s)",
        report.files.len(),
        report.enums_processed
    );
    Ok(Some(report))
}

fn apply_overrides(config: &mut Configuration, cli: &Cli, args: &GenerateArgs) -> Result<()> {
    config.failfast |= args.failfast;
    config.insensitive |= args.insensitive;
    config.verbose |= cli.verbose > 0;
    if let Some(suffix) = &args.suffix {
        Configuration::validate_suffix(suffix)?;
        config.output_suffix = suffix.clone();
    }
    Ok(())
}
