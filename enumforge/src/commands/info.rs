//! Info command - displays the enum types found in sources.

use super::{load_config, resolve_inputs};
use crate::cli::{Cli, InfoArgs, InfoFormat};
use enumforge_core::error::Result;
use enumforge_core::tooling::{EnumGenerator, EnumType, FileSource};
use serde_json::{Value, json};
use std::path::PathBuf;
use tracing::info;

/// Enum types found in one source file.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub path: PathBuf,
    pub enums: Vec<EnumType>,
}

/// Runs the info command.
pub fn run(cli: &Cli, args: InfoArgs) -> Result<()> {
    let sources = collect(cli, &args)?;
    info!("Found enum types in {} source file(s)", sources.len());

    match args.format {
        InfoFormat::Pretty => print!("{}", render_pretty(&sources)),
        InfoFormat::Json => println!("{}", serde_json::to_string_pretty(&render_json(&sources))?),
    }
    Ok(())
}

/// Scans the inputs named by `args` without generating anything.
pub fn collect(cli: &Cli, args: &InfoArgs) -> Result<Vec<SourceInfo>> {
    let config = load_config(cli)?;
    let inputs = resolve_inputs(&args.files, &config)?;
    let generator = EnumGenerator::new(config);

    generator
        .collect_sources(&inputs)?
        .into_iter()
        .map(|path| -> Result<SourceInfo> {
            let enums = generator.scan(&mut FileSource::new(&path))?;
            Ok(SourceInfo { path, enums })
        })
        .collect()
}

pub fn render_pretty(sources: &[SourceInfo]) -> String {
    let mut output = String::new();
    for source in sources {
        output.push_str(&format!("\n=== {} ===\n", source.path.display()));
        if source.enums.is_empty() {
            output.push_str("  (no enum types)\n");
        }
        for enum_type in &source.enums {
            let handlers = enum_type.config.handlers.enabled();
            output.push_str(&format!(
                "\n{} ({} as {})\n  wrapper:  {}\n  serde:    {}\n  handlers: {}\n  members:\n",
                enum_type.type_name,
                enum_type.underlying,
                enum_type.kind,
                enum_type.wrapper_name(),
                enum_type.config.serde_format,
                if handlers.is_empty() {
                    "none".to_string()
                } else {
                    handlers.join(", ")
                }
            ));
            for member in &enum_type.members {
                let mut line = format!("    {} = {} ({})", member.ident, member.literal, member.name());
                if member.aliases.len() > 1 {
                    line.push_str(&format!(" aliases: {}", member.aliases[1..].join(", ")));
                }
                if !member.valid {
                    line.push_str(" [invalid]");
                }
                output.push_str(&line);
                output.push('\n');
            }
        }
    }
    output
}

pub fn render_json(sources: &[SourceInfo]) -> Value {
    Value::Array(
        sources
            .iter()
            .map(|source| {
                json!({
                    "path": source.path.display().to_string(),
                    "enums": source.enums.iter().map(enum_json).collect::<Vec<_>>(),
                })
            })
            .collect(),
    )
}

fn enum_json(enum_type: &EnumType) -> Value {
    json!({
        "type": enum_type.type_name,
        "underlying": enum_type.underlying,
        "kind": enum_type.kind,
        "wrapper": enum_type.wrapper_name(),
        "serde": enum_type.config.serde_format,
        "handlers": enum_type.config.handlers.enabled(),
        "members": enum_type
            .members
            .iter()
            .map(|member| json!({
                "ident": member.ident,
                "value": member.literal,
                "name": member.name(),
                "aliases": member.aliases.iter().skip(1).collect::<Vec<_>>(),
                "valid": member.valid,
                "comment": member.comment,
            }))
            .collect::<Vec<_>>(),
    })
}
