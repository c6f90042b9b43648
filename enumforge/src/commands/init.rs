//! Init command - initializes enumforge.toml configuration.

use crate::cli::{Cli, InitArgs};
use enumforge_core::error::{EnumforgeError, Result};
use enumforge_core::tooling::CONFIG_FILE_NAME;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

/// Runs the init command and returns the path written.
pub fn run(_cli: &Cli, args: InitArgs) -> Result<PathBuf> {
    let config_path = args.dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        error!("{} already exists. Use --force to overwrite.", CONFIG_FILE_NAME);
        return Err(EnumforgeError::config(format!(
            "{} already exists",
            config_path.display()
        )));
    }

    let content = if args.minimal {
        generate_minimal_config()
    } else {
        generate_full_config()
    };

    fs::create_dir_all(&args.dir)?;
    fs::write(&config_path, content)?;
    info!("Created {}", config_path.display());

    info!("Next steps:");
    info!("  1. Annotate a type alias with `/// enumforge: -json -text`");
    info!("  2. Run 'enumforge generate <file>'");
    info!("  3. include!(\"<stem>_enums.rs\") next to the constants");

    Ok(config_path)
}

fn generate_minimal_config() -> String {
    r#"filenames = []
"#
    .to_string()
}

fn generate_full_config() -> String {
    r#"# enumforge configuration

# Source files or directories to generate for when none are given on the
# command line. ${VAR} and ${VAR:-default} are substituted.
filenames = []

# Make generated `parse` fail on unknown input instead of returning the
# invalid sentinel.
failfast = false

# Also accept lower-cased names and aliases.
insensitive = false

# Print a line per generated file.
verbose = false

# Companion files are written next to their source as <stem><suffix>.rs.
output_suffix = "_enums"

# Options for type aliases without an `enumforge:` annotation.
# [types.Status]
# serde = "name"                  # or "value"
# uppercase_fields = false
# generate_name_constants = false
# handlers = { json = true, text = true, binary = false, yaml = false, sql = false }
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumforge_core::tooling::Configuration;

    #[test]
    fn test_templates_parse() {
        let full = Configuration::parse_toml(&generate_full_config()).unwrap();
        assert_eq!(full, Configuration::default());
        let minimal = Configuration::parse_toml(&generate_minimal_config()).unwrap();
        assert_eq!(minimal, Configuration::default());
    }
}
