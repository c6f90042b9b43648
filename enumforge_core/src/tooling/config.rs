use crate::enums::SerdeFormat;
use crate::error::{EnumforgeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{env, fs};
use tracing::{debug, error, info, trace, warn};

/// Name of the configuration file searched for in ancestor directories.
pub const CONFIG_FILE_NAME: &str = "enumforge.toml";

/// Which serialization surfaces to generate for a type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Handlers {
    pub json: bool,
    pub text: bool,
    pub binary: bool,
    pub yaml: bool,
    pub sql: bool,
}

impl Handlers {
    pub fn all() -> Self {
        Self {
            json: true,
            text: true,
            binary: true,
            yaml: true,
            sql: true,
        }
    }

    /// Names of the enabled handlers, in annotation order.
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            ("json", self.json),
            ("text", self.text),
            ("binary", self.binary),
            ("yaml", self.yaml),
            ("sql", self.sql),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }
}

/// Generation options for one enum type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumTypeConfig {
    #[serde(skip)]
    pub type_name: String,

    /// Keep container field names in UPPER_SNAKE case.
    pub uppercase_fields: bool,

    /// Emit an associated `&str` constant per member name.
    pub generate_name_constants: bool,

    pub handlers: Handlers,

    #[serde(rename = "serde")]
    pub serde_format: SerdeFormat,
}

/// Settings shared by the scanner, the emitter and the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Unknown names make the generated `parse` fail instead of returning the invalid sentinel.
    pub failfast: bool,

    /// Also accept lower-cased names and aliases.
    pub insensitive: bool,

    pub verbose: bool,

    /// Appended to the source stem to name the companion file.
    pub output_suffix: String,

    /// Source files or directories to generate for when none are given.
    pub filenames: Vec<String>,

    /// Per-type options for aliases without an `enumforge:` annotation.
    #[serde(rename = "types")]
    pub enum_type_configs: BTreeMap<String, EnumTypeConfig>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            failfast: false,
            insensitive: false,
            verbose: false,
            output_suffix: "_enums".to_string(),
            filenames: Vec::new(),
            enum_type_configs: BTreeMap::new(),
        }
    }
}

impl Configuration {
    /// Loads the configuration from `explicit`, or from the nearest
    /// `enumforge.toml` above the current directory. A missing file is only
    /// an error when it was asked for explicitly.
    pub fn load(explicit: Option<&Path>) -> Result<Configuration> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => {
                let current_dir = env::current_dir()?;
                match Self::find_config_file_from(&current_dir) {
                    Some(path) => Self::from_path(&path),
                    None => {
                        debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                        Ok(Configuration::default())
                    }
                }
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Configuration> {
        info!("Loading enumforge configuration from {:?}", path);
        let contents = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read configuration file {:?}: {}", path, e);
            EnumforgeError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        debug!("Configuration file size: {} bytes", contents.len());
        Self::parse_toml(&contents)
    }

    /// Parses configuration text and resolves `${VAR}` references in paths.
    pub fn parse_toml(contents: &str) -> Result<Configuration> {
        let mut config: Configuration = toml::from_str(contents).map_err(|e| {
            error!("Failed to parse TOML configuration: {}", e);
            EnumforgeError::config(e.to_string())
        })?;

        config.filenames = config
            .filenames
            .iter()
            .map(|name| Self::substitute_env_vars(name))
            .collect::<Result<Vec<_>>>()?;
        config.output_suffix = Self::substitute_env_vars(&config.output_suffix)?;

        for (name, type_config) in config.enum_type_configs.iter_mut() {
            type_config.type_name = name.clone();
        }

        Self::validate_suffix(&config.output_suffix)?;
        debug!(
            "Configuration: failfast={}, insensitive={}, {} file(s), {} type override(s)",
            config.failfast,
            config.insensitive,
            config.filenames.len(),
            config.enum_type_configs.len()
        );
        Ok(config)
    }

    /// Options for `type_name`, falling back to name serialization with no handlers.
    pub fn enum_type_config(&self, type_name: &str) -> EnumTypeConfig {
        match self.enum_type_configs.get(type_name) {
            Some(config) => config.clone(),
            None => EnumTypeConfig {
                type_name: type_name.to_string(),
                ..EnumTypeConfig::default()
            },
        }
    }

    /// Searches for `enumforge.toml` starting at `start` and walking up to the root.
    pub fn find_config_file_from(start: &Path) -> Option<PathBuf> {
        debug!("Starting config file search from: {:?}", start);
        start.ancestors().find_map(|dir| {
            let candidate = dir.join(CONFIG_FILE_NAME);
            trace!("Checking for config at: {:?}", candidate);
            candidate.exists().then_some(candidate)
        })
    }

    /// Rejects suffixes that would move the companion away from its source.
    pub fn validate_suffix(suffix: &str) -> Result<()> {
        if suffix.contains(['/', '\\', ' ']) {
            return Err(EnumforgeError::config(format!(
                "output_suffix {suffix:?} must not contain spaces or path separators"
            )));
        }
        Ok(())
    }

    /// Substitutes `${VAR}` and `${VAR:-default}` references.
    pub(crate) fn substitute_env_vars(value: &str) -> Result<String> {
        trace!("Substituting environment variables in: {}", value);
        let re = regex::Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}")?;
        let mut result = value.to_string();

        for cap in re.captures_iter(value) {
            let var_name = &cap[1];
            let replacement = match env::var(var_name) {
                Ok(val) => {
                    debug!("Resolved environment variable: {}", var_name);
                    val
                }
                Err(_) => match cap.get(2) {
                    Some(default) => {
                        warn!(
                            "Environment variable {} not set, using default: {}",
                            var_name,
                            default.as_str()
                        );
                        default.as_str().to_string()
                    }
                    None => {
                        error!(
                            "Environment variable {} not set and no default provided",
                            var_name
                        );
                        return Err(EnumforgeError::EnvVarNotSet(var_name.to_string()));
                    }
                },
            };
            result = result.replace(&cap[0], &replacement);
        }

        Ok(result)
    }
}
