//! Companion file generation for source files and directories.

use super::annotation::ANNOTATION_PREFIX;
use super::config::Configuration;
use super::model::{EnumType, GenerationRequest};
use super::parser::Parser;
use super::source::{FileSource, Source};
use super::writer::generate_companion_string;
use crate::enumforge_log;
use crate::error::{EnumforgeError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};
use walkdir::WalkDir;

/// Information about a generated file.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// The source file the companion was generated from.
    pub source: PathBuf,
    /// The path where the file was written.
    pub path: PathBuf,
    /// The number of bytes written.
    pub bytes_written: usize,
    /// Number of enum types in the file.
    pub enum_count: usize,
}

/// A companion file rendered in memory but not yet written.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub source: PathBuf,
    pub output_path: PathBuf,
    pub content: String,
    pub enums: Vec<EnumType>,
}

/// Report of the generation process.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// List of files that were generated.
    pub files: Vec<GeneratedFile>,
    /// Number of enum types processed.
    pub enums_processed: usize,
}

impl GenerationReport {
    fn add_file(&mut self, file: GeneratedFile) {
        self.enums_processed += file.enum_count;
        self.files.push(file);
    }

    pub fn bytes_written(&self) -> usize {
        self.files.iter().map(|f| f.bytes_written).sum()
    }
}

/// Generator for enum companion files.
pub struct EnumGenerator {
    config: Configuration,
    parser: Parser,
}

impl EnumGenerator {
    /// Creates a new EnumGenerator with the given configuration.
    pub fn new(config: Configuration) -> Self {
        Self {
            parser: Parser::new(config.clone()),
            config,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Scans a source without writing anything.
    pub fn scan(&self, source: &mut dyn Source) -> Result<Vec<EnumType>> {
        self.parser.parse(source)
    }

    /// Renders the companion text for an in-memory source.
    pub fn generate_source(&self, source: &mut dyn Source) -> Result<String> {
        let filename = source.filename();
        let enums = self.parser.parse(source)?;
        if enums.is_empty() {
            return Err(EnumforgeError::NoEnumsFound {
                file: PathBuf::from(&filename),
            });
        }
        let output_path = self.output_path_for(Path::new(&filename))?;
        let request = self.request(&filename, output_path, enums);
        Ok(generate_companion_string(&request))
    }

    /// Renders the companion file for `path` without writing it.
    pub fn render_file(&self, path: &Path) -> Result<RenderedFile> {
        let output_path = self.output_path_for(path)?;
        let mut source = FileSource::new(path);
        let enums = self.parser.parse(&mut source)?;
        if enums.is_empty() {
            return Err(EnumforgeError::NoEnumsFound {
                file: path.to_path_buf(),
            });
        }

        let source_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let request = self.request(&source_name, output_path.clone(), enums);
        let content = generate_companion_string(&request);

        Ok(RenderedFile {
            source: path.to_path_buf(),
            output_path,
            content,
            enums: request.enums,
        })
    }

    /// Generates and writes the companion file for one source file.
    pub fn generate_file(&self, path: &Path) -> Result<GeneratedFile> {
        let rendered = self.render_file(path)?;
        let bytes_written = rendered.content.len();
        fs::write(&rendered.output_path, &rendered.content)?;
        info!(
            "Wrote {} enum(s) to {:?}",
            rendered.enums.len(),
            rendered.output_path
        );
        enumforge_log!(rendered.content, "generated.log", true);

        Ok(GeneratedFile {
            source: rendered.source,
            path: rendered.output_path,
            bytes_written,
            enum_count: rendered.enums.len(),
        })
    }

    /// Generates companions for every file, or every annotated `.rs` file
    /// under every directory, in `inputs`.
    pub fn generate_all(&self, inputs: &[PathBuf]) -> Result<GenerationReport> {
        info!("Starting enum generation for {} input(s)", inputs.len());
        let mut report = GenerationReport::default();

        for path in self.collect_sources(inputs)? {
            let file = self.generate_file(&path)?;
            report.add_file(file);
        }

        info!(
            "Generation complete. Generated {} files ({} enums, {} bytes)",
            report.files.len(),
            report.enums_processed,
            report.bytes_written()
        );
        Ok(report)
    }

    /// Expands `inputs` into source files. Directories contribute the `.rs`
    /// files carrying an `enumforge:` annotation, excluding companions.
    pub fn collect_sources(&self, inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut sources = Vec::new();

        for input in inputs {
            if input.is_file() {
                sources.push(input.clone());
                continue;
            }
            if !input.is_dir() {
                warn!("Input {:?} does not exist", input);
                return Err(EnumforgeError::InvalidPath {
                    path: input.clone(),
                });
            }

            debug!("Walking {:?} for annotated sources", input);
            for entry in WalkDir::new(input)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let path = entry.path();
                if !entry.file_type().is_file() || !self.is_candidate(path) {
                    continue;
                }
                match fs::read_to_string(path) {
                    Ok(content) if content.contains(ANNOTATION_PREFIX) => {
                        trace!("Found annotated source {:?}", path);
                        sources.push(path.to_path_buf());
                    }
                    Ok(_) => {}
                    Err(e) => warn!("Skipping unreadable file {:?}: {}", path, e),
                }
            }
        }

        debug!("Collected {} source file(s)", sources.len());
        Ok(sources)
    }

    fn is_candidate(&self, path: &Path) -> bool {
        let companion_suffix = format!("{}.rs", self.config.output_suffix);
        path.extension().is_some_and(|ext| ext == "rs")
            && !path
                .file_name()
                .is_some_and(|name| name.to_string_lossy().ends_with(&companion_suffix))
    }

    /// `<dir>/<stem><suffix>.rs` next to the source.
    pub fn output_path_for(&self, source: &Path) -> Result<PathBuf> {
        let invalid = || EnumforgeError::InvalidPath {
            path: source.to_path_buf(),
        };
        let stem = source.file_stem().ok_or_else(invalid)?.to_string_lossy();
        let file_name = format!("{}{}.rs", stem, self.config.output_suffix);
        if file_name.contains(' ') {
            return Err(invalid());
        }
        Ok(source.with_file_name(file_name))
    }

    fn request(&self, source: &str, output_path: PathBuf, enums: Vec<EnumType>) -> GenerationRequest {
        GenerationRequest {
            source_filename: source.to_string(),
            output_path,
            enums,
            failfast: self.config.failfast,
            insensitive: self.config.insensitive,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
