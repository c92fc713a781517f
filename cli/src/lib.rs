use clap::{Parser, error::ErrorKind};
use floorplan::DEFAULT_TEXTURE_PATH;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Unsupported file format. Please use .toml or .json files")]
    UnsupportedFileFormat,
}

/// Load tuning values from a TOML string
pub fn from_toml<T: DeserializeOwned>(content: &str) -> Result<T, CliError> {
    Ok(toml::from_str(content)?)
}

/// Load tuning values from a JSON string
pub fn from_json<T: DeserializeOwned>(content: &str) -> Result<T, CliError> {
    Ok(serde_json::from_str(content)?)
}

/// Auto-detect file format and load tuning values
pub fn from_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, CliError> {
    let path_ref = path.as_ref();
    match path_ref.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => from_toml(&fs::read_to_string(path_ref)?),
        Some("json") => from_json(&fs::read_to_string(path_ref)?),
        _ => Err(CliError::UnsupportedFileFormat),
    }
}

/// Built-in defaults unless a config file is given
pub fn load_config<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T, CliError> {
    match path {
        Some(path) => from_file(path),
        None => Ok(T::default()),
    }
}

/// Parse the command line, exiting with status 1 on a usage error.
///
/// `--help` and `--version` keep clap's own output and exit code.
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                std::process::exit(1);
            }
        },
    }
}

/// First `root/components/textures/wooden_floor.jpg` that exists
pub fn find_texture<I>(roots: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    roots
        .into_iter()
        .map(|root| root.join(DEFAULT_TEXTURE_PATH))
        .find(|candidate| candidate.is_file())
}

/// Texture used when `--texture` is absent.
///
/// Searched under the working directory, then under every ancestor of the
/// executable's directory, so an installed or `target/` build still finds the
/// copy at the program root. Falls back to the relative path, which then
/// fails to load with the path in the error.
pub fn default_texture_path() -> PathBuf {
    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Ok(exe) = std::env::current_exe() {
        roots.extend(exe.ancestors().skip(1).map(Path::to_path_buf));
    }
    find_texture(roots).unwrap_or_else(|| PathBuf::from(DEFAULT_TEXTURE_PATH))
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
