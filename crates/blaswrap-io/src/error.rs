//! Error types for blaswrap-io

use std::path::PathBuf;

use blaswrap_sig::ParseError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenError>;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("failed to read signature catalog {}: {source}", .path.display())]
    ReadSignatures {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed signature in {}: {source}", .path.display())]
    Signatures { path: PathBuf, source: ParseError },

    #[error(
        "routine '{name}' is listed in both {} and {}; {} would be written twice",
        .first.display(),
        .second.display(),
        .path.display()
    )]
    DuplicateRoutine {
        name: String,
        first: PathBuf,
        second: PathBuf,
        path: PathBuf,
    },

    #[error("failed to read symbol table {}: {source}", .path.display())]
    SymbolTable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to stat {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
