//! Error handling for schema compilation
//!
//! This module defines the single error type shared by parsing and the
//! compiler passes. Every variant is fatal to the current run: the compiler
//! never produces partial output.

use thiserror::Error;

/// Custom result type for gqlmongo
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading, parsing or compiling a schema
#[derive(Debug, Error)]
pub enum Error {
    /// The SDL text is not valid GraphQL schema syntax
    #[error("GraphQL schema parse error: {0}")]
    SchemaParse(String),

    /// The JSON AST input is not valid JSON or not shaped like a document
    #[error("JSON AST parse error: {0}")]
    JsonParse(String),

    /// Reading an input or configuration file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A type reference node is neither named, non-null nor list
    #[error("Unknown type kind {0}")]
    UnknownKind(String),

    /// A named type resolves to no scalar, node or interface
    #[error("Unknown type mapping for {0}")]
    UnknownType(String),

    /// A declared scalar has no storage mapping and strict checking is on
    #[error("No storage mapping for scalar {0}")]
    UnmappedScalar(String),

    /// The configuration file is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}
