//! gqlmongo - GraphQL SDL to document collection schemas
//!
//! gqlmongo reads a Relay-style GraphQL schema and derives, for every object
//! type implementing `Node`, a collection schema mapping each field to a
//! storage type: a primitive for scalars, or a reference for fields pointing
//! at other nodes and interfaces. Relay connection types are collapsed onto
//! the entity type they are named after.
//!
//! The compiler is a single synchronous pass over an already parsed
//! document. It either produces every collection or fails with the first
//! error; there is no partial output.

// Module declarations
pub mod ast;
pub mod compiler;
pub mod config;
pub mod parser;
pub mod types;

// Re-exports for public API
pub use compiler::compile;
pub use config::Config;
pub use parser::error::{Error, Result};
pub use types::{BaseType, CollectionSchema, FieldDescriptor, StorageType};

/// Parses SDL text and compiles it into collection schemas
///
/// # Examples
///
/// ```rust
/// use gqlmongo::{compile_sdl, Config};
///
/// let sdl = "interface Node { id: ID! } type User implements Node { id: ID! }";
/// let collections = compile_sdl(sdl, &Config::default()).unwrap();
/// assert_eq!(collections[0].name, "User");
/// ```
pub fn compile_sdl(sdl: &str, config: &Config) -> Result<Vec<CollectionSchema>> {
    let document = parser::parse_sdl(sdl)?;
    compile(&document, config)
}

/// Reads a graphql-js JSON AST and compiles it into collection schemas
pub fn compile_json_ast(json: &str, config: &Config) -> Result<Vec<CollectionSchema>> {
    let document = parser::parse_json_ast(json)?;
    compile(&document, config)
}
