//! Schema parser module for gqlmongo
//!
//! This module turns schema input into gqlmongo's own AST. Two inputs are
//! supported:
//! - GraphQL SDL text, parsed with the graphql-parser library
//! - graphql-js style JSON ASTs
//!
//! Syntax errors are reported as they come from the underlying parser; no
//! attempt is made to recover from malformed input.

mod ast_converter;
pub mod error;
mod json_ast;


use crate::ast::Document;
use log::debug;

use self::ast_converter::ASTConverter;
use self::error::{Error, Result};

/// Parses GraphQL SDL text into a schema document
///
/// # Arguments
///
/// * `sdl` - The schema definition language text
///
/// # Returns
///
/// * `Result<Document>` - The named type definitions in declaration order,
///   or `Error::SchemaParse` if the text is not valid SDL
///
/// # Examples
///
/// ```rust
/// let document = gqlmongo::parser::parse_sdl("type User { id: ID! }").unwrap();
/// assert_eq!(document.definitions.len(), 1);
/// ```
pub fn parse_sdl(sdl: &str) -> Result<Document> {
    let schema = graphql_parser::parse_schema::<String>(sdl)
        .map_err(|e| Error::SchemaParse(e.to_string()))?;

    let document = ASTConverter::new().convert_document(&schema);
    debug!("Parsed {} type definitions from SDL", document.definitions.len());

    Ok(document)
}

/// Parses a graphql-js style JSON AST into a schema document
///
/// Fails with `Error::UnknownKind` when a type node is not a `NamedType`,
/// `NonNullType` or `ListType`, and with `Error::JsonParse` when the text is
/// not a JSON `Document` node.
pub fn parse_json_ast(json: &str) -> Result<Document> {
    let document = json_ast::parse_document(json)?;
    debug!(
        "Read {} type definitions from JSON AST",
        document.definitions.len()
    );

    Ok(document)
}
