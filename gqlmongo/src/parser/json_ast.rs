//! Importer for graphql-js style JSON ASTs
//!
//! Tools built on graphql-js can dump a parsed schema with `JSON.stringify`.
//! This module reads that shape into gqlmongo's own AST so such schemas can be
//! compiled without going through SDL text again. Location info, descriptions,
//! directives and arguments are ignored.

use crate::ast::{
    Document, FieldDefinition, InterfaceType, ObjectType, OtherType, ScalarType, TypeDefinition,
    TypeReference,
};
use log::debug;
use serde::Deserialize;

use super::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct RawDocument {
    kind: String,
    #[serde(default)]
    definitions: Vec<RawDefinition>,
}

#[derive(Debug, Deserialize)]
struct RawDefinition {
    kind: String,
    #[serde(default)]
    name: Option<RawName>,
    #[serde(default)]
    interfaces: Option<Vec<RawTypeNode>>,
    #[serde(default)]
    fields: Option<Vec<RawField>>,
}

#[derive(Debug, Deserialize)]
struct RawName {
    value: String,
}

#[derive(Debug, Deserialize)]
struct RawField {
    name: RawName,
    #[serde(rename = "type")]
    field_type: RawTypeNode,
}

#[derive(Debug, Deserialize)]
struct RawTypeNode {
    kind: String,
    #[serde(default)]
    name: Option<RawName>,
    #[serde(default, rename = "type")]
    inner: Option<Box<RawTypeNode>>,
}

/// Parses a JSON-encoded graphql-js `Document` node
pub fn parse_document(text: &str) -> Result<Document> {
    let raw: RawDocument =
        serde_json::from_str(text).map_err(|e| Error::JsonParse(e.to_string()))?;

    if raw.kind != "Document" {
        return Err(Error::JsonParse(format!(
            "expected a Document node, found {}",
            raw.kind
        )));
    }

    let mut definitions = Vec::with_capacity(raw.definitions.len());
    for definition in raw.definitions {
        if let Some(converted) = convert_definition(definition)? {
            definitions.push(converted);
        }
    }

    Ok(Document::new(definitions))
}

fn convert_definition(definition: RawDefinition) -> Result<Option<TypeDefinition>> {
    let RawDefinition {
        kind,
        name,
        interfaces,
        fields,
    } = definition;

    let name = match name {
        Some(name) => name.value,
        None => {
            debug!("Skipping unnamed {} definition", kind);
            return Ok(None);
        }
    };

    let converted = match kind.as_str() {
        "ScalarTypeDefinition" => TypeDefinition::Scalar(ScalarType { name }),
        "InterfaceTypeDefinition" => TypeDefinition::Interface(InterfaceType {
            name,
            fields: convert_fields(fields)?,
        }),
        "ObjectTypeDefinition" => {
            let interfaces = interfaces
                .unwrap_or_default()
                .into_iter()
                .filter_map(|i| i.name.map(|n| n.value))
                .collect();
            TypeDefinition::Object(ObjectType {
                name,
                interfaces,
                fields: convert_fields(fields)?,
            })
        }
        "EnumTypeDefinition" | "UnionTypeDefinition" | "InputObjectTypeDefinition" => {
            TypeDefinition::Other(OtherType { name })
        }
        _ => {
            debug!("Skipping {} definition {}", kind, name);
            return Ok(None);
        }
    };

    Ok(Some(converted))
}

fn convert_fields(fields: Option<Vec<RawField>>) -> Result<Vec<FieldDefinition>> {
    fields
        .unwrap_or_default()
        .into_iter()
        .map(|field| {
            Ok(FieldDefinition {
                name: field.name.value,
                field_type: convert_type(field.field_type)?,
            })
        })
        .collect()
}

/// Converts a type node, rejecting any kind other than the three type modifiers
fn convert_type(node: RawTypeNode) -> Result<TypeReference> {
    let RawTypeNode { kind, name, inner } = node;
    match kind.as_str() {
        "NamedType" => name
            .map(|name| TypeReference::Named(name.value))
            .ok_or_else(|| Error::JsonParse("NamedType without a name".to_string())),
        "NonNullType" => Ok(TypeReference::non_null(convert_inner(&kind, inner)?)),
        "ListType" => Ok(TypeReference::list(convert_inner(&kind, inner)?)),
        _ => Err(Error::UnknownKind(kind.clone())),
    }
}

fn convert_inner(kind: &str, inner: Option<Box<RawTypeNode>>) -> Result<TypeReference> {
    match inner {
        Some(inner) => convert_type(*inner),
        None => Err(Error::JsonParse(format!("{} without an inner type", kind))),
    }
}
