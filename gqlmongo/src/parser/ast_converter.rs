//! AST converter for converting graphql-parser schema AST to gqlmongo types
//!
//! This module handles the conversion between the graphql-parser library's
//! schema AST and gqlmongo's internal representation.

use crate::ast::{
    Document, FieldDefinition, InterfaceType, ObjectType, OtherType, ScalarType, TypeDefinition,
    TypeReference,
};
use graphql_parser::schema::{
    Definition as GraphQLDefinition, Document as GraphQLDocument, Field as GraphQLField,
    Type as GraphQLType, TypeDefinition as GraphQLTypeDefinition,
};

/// Converter for transforming graphql-parser schema documents
pub struct ASTConverter {}

impl ASTConverter {
    /// Creates a new AST converter
    pub fn new() -> Self {
        ASTConverter {}
    }

    /// Converts a graphql-parser schema Document to a gqlmongo Document
    ///
    /// Only named type definitions are kept. Schema definitions, directive
    /// definitions and type extensions have no part in collection output.
    ///
    /// # Arguments
    ///
    /// * `document` - The graphql-parser Document to convert
    ///
    /// # Returns
    ///
    /// * `Document` - The converted document, definitions in source order
    pub fn convert_document(&self, document: &GraphQLDocument<'_, String>) -> Document {
        let definitions = document
            .definitions
            .iter()
            .filter_map(|definition| match definition {
                GraphQLDefinition::TypeDefinition(type_definition) => {
                    Some(self.convert_type_definition(type_definition))
                }
                GraphQLDefinition::SchemaDefinition(_)
                | GraphQLDefinition::TypeExtension(_)
                | GraphQLDefinition::DirectiveDefinition(_) => None,
            })
            .collect();

        Document::new(definitions)
    }

    /// Converts one named type definition
    fn convert_type_definition(
        &self,
        definition: &GraphQLTypeDefinition<'_, String>,
    ) -> TypeDefinition {
        match definition {
            GraphQLTypeDefinition::Scalar(scalar) => TypeDefinition::Scalar(ScalarType {
                name: scalar.name.clone(),
            }),
            GraphQLTypeDefinition::Interface(interface) => {
                TypeDefinition::Interface(InterfaceType {
                    name: interface.name.clone(),
                    fields: self.convert_fields(&interface.fields),
                })
            }
            GraphQLTypeDefinition::Object(object) => TypeDefinition::Object(ObjectType {
                name: object.name.clone(),
                interfaces: object.implements_interfaces.iter().cloned().collect(),
                fields: self.convert_fields(&object.fields),
            }),
            GraphQLTypeDefinition::Union(union) => TypeDefinition::Other(OtherType {
                name: union.name.clone(),
            }),
            GraphQLTypeDefinition::Enum(enum_type) => TypeDefinition::Other(OtherType {
                name: enum_type.name.clone(),
            }),
            GraphQLTypeDefinition::InputObject(input) => TypeDefinition::Other(OtherType {
                name: input.name.clone(),
            }),
        }
    }

    fn convert_fields(&self, fields: &[GraphQLField<'_, String>]) -> Vec<FieldDefinition> {
        fields
            .iter()
            .map(|field| FieldDefinition {
                name: field.name.clone(),
                field_type: self.convert_type(&field.field_type),
            })
            .collect()
    }

    /// Converts a field type, keeping the modifier chain intact
    fn convert_type(&self, field_type: &GraphQLType<'_, String>) -> TypeReference {
        match field_type {
            GraphQLType::NamedType(name) => TypeReference::Named(name.clone()),
            GraphQLType::NonNullType(inner) => TypeReference::non_null(self.convert_type(inner)),
            GraphQLType::ListType(inner) => TypeReference::list(self.convert_type(inner)),
        }
    }
}

impl Default for ASTConverter {
    fn default() -> Self {
        Self::new()
    }
}
