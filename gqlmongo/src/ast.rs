//! Schema AST used by the compiler
//!
//! This module holds gqlmongo's own view of a GraphQL schema document. Both the
//! SDL parser and the JSON AST importer convert into these types, so the
//! compiler passes never see a third-party AST.
use smallvec::SmallVec;

/// A parsed schema document
///
/// Definitions are kept in declaration order; collection output follows it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// Top-level named type definitions
    pub definitions: Vec<TypeDefinition>,
}

impl Document {
    /// Creates a document from a list of definitions
    pub fn new(definitions: Vec<TypeDefinition>) -> Self {
        Document { definitions }
    }
}

/// A named top-level type definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDefinition {
    /// `scalar Name`
    Scalar(ScalarType),
    /// `interface Name { ... }`
    Interface(InterfaceType),
    /// `type Name implements A & B { ... }`
    Object(ObjectType),
    /// Enums, unions and input objects. Only their name takes part in compilation.
    Other(OtherType),
}

impl TypeDefinition {
    /// The declared name of the definition
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Scalar(s) => &s.name,
            TypeDefinition::Interface(i) => &i.name,
            TypeDefinition::Object(o) => &o.name,
            TypeDefinition::Other(o) => &o.name,
        }
    }

    /// Returns the object type if this definition is one
    #[inline]
    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            TypeDefinition::Object(o) => Some(o),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarType {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceType {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
}

/// An object type definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    pub name: String,
    /// Names of the interfaces listed after `implements`
    ///
    /// Most types implement zero to two interfaces, so these stay inline.
    pub interfaces: SmallVec<[String; 2]>,
    /// Field definitions in declaration order
    pub fields: Vec<FieldDefinition>,
}

impl ObjectType {
    /// Checks whether the type lists `interface` after `implements`
    #[inline]
    pub fn implements(&self, interface: &str) -> bool {
        self.interfaces.iter().any(|i| i == interface)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherType {
    pub name: String,
}

/// A field declared on an object or interface type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    pub field_type: TypeReference,
}

/// A field's type: a chain of list and non-null modifiers around a named type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeReference {
    /// `Name`
    Named(String),
    /// `Inner!`
    NonNull(Box<TypeReference>),
    /// `[Inner]`
    List(Box<TypeReference>),
}

impl TypeReference {
    /// Builds a `Named` reference
    pub fn named(name: impl Into<String>) -> Self {
        TypeReference::Named(name.into())
    }

    /// Wraps `inner` in a non-null modifier
    pub fn non_null(inner: TypeReference) -> Self {
        TypeReference::NonNull(Box::new(inner))
    }

    /// Wraps `inner` in a list modifier
    pub fn list(inner: TypeReference) -> Self {
        TypeReference::List(Box::new(inner))
    }

    /// The named type at the bottom of the modifier chain
    pub fn leaf_name(&self) -> &str {
        match self {
            TypeReference::Named(name) => name,
            TypeReference::NonNull(inner) | TypeReference::List(inner) => inner.leaf_name(),
        }
    }
}
