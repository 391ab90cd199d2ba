//! Type classifier
//!
//! Partitions a document's definitions by the role they play in a Relay-style
//! schema and fills the reference registry from them. Connection and edge
//! types are recognised by name suffix only.

use crate::ast::{Document, ObjectType, TypeDefinition};
use crate::config::{ScalarMap, CONNECTION_SUFFIX, EDGE_SUFFIX, NODE_INTERFACE};
use log::debug;

use super::registry::{ReferenceRegistry, RegistryBuilder};

/// Result of classifying a document
///
/// All borrowed from the document, which is left untouched.
#[derive(Debug)]
pub struct Classification<'a> {
    pub scalars: Vec<&'a TypeDefinition>,
    pub interfaces: Vec<&'a TypeDefinition>,
    /// Object types implementing `Node`, in declaration order
    pub nodes: Vec<&'a ObjectType>,
    pub connections: Vec<&'a TypeDefinition>,
    /// Classified for completeness; nothing downstream consumes edges
    pub edges: Vec<&'a TypeDefinition>,
    pub registry: ReferenceRegistry,
}

/// Relay type classifier
pub struct TypeClassifier {}

impl TypeClassifier {
    /// Creates a new type classifier
    pub fn new() -> Self {
        TypeClassifier {}
    }

    /// Classifies every definition and builds the sealed reference registry
    ///
    /// # Arguments
    ///
    /// * `document` - The schema document to classify
    /// * `scalars` - Scalar lookup, used to report node/scalar name clashes
    ///
    /// # Returns
    ///
    /// * `Classification` - The role subsets and the registry built from them
    pub fn classify<'a>(&self, document: &'a Document, scalars: &ScalarMap) -> Classification<'a> {
        let definitions = &document.definitions;
        let mut builder = RegistryBuilder::new();

        let scalar_types = self.extract_scalars(definitions);

        let interfaces = self.extract_interfaces(definitions);
        for interface in &interfaces {
            builder.add_polymorphic_target(interface.name());
        }

        let connections = self.extract_connections(definitions);
        for connection in &connections {
            builder.add_connection(connection.name());
        }

        let edges = self.extract_edges(definitions);

        let nodes = self.extract_nodes(definitions);
        for node in &nodes {
            builder.add_ref_target(&node.name);
        }

        debug!(
            "Classified {} scalars, {} interfaces, {} nodes, {} connections, {} edges",
            scalar_types.len(),
            interfaces.len(),
            nodes.len(),
            connections.len(),
            edges.len()
        );

        Classification {
            scalars: scalar_types,
            interfaces,
            nodes,
            connections,
            edges,
            registry: builder.seal(scalars),
        }
    }

    /// Is this object type a node in the Relay sense?
    ///
    /// True iff it implements an interface named exactly `Node`.
    #[inline]
    pub fn is_node(&self, object: &ObjectType) -> bool {
        object.implements(NODE_INTERFACE)
    }

    pub fn extract_nodes<'a>(&self, definitions: &'a [TypeDefinition]) -> Vec<&'a ObjectType> {
        definitions
            .iter()
            .filter_map(TypeDefinition::as_object)
            .filter(|object| self.is_node(object))
            .collect()
    }

    pub fn extract_scalars<'a>(&self, definitions: &'a [TypeDefinition]) -> Vec<&'a TypeDefinition> {
        definitions
            .iter()
            .filter(|d| matches!(d, TypeDefinition::Scalar(_)))
            .collect()
    }

    pub fn extract_interfaces<'a>(
        &self,
        definitions: &'a [TypeDefinition],
    ) -> Vec<&'a TypeDefinition> {
        definitions
            .iter()
            .filter(|d| matches!(d, TypeDefinition::Interface(_)))
            .collect()
    }

    /// Definitions of any kind named `<X>Connection`
    pub fn extract_connections<'a>(
        &self,
        definitions: &'a [TypeDefinition],
    ) -> Vec<&'a TypeDefinition> {
        filter_by_suffix(definitions, CONNECTION_SUFFIX)
    }

    /// Definitions of any kind named `<X>Edge`
    pub fn extract_edges<'a>(&self, definitions: &'a [TypeDefinition]) -> Vec<&'a TypeDefinition> {
        filter_by_suffix(definitions, EDGE_SUFFIX)
    }
}

impl Default for TypeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps definitions whose name is `suffix` preceded by at least one character
fn filter_by_suffix<'a>(definitions: &'a [TypeDefinition], suffix: &str) -> Vec<&'a TypeDefinition> {
    definitions
        .iter()
        .filter(|d| {
            d.name()
                .strip_suffix(suffix)
                .is_some_and(|base| !base.is_empty())
        })
        .collect()
}
