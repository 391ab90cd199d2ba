//! Collection builder
//!
//! Builds one collection schema per node type by translating each of its
//! fields.

use crate::ast::ObjectType;
use crate::parser::error::Result;
use crate::types::CollectionSchema;
use log::{debug, trace};

use super::translator::FieldTranslator;

/// Builds collection schemas for node types
pub struct CollectionBuilder<'a> {
    translator: FieldTranslator<'a>,
}

impl<'a> CollectionBuilder<'a> {
    /// Creates a builder that translates fields with `translator`
    pub fn new(translator: FieldTranslator<'a>) -> Self {
        CollectionBuilder { translator }
    }

    /// Builds the collection schemas for all node types
    ///
    /// Output follows the order of `nodes`. The first field that cannot be
    /// translated aborts the whole build; no schemas are returned in that case,
    /// including those already built.
    ///
    /// # Arguments
    ///
    /// * `nodes` - Node types in declaration order
    ///
    /// # Returns
    ///
    /// * `Result<Vec<CollectionSchema>>` - One schema per node type
    pub fn build(&self, nodes: &[&ObjectType]) -> Result<Vec<CollectionSchema>> {
        let collections = nodes
            .iter()
            .map(|node| self.build_collection(node))
            .collect::<Result<Vec<_>>>()?;

        debug!("Built {} collections", collections.len());
        Ok(collections)
    }

    /// Builds the collection schema for a single node type
    pub fn build_collection(&self, node: &ObjectType) -> Result<CollectionSchema> {
        let mut collection = CollectionSchema::new(node.name.as_str());
        collection.fields.reserve(node.fields.len());

        for field in &node.fields {
            let descriptor = self.translator.translate(&field.field_type)?;
            trace!("{}.{} -> {:?}", node.name, field.name, descriptor);
            collection.fields.push((field.name.clone(), descriptor));
        }

        debug!(
            "Collection {} with {} fields",
            collection.name,
            collection.len()
        );
        Ok(collection)
    }
}
