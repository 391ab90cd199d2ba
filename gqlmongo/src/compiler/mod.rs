//! Schema compiler module for gqlmongo
//!
//! This module turns a parsed schema document into collection schemas. It
//! runs in three steps:
//! - classification of every definition, which seals the reference registry
//! - a check that declared scalars have storage mappings
//! - translation of every field of every node type
//!
//! Classification always completes before any field is translated, so fields
//! may refer to types declared anywhere in the document.

pub mod classifier;
pub mod collection_builder;
pub mod registry;
pub mod translator;

#[cfg(test)]
mod tests;

use crate::ast::{Document, TypeDefinition};
use crate::config::{Config, ScalarMap};
use crate::parser::error::{Error, Result};
use crate::types::CollectionSchema;
use log::warn;

pub use self::classifier::{Classification, TypeClassifier};
pub use self::collection_builder::CollectionBuilder;
pub use self::registry::{ReferenceRegistry, RegistryBuilder};
pub use self::translator::FieldTranslator;

/// Compiles a schema document into one collection schema per node type
///
/// # Arguments
///
/// * `document` - The parsed schema document
/// * `config` - Custom scalar mappings and scalar checking mode
///
/// # Returns
///
/// * `Result<Vec<CollectionSchema>>` - Collections in node declaration order,
///   or the first error encountered; there is no partial output
pub fn compile(document: &Document, config: &Config) -> Result<Vec<CollectionSchema>> {
    let scalars = config.scalar_map();

    let classification = TypeClassifier::new().classify(document, &scalars);
    check_scalar_mappings(&classification.scalars, &scalars, config.strict_scalars)?;

    let translator = FieldTranslator::new(&classification.registry, &scalars);
    CollectionBuilder::new(translator).build(&classification.nodes)
}

/// Reports declared scalars that have no storage mapping
///
/// Unmapped scalars only fail translation when a node field uses them, so by
/// default they are just logged.
fn check_scalar_mappings(
    declared: &[&TypeDefinition],
    scalars: &ScalarMap,
    strict: bool,
) -> Result<()> {
    for scalar in declared {
        let name = scalar.name();
        if scalars.contains(name) {
            continue;
        }
        if strict {
            return Err(Error::UnmappedScalar(name.to_string()));
        }
        warn!("Scalar {} has no storage mapping", name);
    }

    Ok(())
}
