//! Field type translator
//!
//! Turns a field's GraphQL type reference into a flat storage descriptor.

use crate::ast::TypeReference;
use crate::config::ScalarMap;
use crate::parser::error::{Error, Result};
use crate::types::FieldDescriptor;
use log::trace;

use super::registry::ReferenceRegistry;

/// Translates type references against a sealed registry
///
/// Translation is pure: the same reference always gives the same descriptor
/// for a given registry and scalar map.
pub struct FieldTranslator<'a> {
    registry: &'a ReferenceRegistry,
    scalars: &'a ScalarMap,
}

impl<'a> FieldTranslator<'a> {
    /// Creates a translator over a sealed registry and scalar map
    pub fn new(registry: &'a ReferenceRegistry, scalars: &'a ScalarMap) -> Self {
        FieldTranslator { registry, scalars }
    }

    /// Translates a type reference into a storage descriptor
    ///
    /// Modifiers are flattened around the named leaf:
    ///
    /// * `X!` sets `required`
    /// * `[X]` sets `is_list`; nested lists collapse into one
    /// * `[X!]` sets `is_list` and `required` (required elements)
    /// * `[X]!` sets `is_list` and `list_required` (required list)
    ///
    /// # Returns
    ///
    /// * `Result<FieldDescriptor>` - The descriptor, or `Error::UnknownType`
    ///   if the leaf type resolves to no scalar, node or interface
    pub fn translate(&self, type_ref: &TypeReference) -> Result<FieldDescriptor> {
        self.translate_in(type_ref, false)
    }

    fn translate_in(&self, type_ref: &TypeReference, in_list: bool) -> Result<FieldDescriptor> {
        match type_ref {
            TypeReference::NonNull(inner) => {
                let descriptor = self.translate_in(inner, in_list)?;
                if matches!(**inner, TypeReference::List(_)) {
                    Ok(descriptor.list_required())
                } else {
                    Ok(descriptor.required())
                }
            }
            TypeReference::List(inner) => self.translate_in(inner, true),
            TypeReference::Named(name) => {
                let descriptor = self.translate_named(name)?;
                Ok(if in_list { descriptor.list() } else { descriptor })
            }
        }
    }

    /// Resolves a named type, after connection alias substitution
    ///
    /// Scalars win over node and interface names.
    fn translate_named(&self, name: &str) -> Result<FieldDescriptor> {
        let resolved = self.registry.resolve_alias(name);
        if resolved != name {
            trace!("Substituted {} with {}", name, resolved);
        }

        if let Some(storage_type) = self.scalars.get(resolved) {
            Ok(FieldDescriptor::primitive(storage_type))
        } else if self.registry.is_ref_target(resolved) {
            Ok(FieldDescriptor::reference(resolved))
        } else if self.registry.is_polymorphic_target(resolved) {
            Ok(FieldDescriptor::polymorphic())
        } else {
            Err(Error::UnknownType(resolved.to_string()))
        }
    }
}
