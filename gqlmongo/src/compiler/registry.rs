//! Reference registry
//!
//! Lookup tables built during classification and read during translation.
//! A [`RegistryBuilder`] collects entries while classification runs; sealing it
//! yields a read-only [`ReferenceRegistry`]. Translation only accepts the sealed
//! form, so no field can be translated while classification is incomplete.

use crate::config::{ScalarMap, CONNECTION_SUFFIX};
use log::{debug, warn};
use std::collections::{HashMap, HashSet};

/// Strips the connection suffix from a Relay connection type name
///
/// Matches names of the form `.+Connection`; the bare name `Connection` is not
/// a connection type.
#[inline]
pub fn connection_base(name: &str) -> Option<&str> {
    name.strip_suffix(CONNECTION_SUFFIX)
        .filter(|base| !base.is_empty())
}

/// Registry under construction
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    ref_targets: HashSet<String>,
    polymorphic_targets: HashSet<String>,
    alias_map: HashMap<String, String>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node type as a valid reference target
    pub fn add_ref_target(&mut self, name: &str) {
        self.ref_targets.insert(name.to_string());
    }

    /// Registers an interface type as a polymorphic reference target
    pub fn add_polymorphic_target(&mut self, name: &str) {
        self.polymorphic_targets.insert(name.to_string());
    }

    /// Registers a connection type as an alias of the type it is named after
    ///
    /// `FooConnection` maps to `Foo`. The connection's fields are not
    /// inspected and `Foo` need not exist.
    pub fn add_connection(&mut self, name: &str) {
        if let Some(base) = connection_base(name) {
            self.alias_map.insert(name.to_string(), base.to_string());
        }
    }

    /// Finishes classification and returns the read-only registry
    ///
    /// Node names that collide with a scalar are kept but logged: the scalar
    /// mapping takes precedence during translation.
    pub fn seal(self, scalars: &ScalarMap) -> ReferenceRegistry {
        for name in &self.ref_targets {
            if scalars.contains(name) {
                warn!(
                    "Node type {} shares its name with a scalar; the scalar mapping wins",
                    name
                );
            }
        }

        debug!(
            "Sealed registry: {} reference targets, {} polymorphic targets, {} aliases",
            self.ref_targets.len(),
            self.polymorphic_targets.len(),
            self.alias_map.len()
        );

        ReferenceRegistry {
            ref_targets: self.ref_targets,
            polymorphic_targets: self.polymorphic_targets,
            alias_map: self.alias_map,
        }
    }
}

/// Sealed lookup tables for field translation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReferenceRegistry {
    ref_targets: HashSet<String>,
    polymorphic_targets: HashSet<String>,
    alias_map: HashMap<String, String>,
}

impl ReferenceRegistry {
    /// Is `name` a node type that can be referenced?
    #[inline]
    pub fn is_ref_target(&self, name: &str) -> bool {
        self.ref_targets.contains(name)
    }

    /// Is `name` an interface type?
    #[inline]
    pub fn is_polymorphic_target(&self, name: &str) -> bool {
        self.polymorphic_targets.contains(name)
    }

    /// The registered alias target of a connection type
    #[inline]
    pub fn alias(&self, name: &str) -> Option<&str> {
        self.alias_map.get(name).map(String::as_str)
    }

    /// Substitutes a connection type name with the name of the type it wraps
    ///
    /// Registered aliases are used first. Names that follow the connection
    /// naming pattern but were never declared are stripped the same way.
    /// This is a single substitution step; the result is not resolved again.
    pub fn resolve_alias<'a>(&'a self, name: &'a str) -> &'a str {
        self.alias(name)
            .or_else(|| connection_base(name))
            .unwrap_or(name)
    }

    pub fn ref_targets(&self) -> &HashSet<String> {
        &self.ref_targets
    }

    pub fn polymorphic_targets(&self) -> &HashSet<String> {
        &self.polymorphic_targets
    }

    pub fn alias_map(&self) -> &HashMap<String, String> {
        &self.alias_map
    }
}
