#[cfg(test)]
mod registry_tests {
    use crate::compiler::registry::{connection_base, RegistryBuilder};
    use crate::config::ScalarMap;

    #[test]
    fn test_connection_base() {
        assert_eq!(connection_base("UserConnection"), Some("User"));
        assert_eq!(connection_base("XConnection"), Some("X"));
        assert_eq!(connection_base("Connection"), None);
        assert_eq!(connection_base("ConnectionPool"), None);
        assert_eq!(connection_base("User"), None);
    }

    #[test]
    fn test_sealed_registry_contents() {
        let mut builder = RegistryBuilder::new();
        builder.add_ref_target("User");
        builder.add_polymorphic_target("Node");
        builder.add_connection("FriendConnection");
        builder.add_connection("Connection");

        let registry = builder.seal(&ScalarMap::default());

        assert!(registry.is_ref_target("User"));
        assert!(registry.is_polymorphic_target("Node"));
        assert_eq!(registry.alias("FriendConnection"), Some("Friend"));
        assert_eq!(registry.alias("Connection"), None);
        assert_eq!(registry.ref_targets().len(), 1);
        assert_eq!(registry.polymorphic_targets().len(), 1);
        assert_eq!(registry.alias_map().len(), 1);
    }

    #[test]
    fn test_resolve_alias() {
        let mut builder = RegistryBuilder::new();
        builder.add_connection("FriendConnection");
        let registry = builder.seal(&ScalarMap::default());

        assert_eq!(registry.resolve_alias("FriendConnection"), "Friend");
        // Undeclared connection names follow the same naming rule
        assert_eq!(registry.resolve_alias("FooConnection"), "Foo");
        // One step only
        assert_eq!(registry.resolve_alias("FooConnectionConnection"), "FooConnection");
        assert_eq!(registry.resolve_alias("Friend"), "Friend");
        assert_eq!(registry.resolve_alias("Connection"), "Connection");
    }

    #[test]
    fn test_scalar_named_node_is_kept() {
        let mut builder = RegistryBuilder::new();
        builder.add_ref_target("String");
        let registry = builder.seal(&ScalarMap::default());

        assert!(registry.is_ref_target("String"));
    }
}
