/// gqlmongo type definitions
///
/// This module contains the output types of the compiler: storage primitives,
/// per-field storage descriptors and the collection schemas built from them.
use serde::ser::{SerializeMap, SerializeTuple};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Storage primitive a scalar field is stored as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageType {
    Date,
    /// Identifier type, also used for IDs
    ObjectId,
    String,
    Number,
    Boolean,
}

impl StorageType {
    /// The primitive's name as emitted in output
    #[inline(always)]
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::Date => "Date",
            StorageType::ObjectId => "ObjectId",
            StorageType::String => "String",
            StorageType::Number => "Number",
            StorageType::Boolean => "Boolean",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The base type of a field descriptor
///
/// A reference stores the identifier of another persisted entity. Its target
/// is known for node types and unknown (`None`) for interface types, where the
/// concrete type is resolved by whoever writes the data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BaseType {
    Primitive(StorageType),
    Reference(Option<String>),
}

/// Name emitted as `baseType` for references
pub const REFERENCE_MARKER: &str = "Reference";

impl BaseType {
    #[inline]
    pub fn is_reference(&self) -> bool {
        matches!(self, BaseType::Reference(_))
    }

    fn as_str(&self) -> &'static str {
        match self {
            BaseType::Primitive(storage_type) => storage_type.as_str(),
            BaseType::Reference(_) => REFERENCE_MARKER,
        }
    }
}

/// Storage descriptor for a single field
///
/// List and non-null modifiers are flattened into flags around one base type:
///
/// * `is_list` - the field holds a list (nested lists collapse into one)
/// * `required` - the value, or each list element for list fields, is non-null
/// * `list_required` - the list itself is non-null
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    pub base_type: BaseType,
    pub is_list: bool,
    pub required: bool,
    pub list_required: bool,
}

impl FieldDescriptor {
    /// Creates an optional, non-list descriptor for a storage primitive
    pub fn primitive(storage_type: StorageType) -> Self {
        Self::with_base(BaseType::Primitive(storage_type))
    }

    /// Creates an optional, non-list reference to the named node type
    pub fn reference(target: impl Into<String>) -> Self {
        Self::with_base(BaseType::Reference(Some(target.into())))
    }

    /// Creates an optional, non-list reference whose concrete target is unknown
    pub fn polymorphic() -> Self {
        Self::with_base(BaseType::Reference(None))
    }

    fn with_base(base_type: BaseType) -> Self {
        FieldDescriptor {
            base_type,
            is_list: false,
            required: false,
            list_required: false,
        }
    }

    /// The referenced node type, if this is a reference with a known target
    #[inline]
    pub fn ref_target(&self) -> Option<&str> {
        match &self.base_type {
            BaseType::Reference(Some(target)) => Some(target),
            _ => None,
        }
    }

    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn list_required(mut self) -> Self {
        self.list_required = true;
        self
    }
}

/// Serialized as `{"baseType": .., "ref": .., "isList": .., "required": .., "listRequired": ..}`,
/// leaving out `ref` when there is no target and every flag that is false.
impl Serialize for FieldDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("baseType", self.base_type.as_str())?;
        if let Some(target) = self.ref_target() {
            map.serialize_entry("ref", target)?;
        }
        if self.is_list {
            map.serialize_entry("isList", &true)?;
        }
        if self.required {
            map.serialize_entry("required", &true)?;
        }
        if self.list_required {
            map.serialize_entry("listRequired", &true)?;
        }
        map.end()
    }
}

/// Collection schema for one node type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSchema {
    /// Name of the node type
    pub name: String,
    /// Field descriptors in field declaration order
    pub fields: Vec<(String, FieldDescriptor)>,
}

impl CollectionSchema {
    /// Creates an empty collection schema
    pub fn new(name: impl Into<String>) -> Self {
        CollectionSchema {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Looks up the descriptor of a field by name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, descriptor)| descriptor)
    }

    /// Number of fields in the collection
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Serialized as a `[name, {field: descriptor, ...}]` pair.
impl Serialize for CollectionSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.name)?;
        pair.serialize_element(&FieldMap(&self.fields))?;
        pair.end()
    }
}

struct FieldMap<'a>(&'a [(String, FieldDescriptor)]);

impl Serialize for FieldMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, descriptor) in self.0 {
            map.serialize_entry(name, descriptor)?;
        }
        map.end()
    }
}
