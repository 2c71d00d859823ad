use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::ObjectType;
use crate::types::TypeRef;
use crate::types::UnionType;
use indexmap::IndexMap;
use indexmap::IndexSet;
use thiserror::Error;

/// Upper bound, in bytes, on an encoded schema snapshot.
pub const SNAPSHOT_SIZE_LIMIT: usize = 64 * 1024 * 1024;

fn snapshot_config() -> impl bincode::config::Config {
    bincode::config::standard().with_limit::<SNAPSHOT_SIZE_LIMIT>()
}

/// A validated, immutable GraphQL schema.
///
/// Every map preserves definition order, so anything derived from iterating a
/// `Schema` is deterministic. A `Schema` can be snapshotted with
/// [`to_bytes()`](Self::to_bytes) and restored with
/// [`from_bytes()`](Self::from_bytes).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Schema {
    /// Interface name -> every object type implementing it, directly or
    /// through another interface.
    pub(crate) implementors: IndexMap<String, Vec<String>>,
    pub(crate) query_type: TypeRef,
    pub(crate) mutation_type: Option<TypeRef>,
    pub(crate) subscription_type: Option<TypeRef>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Every type keyed by name, starting with the five built-in scalars.
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Restore a schema written by [`to_bytes()`](Self::to_bytes).
    ///
    /// Snapshots larger than [`SNAPSHOT_SIZE_LIMIT`] are rejected before any
    /// of their content is allocated.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SchemaSnapshotError> {
        let (schema, _) = bincode::serde::decode_from_slice(bytes, snapshot_config())?;
        Ok(schema)
    }

    pub fn get_type(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    pub fn implementors_of(&self, interface_name: &str) -> Vec<&ObjectType> {
        let Some(type_names) = self.implementors.get(interface_name) else {
            return vec![];
        };
        type_names
            .iter()
            .filter_map(|type_name| self.object_type(type_name))
            .collect()
    }

    /// Every interface `type_` implements, transitively. Each interface is
    /// listed after the interfaces it extends (base-to-derived).
    pub fn interface_ancestors<T: ObjectOrInterfaceTypeTrait>(&self, type_: &T) -> Vec<&InterfaceType> {
        let mut ordered: IndexSet<&str> = IndexSet::new();
        for iface in type_.interfaces(self) {
            self.push_base_first(iface, &mut ordered);
        }
        ordered
            .into_iter()
            .filter_map(|iface_name| self.interface_type(iface_name))
            .collect()
    }

    fn push_base_first<'schema>(
        &'schema self,
        iface: &'schema InterfaceType,
        ordered: &mut IndexSet<&'schema str>,
    ) {
        if ordered.contains(iface.name()) {
            return;
        }
        for base in iface.interfaces(self) {
            self.push_base_first(base, ordered);
        }
        ordered.insert(iface.name());
    }

    pub fn interface_type(&self, type_name: &str) -> Option<&InterfaceType> {
        self.get_type(type_name).and_then(GraphQLType::as_interface)
    }

    pub fn object_type(&self, type_name: &str) -> Option<&ObjectType> {
        self.get_type(type_name).and_then(GraphQLType::as_object)
    }

    /// The root type for `kind`, honoring any `schema { ... }` override of
    /// the default `Query`/`Mutation`/`Subscription` names.
    pub fn root_operation_type(&self, kind: &OperationKind) -> Option<&ObjectType> {
        self.root_operation_type_name(kind).and_then(|type_name| self.object_type(type_name))
    }

    pub fn root_operation_type_name(&self, kind: &OperationKind) -> Option<&str> {
        let root_ref = match kind {
            OperationKind::Query => Some(&self.query_type),
            OperationKind::Mutation => self.mutation_type.as_ref(),
            OperationKind::Subscription => self.subscription_type.as_ref(),
        };
        root_ref.map(TypeRef::name)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SchemaSnapshotError> {
        Ok(bincode::serde::encode_to_vec(self, snapshot_config())?)
    }

    pub fn union_type(&self, type_name: &str) -> Option<&UnionType> {
        self.get_type(type_name).and_then(GraphQLType::as_union)
    }
}

#[derive(Debug, Error)]
pub enum SchemaSnapshotError {
    #[error("Failed to decode schema snapshot: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("Failed to encode schema snapshot: {0}")]
    Encode(#[from] bincode::error::EncodeError),
}
