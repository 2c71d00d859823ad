use crate::ast;
use crate::loc;
use crate::operation::FragmentDefinition;
use crate::operation::FragmentIndex;
use crate::operation::ProxyRegistry;
use crate::operation::VariableDefinition;
use crate::schema::Schema;
use crate::types::GraphQLType;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// Counters describing how much work narrowing one operation took.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NarrowingStats {
    /// Spreads answered from the per-operation fragment cache.
    pub fragment_cache_hits: usize,

    /// Fragments actually resolved (at most once per fragment name).
    pub fragment_resolutions: usize,
}

/// Mutable state for narrowing a single operation.
///
/// A context is created fresh for every operation and consumed into that
/// operation's [`OperationArtifact`](crate::operation::OperationArtifact);
/// nothing in it is shared between operations. The narrowing algorithms
/// themselves live in `impl NarrowingContext` blocks spread across the
/// sibling modules (one per component).
#[derive(Debug)]
pub struct NarrowingContext<'schema, 'doc> {
    pub(crate) fragment_cache: IndexMap<String, FragmentDefinition>,
    pub(crate) fragment_stack: IndexSet<String>,
    pub(crate) fragments: &'doc FragmentIndex<'doc>,
    pub(crate) proxies: ProxyRegistry,
    pub(crate) schema: &'schema Schema,
    pub(crate) stats: NarrowingStats,
    pub(crate) variables: IndexMap<String, VariableDefinition>,
}
impl<'schema, 'doc> NarrowingContext<'schema, 'doc> {
    pub fn new(
        schema: &'schema Schema,
        fragments: &'doc FragmentIndex<'doc>,
    ) -> Self {
        Self {
            fragment_cache: IndexMap::new(),
            fragment_stack: IndexSet::new(),
            fragments,
            proxies: ProxyRegistry::default(),
            schema,
            stats: NarrowingStats::default(),
            variables: IndexMap::new(),
        }
    }

    pub(crate) fn execdoc_location(&self, pos: &ast::AstPos) -> loc::SourceLocation {
        loc::SourceLocation::from_execdoc_ast_position(self.fragments.file_path(), pos)
    }

    /// Fragments resolved so far, in resolution order.
    pub fn fragments_used(&self) -> &IndexMap<String, FragmentDefinition> {
        &self.fragment_cache
    }

    /// Whether a value of type `sub_type_name` is always also a value of type
    /// `super_type_name` (same type, implemented interface, or containing
    /// union).
    pub(crate) fn is_subtype_of(&self, sub_type_name: &str, super_type_name: &str) -> bool {
        if sub_type_name == super_type_name {
            return true;
        }
        match self.schema.get_type(super_type_name) {
            Some(GraphQLType::Interface(_)) => match self.schema.get_type(sub_type_name) {
                Some(GraphQLType::Object(obj_type)) =>
                    obj_type.implements_interface(self.schema, super_type_name),
                Some(GraphQLType::Interface(iface_type)) =>
                    iface_type.implements_interface(self.schema, super_type_name),
                _ => false,
            },
            Some(GraphQLType::Union(union_type)) => union_type.has_member(sub_type_name),
            _ => false,
        }
    }

    pub fn proxies(&self) -> &ProxyRegistry {
        &self.proxies
    }

    pub fn schema(&self) -> &'schema Schema {
        self.schema
    }

    pub fn stats(&self) -> &NarrowingStats {
        &self.stats
    }

    pub fn variables(&self) -> &IndexMap<String, VariableDefinition> {
        &self.variables
    }
}
