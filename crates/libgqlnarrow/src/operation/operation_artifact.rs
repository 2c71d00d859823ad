use crate::loc;
use crate::operation::FragmentDefinition;
use crate::operation::NarrowingStats;
use crate::operation::OperationKind;
use crate::operation::ProxyRegistry;
use crate::operation::QueriedField;
use crate::operation::SelectionPath;
use crate::operation::VariableDefinition;
use crate::operation::VariableUse;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Everything learned about one named operation: its single root field,
/// declared variables and the closed graph of proxy types reachable from
/// that root field.
///
/// Artifacts are immutable and self-contained; they hold no references to
/// the [`Schema`](crate::schema::Schema) or the document they came from.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationArtifact {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) fragments: IndexMap<String, FragmentDefinition>,
    pub(crate) kind: OperationKind,
    pub(crate) name: String,
    pub(crate) proxies: ProxyRegistry,
    pub(crate) root_field: QueriedField,
    pub(crate) root_type_name: String,
    pub(crate) stats: NarrowingStats,
    pub(crate) variables: IndexMap<String, VariableDefinition>,
}
impl OperationArtifact {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// Fragments resolved while narrowing this operation, in resolution
    /// order.
    pub fn fragments(&self) -> &IndexMap<String, FragmentDefinition> {
        &self.fragments
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn proxies(&self) -> &ProxyRegistry {
        &self.proxies
    }

    pub fn root_field(&self) -> &QueriedField {
        &self.root_field
    }

    /// Name of the schema type that roots this operation (e.g. `Query`).
    pub fn root_type_name(&self) -> &str {
        self.root_type_name.as_str()
    }

    pub fn stats(&self) -> &NarrowingStats {
        &self.stats
    }

    /// Declared variables, in declaration order.
    pub fn variables(&self) -> &IndexMap<String, VariableDefinition> {
        &self.variables
    }

    /// Every variable use in the operation: the root field's first, then
    /// those of each proxy's own fields in proxy registration order.
    ///
    /// A field shared through a fragment is counted once, on the fragment's
    /// own proxy. A selection narrowed at several paths is counted once.
    pub fn variable_uses(&self) -> Vec<&VariableUse> {
        let root_field = Some(&self.root_field)
            .filter(|field| field.path().is_child_of(&SelectionPath::root()));
        let proxy_fields = self.proxies.iter().flat_map(|proxy| {
            proxy.fields()
                .into_iter()
                .flat_map(|fields| fields.values())
                .filter(move |field| field.path().is_child_of(&proxy.key().path))
        });

        let mut selections: HashSet<&loc::SourceLocation> = HashSet::new();
        root_field
            .into_iter()
            .chain(proxy_fields)
            .filter(|field| {
                field.selection_location().is_none_or(|location| selections.insert(location))
            })
            .flat_map(|field| field.variable_uses())
            .collect()
    }
}
