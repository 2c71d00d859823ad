use crate::loc;
use crate::operation::ProxyId;
use crate::operation::ProxyTypeRef;
use crate::types::TypeKind;
use indexmap::IndexMap;

/// A named fragment as resolved (once) within one operation.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub(crate) concrete_proxies: IndexMap<String, ProxyId>,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) name: String,
    pub(crate) proxy: ProxyTypeRef,
    pub(crate) type_kind: TypeKind,
    pub(crate) type_name: String,
}
impl FragmentDefinition {
    /// For fragments on interfaces and unions: concrete object type name ->
    /// the proxy narrowed for that type. Empty for object fragments.
    pub fn concrete_proxies(&self) -> &IndexMap<String, ProxyId> {
        &self.concrete_proxies
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The proxy produced for the fragment's type condition.
    pub fn proxy(&self) -> &ProxyTypeRef {
        &self.proxy
    }

    /// The kind of the fragment's underlying schema type (object, interface
    /// or union).
    pub fn type_kind(&self) -> TypeKind {
        self.type_kind
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
