use crate::operation::QueriedField;
use crate::operation::SelectionPath;
use indexmap::IndexMap;

/// Index of a proxy type within its operation's
/// [`ProxyRegistry`](crate::operation::ProxyRegistry).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ProxyId(pub(crate) usize);
impl ProxyId {
    pub fn index(&self) -> usize {
        self.0
    }
}
impl std::fmt::Display for ProxyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The identity of a proxy type: same key, same proxy.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ProxyKey {
    pub path: SelectionPath,
    pub type_name: String,
}
impl ProxyKey {
    pub fn new(type_name: impl Into<String>, path: SelectionPath) -> Self {
        Self {
            path,
            type_name: type_name.into(),
        }
    }

    /// A name unique within one operation, derived from the type name and
    /// the selection path (e.g. `Dog__animal__onDog`).
    pub fn proxy_name(&self) -> String {
        if self.path.is_root() {
            self.type_name.to_owned()
        } else {
            format!("{}__{}", self.type_name, self.path.to_name_suffix())
        }
    }
}

/// The narrowed result type of a [`QueriedField`]: a reference to a proxy
/// type re-wrapped in the same list/optional structure as the schema type.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ProxyTypeRef {
    Interface(ProxyId),
    List(Box<ProxyTypeRef>),
    Object(ProxyId),
    Optional(Box<ProxyTypeRef>),
    Union(ProxyId),
}
impl ProxyTypeRef {
    /// The [`ProxyId`] underneath any list/optional wrappers.
    pub fn proxy_id(&self) -> ProxyId {
        match self {
            Self::Interface(id) | Self::Object(id) | Self::Union(id) => *id,
            Self::List(inner) | Self::Optional(inner) => inner.proxy_id(),
        }
    }
}

/// The exact set of fields selected on one concrete object type at one
/// selection path.
#[derive(Clone, Debug, PartialEq)]
pub struct ProxyObjectType {
    pub(crate) abstract_supertype: Option<ProxyId>,
    pub(crate) fields: IndexMap<String, QueriedField>,
    pub(crate) id: ProxyId,
    pub(crate) key: ProxyKey,
}
impl ProxyObjectType {
    /// The interface or union proxy this object proxy was narrowed from, if
    /// any.
    pub fn abstract_supertype(&self) -> Option<ProxyId> {
        self.abstract_supertype
    }

    /// Look up a selected field by response key.
    pub fn field(&self, response_key: &str) -> Option<&QueriedField> {
        self.fields.get(response_key)
    }

    /// Selected fields keyed by response key, in selection order.
    pub fn fields(&self) -> &IndexMap<String, QueriedField> {
        &self.fields
    }

    pub fn id(&self) -> ProxyId {
        self.id
    }

    pub fn key(&self) -> &ProxyKey {
        &self.key
    }

    pub fn name(&self) -> String {
        self.key.proxy_name()
    }

    pub fn path(&self) -> &SelectionPath {
        &self.key.path
    }

    pub fn type_name(&self) -> &str {
        self.key.type_name.as_str()
    }
}

/// An interface selection: the fields shared by every implementor plus one
/// [`ProxyObjectType`] per implementing object type.
#[derive(Clone, Debug, PartialEq)]
pub struct ProxyInterfaceType {
    pub(crate) fields: IndexMap<String, QueriedField>,
    pub(crate) id: ProxyId,
    pub(crate) implementors: IndexMap<String, ProxyId>,
    pub(crate) key: ProxyKey,
}
impl ProxyInterfaceType {
    pub fn field(&self, response_key: &str) -> Option<&QueriedField> {
        self.fields.get(response_key)
    }

    /// Fields selected at the interface level (always including the
    /// `__typename` discriminator).
    pub fn fields(&self) -> &IndexMap<String, QueriedField> {
        &self.fields
    }

    pub fn id(&self) -> ProxyId {
        self.id
    }

    /// Object type name -> implementor proxy, in schema definition order.
    pub fn implementors(&self) -> &IndexMap<String, ProxyId> {
        &self.implementors
    }

    pub fn key(&self) -> &ProxyKey {
        &self.key
    }

    pub fn name(&self) -> String {
        self.key.proxy_name()
    }

    pub fn type_name(&self) -> &str {
        self.key.type_name.as_str()
    }
}

/// A union selection: one [`ProxyObjectType`] per selected member.
#[derive(Clone, Debug, PartialEq)]
pub struct ProxyUnionType {
    pub(crate) branches: IndexMap<String, ProxyId>,
    pub(crate) id: ProxyId,
    pub(crate) key: ProxyKey,
}
impl ProxyUnionType {
    /// Member type name -> branch proxy, in document order of the
    /// `... on Member` fragments that selected them.
    pub fn branches(&self) -> &IndexMap<String, ProxyId> {
        &self.branches
    }

    pub fn id(&self) -> ProxyId {
        self.id
    }

    pub fn key(&self) -> &ProxyKey {
        &self.key
    }

    pub fn name(&self) -> String {
        self.key.proxy_name()
    }

    pub fn type_name(&self) -> &str {
        self.key.type_name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ProxyType {
    Interface(ProxyInterfaceType),
    Object(ProxyObjectType),
    Union(ProxyUnionType),
}
impl ProxyType {
    pub fn as_interface(&self) -> Option<&ProxyInterfaceType> {
        if let Self::Interface(proxy) = self {
            Some(proxy)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ProxyObjectType> {
        if let Self::Object(proxy) = self {
            Some(proxy)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&ProxyUnionType> {
        if let Self::Union(proxy) = self {
            Some(proxy)
        } else {
            None
        }
    }

    /// The selected fields of an object or interface proxy. Union proxies
    /// have no fields of their own.
    pub fn fields(&self) -> Option<&IndexMap<String, QueriedField>> {
        match self {
            Self::Interface(proxy) => Some(&proxy.fields),
            Self::Object(proxy) => Some(&proxy.fields),
            Self::Union(_) => None,
        }
    }

    pub fn id(&self) -> ProxyId {
        match self {
            Self::Interface(proxy) => proxy.id,
            Self::Object(proxy) => proxy.id,
            Self::Union(proxy) => proxy.id,
        }
    }

    pub fn key(&self) -> &ProxyKey {
        match self {
            Self::Interface(proxy) => &proxy.key,
            Self::Object(proxy) => &proxy.key,
            Self::Union(proxy) => &proxy.key,
        }
    }

    pub fn name(&self) -> String {
        self.key().proxy_name()
    }

    pub fn type_name(&self) -> &str {
        self.key().type_name.as_str()
    }
}
