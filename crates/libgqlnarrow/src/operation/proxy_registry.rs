use crate::operation::ProxyId;
use crate::operation::ProxyInterfaceType;
use crate::operation::ProxyKey;
use crate::operation::ProxyObjectType;
use crate::operation::ProxyType;
use crate::operation::ProxyUnionType;
use crate::operation::QueriedField;
use crate::operation::SelectionPath;
use indexmap::IndexMap;

/// Outcome of registering a [`ProxyKey`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Registration {
    /// The key was already registered; the proxy must be returned unchanged.
    Existing(ProxyId),

    /// A new, still-empty proxy was created for the key.
    New(ProxyId),
}

/// Arena of every proxy type produced while evaluating one operation.
///
/// Proxies are registered before their fields are evaluated, so a selection
/// that reaches the same `(type, path)` key while the proxy is still being
/// built resolves to the same [`ProxyId`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProxyRegistry {
    by_key: IndexMap<ProxyKey, ProxyId>,
    proxies: Vec<ProxyType>,
}
impl ProxyRegistry {
    /// Find the proxy registered for `type_name` at `path`.
    pub fn find(&self, type_name: &str, path: &SelectionPath) -> Option<&ProxyType> {
        self.lookup(&ProxyKey::new(type_name, path.to_owned()))
            .and_then(|id| self.get(id))
    }

    pub fn get(&self, id: ProxyId) -> Option<&ProxyType> {
        self.proxies.get(id.0)
    }

    pub fn interface(&self, id: ProxyId) -> Option<&ProxyInterfaceType> {
        self.get(id).and_then(ProxyType::as_interface)
    }

    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }

    /// All proxies, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ProxyType> {
        self.proxies.iter()
    }

    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    pub fn lookup(&self, key: &ProxyKey) -> Option<ProxyId> {
        self.by_key.get(key).copied()
    }

    pub fn object(&self, id: ProxyId) -> Option<&ProxyObjectType> {
        self.get(id).and_then(ProxyType::as_object)
    }

    /// Every object proxy narrowed from the named schema type, in
    /// registration order.
    pub fn objects_of_type<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = &'a ProxyObjectType> + 'a {
        self.proxies
            .iter()
            .filter_map(ProxyType::as_object)
            .filter(move |proxy| proxy.type_name() == type_name)
    }

    pub fn union(&self, id: ProxyId) -> Option<&ProxyUnionType> {
        self.get(id).and_then(ProxyType::as_union)
    }

    pub(crate) fn register_interface(&mut self, key: ProxyKey) -> Registration {
        self.register(key, |id, key| ProxyType::Interface(ProxyInterfaceType {
            fields: IndexMap::new(),
            id,
            implementors: IndexMap::new(),
            key,
        }))
    }

    pub(crate) fn register_object(
        &mut self,
        key: ProxyKey,
        abstract_supertype: Option<ProxyId>,
    ) -> Registration {
        self.register(key, |id, key| ProxyType::Object(ProxyObjectType {
            abstract_supertype,
            fields: IndexMap::new(),
            id,
            key,
        }))
    }

    pub(crate) fn register_union(&mut self, key: ProxyKey) -> Registration {
        self.register(key, |id, key| ProxyType::Union(ProxyUnionType {
            branches: IndexMap::new(),
            id,
            key,
        }))
    }

    fn register(
        &mut self,
        key: ProxyKey,
        make_proxy: impl FnOnce(ProxyId, ProxyKey) -> ProxyType,
    ) -> Registration {
        if let Some(id) = self.by_key.get(&key) {
            log::trace!("reusing proxy `{}` ({id})", key.proxy_name());
            return Registration::Existing(*id);
        }

        let id = ProxyId(self.proxies.len());
        log::trace!("registering proxy `{}` ({id})", key.proxy_name());
        self.by_key.insert(key.to_owned(), id);
        self.proxies.push(make_proxy(id, key));
        Registration::New(id)
    }

    pub(crate) fn set_fields(
        &mut self,
        id: ProxyId,
        fields: IndexMap<String, QueriedField>,
    ) {
        match self.proxies.get_mut(id.0) {
            Some(ProxyType::Interface(proxy)) => proxy.fields = fields,
            Some(ProxyType::Object(proxy)) => proxy.fields = fields,
            Some(ProxyType::Union(_)) | None => (),
        }
    }

    pub(crate) fn set_implementors(
        &mut self,
        id: ProxyId,
        implementors: IndexMap<String, ProxyId>,
    ) {
        if let Some(ProxyType::Interface(proxy)) = self.proxies.get_mut(id.0) {
            proxy.implementors = implementors;
        }
    }

    pub(crate) fn set_branches(
        &mut self,
        id: ProxyId,
        branches: IndexMap<String, ProxyId>,
    ) {
        if let Some(ProxyType::Union(proxy)) = self.proxies.get_mut(id.0) {
            proxy.branches = branches;
        }
    }
}
