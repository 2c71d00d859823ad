use crate::ast;
use crate::operation::NarrowingContext;
use crate::operation::NarrowingError;
use crate::operation::ProxyId;
use crate::operation::ProxyKey;
use crate::operation::SelectionPath;
use crate::operation::object_narrowing::ID_FIELD_NAME;
use crate::operation::object_narrowing::TYPENAME_FIELD_NAME;
use crate::operation::proxy_registry::Registration;
use crate::types::InterfaceType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, NarrowingError>;

impl<'schema, 'doc> NarrowingContext<'schema, 'doc> {
    /// Narrow an interface-typed selection at `path`.
    ///
    /// Produces an interface proxy carrying the fields selected at the
    /// interface level (always including a `__typename` discriminator) and
    /// one object proxy per implementing type, keyed at
    /// `path` + `... on <Implementor>`. Each implementor proxy holds the
    /// interface-level selections plus whatever was selected specifically
    /// for that implementor.
    pub(crate) fn narrow_interface(
        &mut self,
        iface_type: &'schema InterfaceType,
        selections: Vec<&'doc ast::operation::Selection>,
        path: SelectionPath,
    ) -> Result<ProxyId> {
        let key = ProxyKey::new(iface_type.name(), path.to_owned());
        let iface_proxy_id = match self.proxies.register_interface(key) {
            Registration::Existing(proxy_id) => return Ok(proxy_id),
            Registration::New(proxy_id) => proxy_id,
        };

        let flattened = self.flatten_selections(iface_type.name(), selections);

        let mut implementors = IndexMap::new();
        for obj_type in self.schema.implementors_of(iface_type.name()) {
            let bucket = self.applicable_to_object(obj_type, &flattened);
            let obj_proxy_id = self.build_object_proxy(
                obj_type,
                bucket,
                path.with_type_condition(obj_type.name()),
                Some(iface_proxy_id),
                /* inject_typename = */ false,
            )?;
            implementors.insert(obj_type.name().to_string(), obj_proxy_id);
        }

        let bucket = self.applicable_to_interface(iface_type, &flattened);
        let mut fields = IndexMap::new();
        if iface_type.is_node() && !bucket.selects(ID_FIELD_NAME) {
            self.inject_field(iface_type, ID_FIELD_NAME, &path, &mut fields)?;
        }
        if !bucket.selects(TYPENAME_FIELD_NAME) {
            self.inject_field(iface_type, TYPENAME_FIELD_NAME, &path, &mut fields)?;
        }
        self.evaluate_bucket(iface_type, &bucket, &path, &mut fields)?;

        log::trace!(
            "narrowed interface `{}` at `{path}` into {} implementor(s)",
            iface_type.name(),
            implementors.len(),
        );
        self.proxies.set_fields(iface_proxy_id, fields);
        self.proxies.set_implementors(iface_proxy_id, implementors);
        Ok(iface_proxy_id)
    }
}
