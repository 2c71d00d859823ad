use crate::ast;
use crate::operation::NarrowingContext;
use crate::operation::NarrowingError;
use crate::operation::ProxyId;
use crate::operation::ProxyKey;
use crate::operation::QueriedField;
use crate::operation::SelectionPath;
use crate::operation::proxy_registry::Registration;
use crate::operation::selection_flattener::SelectionBucket;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::ObjectType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, NarrowingError>;

pub(crate) const ID_FIELD_NAME: &str = "id";
pub(crate) const TYPENAME_FIELD_NAME: &str = "__typename";

impl<'schema, 'doc> NarrowingContext<'schema, 'doc> {
    /// Narrow `obj_type` to the fields `selections` pick out of it at `path`.
    ///
    /// Inline fragments on the object itself, on interfaces it implements and
    /// on unions containing it are folded in; fragments on unrelated types
    /// are dropped.
    pub(crate) fn narrow_object(
        &mut self,
        obj_type: &'schema ObjectType,
        selections: Vec<&'doc ast::operation::Selection>,
        path: SelectionPath,
        abstract_supertype: Option<ProxyId>,
    ) -> Result<ProxyId> {
        let flattened = self.flatten_selections(obj_type.name(), selections);
        let bucket = self.applicable_to_object(obj_type, &flattened);
        self.build_object_proxy(
            obj_type,
            bucket,
            path,
            abstract_supertype,
            /* inject_typename = */ false,
        )
    }

    /// Register (or reuse) the object proxy for `(obj_type, path)` and fill
    /// it from the selections in `bucket`.
    pub(crate) fn build_object_proxy(
        &mut self,
        obj_type: &'schema ObjectType,
        bucket: SelectionBucket<'doc>,
        path: SelectionPath,
        abstract_supertype: Option<ProxyId>,
        inject_typename: bool,
    ) -> Result<ProxyId> {
        let key = ProxyKey::new(obj_type.name(), path.to_owned());
        let proxy_id = match self.proxies.register_object(key, abstract_supertype) {
            Registration::Existing(proxy_id) => return Ok(proxy_id),
            Registration::New(proxy_id) => proxy_id,
        };

        let mut fields = IndexMap::new();
        if obj_type.is_node() && !bucket.selects(ID_FIELD_NAME) {
            self.inject_field(obj_type, ID_FIELD_NAME, &path, &mut fields)?;
        }
        if inject_typename && !bucket.selects(TYPENAME_FIELD_NAME) {
            self.inject_field(obj_type, TYPENAME_FIELD_NAME, &path, &mut fields)?;
        }

        self.evaluate_bucket(obj_type, &bucket, &path, &mut fields)?;
        self.proxies.set_fields(proxy_id, fields);
        Ok(proxy_id)
    }

    /// Evaluate the plain field selections in `bucket` against `parent_type`
    /// and then merge in whatever its fragment spreads contribute.
    ///
    /// A composite field selected both directly and through a spread is
    /// narrowed once at `path` from the union of every sub-selection.
    pub(crate) fn evaluate_bucket<T: ObjectOrInterfaceTypeTrait>(
        &mut self,
        parent_type: &'schema T,
        bucket: &SelectionBucket<'doc>,
        path: &SelectionPath,
        fields: &mut IndexMap<String, QueriedField>,
    ) -> Result<()> {
        for (response_key, mut nodes) in bucket.fields_by_response_key() {
            if has_sub_selection(&nodes) {
                nodes.extend(self.spread_field_nodes(parent_type, &bucket.spreads, response_key));
            }
            let field = self.evaluate_field(
                parent_type,
                nodes.as_slice(),
                path.with_field(response_key),
            )?;
            fields.insert(response_key.to_string(), field);
        }

        for spread in bucket.spreads.iter().copied() {
            let contribution = self.fragment_contribution(spread, parent_type.name(), path)?;
            self.merge_contribution(parent_type, bucket, path, fields, contribution, spread)?;
        }
        Ok(())
    }

    /// Fold fragment-provided fields into `fields`.
    ///
    /// An injected field is replaced in place by the one the fragment
    /// actually selected. A composite field that an earlier fragment already
    /// provided is re-narrowed at `path` from every spread's sub-selection.
    /// Any other repeat keeps the first selection.
    fn merge_contribution<T: ObjectOrInterfaceTypeTrait>(
        &mut self,
        parent_type: &'schema T,
        bucket: &SelectionBucket<'doc>,
        path: &SelectionPath,
        fields: &mut IndexMap<String, QueriedField>,
        contribution: Vec<QueriedField>,
        spread: &ast::operation::FragmentSpread,
    ) -> Result<()> {
        for field in contribution {
            let response_key = field.response_key().to_string();
            let Some(existing) = fields.get(&response_key) else {
                fields.insert(response_key, field);
                continue;
            };

            let site_path = path.with_field(response_key.as_str());
            if existing.is_injected() {
                fields.insert(response_key, field);
            } else if existing.proxy_type().is_some()
                && field.proxy_type().is_some()
                && existing.path() != &site_path {
                let nodes = self.spread_field_nodes(
                    parent_type,
                    &bucket.spreads,
                    response_key.as_str(),
                );
                let merged = self.evaluate_field(parent_type, nodes.as_slice(), site_path)?;
                fields.insert(response_key, merged);
            } else if existing.proxy_type().is_none() {
                log::debug!(
                    "fragment `{}` also selects `{response_key}` at `{path}`; keeping \
                    the first selection",
                    spread.fragment_name,
                );
            }
        }
        Ok(())
    }

    pub(crate) fn inject_field<T: ObjectOrInterfaceTypeTrait>(
        &self,
        parent_type: &'schema T,
        field_name: &str,
        path: &SelectionPath,
        fields: &mut IndexMap<String, QueriedField>,
    ) -> Result<()> {
        if let Some(field) = self.injected_field(parent_type, field_name, path)? {
            fields.insert(field_name.to_string(), field);
        }
        Ok(())
    }
}

fn has_sub_selection(nodes: &[&ast::operation::Field]) -> bool {
    nodes.iter().any(|node| !node.selection_set.items.is_empty())
}
