use crate::ast;
use crate::operation::FragmentDefinition;
use crate::operation::NarrowingContext;
use crate::operation::NarrowingError;
use crate::operation::ProxyId;
use crate::operation::ProxyTypeRef;
use crate::operation::QueriedField;
use crate::operation::SchemaReferenceKind;
use crate::operation::SelectionPath;
use crate::operation::queried_field;
use crate::types::GraphQLType;
use crate::types::ObjectOrInterfaceTypeTrait;
use crate::types::TypeKind;
use indexmap::IndexMap;
use indexmap::IndexSet;

type Result<T> = std::result::Result<T, NarrowingError>;

impl<'schema, 'doc> NarrowingContext<'schema, 'doc> {
    /// Resolve the named fragment, narrowing it at most once per operation.
    ///
    /// `spread_path` is only used to report a spread of an undefined
    /// fragment.
    pub(crate) fn resolve_fragment(
        &mut self,
        fragment_name: &str,
        spread_path: &SelectionPath,
    ) -> Result<FragmentDefinition> {
        if let Some(fragment) = self.fragment_cache.get(fragment_name) {
            self.stats.fragment_cache_hits += 1;
            return Ok(fragment.to_owned());
        }

        self.check_fragment_cycle(fragment_name)?;

        let fragment_ast = self.fragments.get(fragment_name)
            .ok_or_else(|| NarrowingError::UndefinedFragmentError {
                fragment_name: fragment_name.to_string(),
                path: spread_path.to_owned(),
            })?;

        log::trace!("resolving fragment `{fragment_name}`");
        self.fragment_stack.insert(fragment_name.to_string());
        self.stats.fragment_resolutions += 1;
        let narrowed = self.narrow_fragment(fragment_ast);
        self.fragment_stack.pop();

        let fragment = narrowed?;
        self.fragment_cache.insert(fragment_name.to_string(), fragment.to_owned());
        Ok(fragment)
    }

    /// Fail if `fragment_name` is already on the resolution stack.
    pub(crate) fn check_fragment_cycle(&self, fragment_name: &str) -> Result<()> {
        let Some(cycle_start) = self.fragment_stack.get_index_of(fragment_name) else {
            return Ok(());
        };
        let mut cycle: Vec<String> = self.fragment_stack
            .iter()
            .skip(cycle_start)
            .cloned()
            .collect();
        cycle.push(fragment_name.to_string());
        Err(NarrowingError::FragmentCycleError { cycle })
    }

    fn narrow_fragment(
        &mut self,
        fragment_ast: &'doc ast::operation::FragmentDefinition,
    ) -> Result<FragmentDefinition> {
        let ast::operation::TypeCondition::On(type_name) = &fragment_ast.type_condition;
        let path = SelectionPath::for_fragment(fragment_ast.name.as_str());
        let selections: Vec<&'doc ast::operation::Selection> =
            fragment_ast.selection_set.items.iter().collect();

        let graphql_type = self.schema.get_type(type_name)
            .ok_or_else(|| NarrowingError::SchemaReferenceError {
                kind: SchemaReferenceKind::UndefinedType {
                    type_name: type_name.to_owned(),
                },
                path: path.to_owned(),
            })?;

        let (proxy, concrete_proxies) = match graphql_type {
            GraphQLType::Object(obj_type) => {
                let proxy_id = self.narrow_object(obj_type, selections, path, None)?;
                (ProxyTypeRef::Object(proxy_id), IndexMap::new())
            },

            GraphQLType::Interface(iface_type) => {
                let proxy_id = self.narrow_interface(iface_type, selections, path)?;
                let implementors = self.proxies.interface(proxy_id)
                    .map(|proxy| proxy.implementors().to_owned())
                    .unwrap_or_default();
                (ProxyTypeRef::Interface(proxy_id), implementors)
            },

            GraphQLType::Union(union_type) => {
                let proxy_id = self.narrow_union(union_type, selections, path)?;
                let branches = self.proxies.union(proxy_id)
                    .map(|proxy| proxy.branches().to_owned())
                    .unwrap_or_default();
                (ProxyTypeRef::Union(proxy_id), branches)
            },

            _ => return Err(NarrowingError::SchemaReferenceError {
                kind: SchemaReferenceKind::NotACompositeType {
                    type_name: type_name.to_owned(),
                },
                path,
            }),
        };

        Ok(FragmentDefinition {
            concrete_proxies,
            def_location: self.execdoc_location(&fragment_ast.position),
            name: fragment_ast.name.to_owned(),
            proxy,
            type_kind: graphql_type.kind(),
            type_name: type_name.to_owned(),
        })
    }

    /// The fields a fragment spread adds to a proxy of `target_type_name`.
    ///
    /// Empty when the fragment can never apply to that type.
    pub(crate) fn fragment_contribution(
        &mut self,
        spread: &ast::operation::FragmentSpread,
        target_type_name: &str,
        path: &SelectionPath,
    ) -> Result<Vec<QueriedField>> {
        let fragment = self.resolve_fragment(spread.fragment_name.as_str(), path)?;
        let Some(source_proxy_id) = self.contributing_proxy(&fragment, target_type_name) else {
            log::trace!(
                "fragment `{}` contributes nothing to `{target_type_name}` at `{path}`",
                fragment.name(),
            );
            return Ok(vec![]);
        };

        Ok(self.proxies
            .get(source_proxy_id)
            .and_then(|proxy| proxy.fields())
            .map(|fields| fields.values().cloned().collect())
            .unwrap_or_default())
    }

    /// Every field node that the fragments behind `spreads` (and the
    /// fragments they spread in turn) select under `response_key` on
    /// `target_type`.
    pub(crate) fn spread_field_nodes<T: ObjectOrInterfaceTypeTrait>(
        &self,
        target_type: &T,
        spreads: &[&'doc ast::operation::FragmentSpread],
        response_key: &str,
    ) -> Vec<&'doc ast::operation::Field> {
        let mut nodes = vec![];
        let mut visited = IndexSet::new();
        for spread in spreads {
            self.collect_spread_field_nodes(
                target_type,
                spread.fragment_name.as_str(),
                response_key,
                &mut visited,
                &mut nodes,
            );
        }
        nodes
    }

    fn collect_spread_field_nodes<T: ObjectOrInterfaceTypeTrait>(
        &self,
        target_type: &T,
        fragment_name: &str,
        response_key: &str,
        visited: &mut IndexSet<&'doc str>,
        nodes: &mut Vec<&'doc ast::operation::Field>,
    ) {
        let Some(fragment_ast) = self.fragments.get(fragment_name) else {
            return;
        };
        if !visited.insert(fragment_ast.name.as_str()) {
            return;
        }

        let ast::operation::TypeCondition::On(type_name) = &fragment_ast.type_condition;
        let flattened = self.flatten_selections(type_name, fragment_ast.selection_set.items.iter());
        let bucket = self.applicable_to_object(target_type, &flattened);
        nodes.extend(
            bucket.fields
                .iter()
                .copied()
                .filter(|field| queried_field::response_key(field) == response_key),
        );
        for spread in bucket.spreads {
            self.collect_spread_field_nodes(
                target_type,
                spread.fragment_name.as_str(),
                response_key,
                visited,
                nodes,
            );
        }
    }

    fn contributing_proxy(
        &self,
        fragment: &FragmentDefinition,
        target_type_name: &str,
    ) -> Option<ProxyId> {
        if fragment.type_name() == target_type_name {
            return Some(fragment.proxy().proxy_id());
        }
        if let Some(proxy_id) = fragment.concrete_proxies().get(target_type_name) {
            return Some(*proxy_id);
        }

        let target_is_interface = self.schema.interface_type(target_type_name).is_some();
        if fragment.type_kind() == TypeKind::Interface
            && target_is_interface
            && self.is_subtype_of(target_type_name, fragment.type_name()) {
            return Some(fragment.proxy().proxy_id());
        }
        None
    }
}
