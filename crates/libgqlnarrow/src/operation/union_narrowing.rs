use crate::ast;
use crate::operation::NarrowingContext;
use crate::operation::NarrowingError;
use crate::operation::ProxyId;
use crate::operation::ProxyKey;
use crate::operation::SelectionPath;
use crate::operation::proxy_registry::Registration;
use crate::operation::selection_flattener::FlattenedSelections;
use crate::types::ObjectType;
use crate::types::UnionType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, NarrowingError>;

impl<'schema, 'doc> NarrowingContext<'schema, 'doc> {
    /// Narrow a union-typed selection at `path` into one object proxy per
    /// member the selection reaches.
    ///
    /// Branches are ordered by first mention in the document (a selection on
    /// an interface mentions every member implementing it, in member order),
    /// followed by any remaining members that fragment spreads give fields
    /// to. Every branch carries a `__typename` discriminator.
    pub(crate) fn narrow_union(
        &mut self,
        union_type: &'schema UnionType,
        selections: Vec<&'doc ast::operation::Selection>,
        path: SelectionPath,
    ) -> Result<ProxyId> {
        let key = ProxyKey::new(union_type.name(), path.to_owned());
        let union_proxy_id = match self.proxies.register_union(key) {
            Registration::Existing(proxy_id) => return Ok(proxy_id),
            Registration::New(proxy_id) => proxy_id,
        };

        let flattened = self.flatten_selections(union_type.name(), selections);
        let members = union_type.member_types(self.schema);
        let mut branch_types = self.touched_members(union_type, &members, &flattened, &path);

        for member in members.iter().copied() {
            if branch_types.iter().any(|branch| branch.name() == member.name()) {
                continue;
            }
            let bucket = self.applicable_to_object(member, &flattened);
            let mut contributes = false;
            for spread in bucket.spreads.iter().copied() {
                let branch_path = path.with_type_condition(member.name());
                if !self.fragment_contribution(spread, member.name(), &branch_path)?.is_empty() {
                    contributes = true;
                    break;
                }
            }
            if contributes {
                branch_types.push(member);
            }
        }

        let mut branches = IndexMap::new();
        for member in branch_types {
            let bucket = self.applicable_to_object(member, &flattened);
            let branch_proxy_id = self.build_object_proxy(
                member,
                bucket,
                path.with_type_condition(member.name()),
                Some(union_proxy_id),
                /* inject_typename = */ true,
            )?;
            branches.insert(member.name().to_string(), branch_proxy_id);
        }

        self.proxies.set_branches(union_proxy_id, branches);
        Ok(union_proxy_id)
    }

    /// Members of `union_type` that some bucket of `flattened` explicitly
    /// targets, in the order the buckets were first touched.
    fn touched_members(
        &self,
        union_type: &UnionType,
        members: &[&'schema ObjectType],
        flattened: &FlattenedSelections<'doc>,
        path: &SelectionPath,
    ) -> Vec<&'schema ObjectType> {
        let mut touched: Vec<&'schema ObjectType> = vec![];
        for type_name in flattened.type_names() {
            if type_name == union_type.name() {
                continue;
            }

            let matching: Vec<&'schema ObjectType> = members.iter()
                .copied()
                .filter(|member| self.is_subtype_of(member.name(), type_name))
                .collect();
            if matching.is_empty() {
                log::warn!(
                    "selection on `{type_name}` at `{path}` can never match a member \
                    of union `{}`; skipping it",
                    union_type.name(),
                );
                continue;
            }

            for member in matching {
                if !touched.iter().any(|seen| seen.name() == member.name()) {
                    touched.push(member);
                }
            }
        }
        touched
    }
}
