use crate::ast;
use crate::operation::NarrowingContext;
use crate::operation::queried_field::response_key;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeTrait;
use indexmap::IndexMap;

/// Plain field selections and fragment spreads that apply to one type name.
#[derive(Clone, Debug, Default)]
pub(crate) struct SelectionBucket<'doc> {
    pub(crate) fields: Vec<&'doc ast::operation::Field>,
    pub(crate) spreads: Vec<&'doc ast::operation::FragmentSpread>,
}
impl<'doc> SelectionBucket<'doc> {
    fn extend(&mut self, other: &SelectionBucket<'doc>) {
        self.fields.extend(other.fields.iter().copied());
        self.spreads.extend(other.spreads.iter().copied());
    }

    /// Group field selections by response key, in order of first
    /// appearance. Selections sharing a response key are merged.
    pub(crate) fn fields_by_response_key(
        &self,
    ) -> IndexMap<&'doc str, Vec<&'doc ast::operation::Field>> {
        let mut grouped: IndexMap<&'doc str, Vec<&'doc ast::operation::Field>> =
            IndexMap::new();
        for field in &self.fields {
            grouped.entry(response_key(field)).or_default().push(field);
        }
        grouped
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.spreads.is_empty()
    }

    pub(crate) fn selects(&self, response_key_name: &str) -> bool {
        self.fields.iter().any(|field| response_key(field) == response_key_name)
    }
}

/// A selection tree with every inline fragment unwrapped, bucketed by the
/// type name each selection applies to (in document order of first touch).
#[derive(Clone, Debug, Default)]
pub(crate) struct FlattenedSelections<'doc> {
    buckets: IndexMap<String, SelectionBucket<'doc>>,
}
impl<'doc> FlattenedSelections<'doc> {
    fn bucket_mut(&mut self, type_name: &str) -> &mut SelectionBucket<'doc> {
        self.buckets.entry(type_name.to_string()).or_default()
    }

    pub(crate) fn get(&self, type_name: &str) -> Option<&SelectionBucket<'doc>> {
        self.buckets.get(type_name)
    }

    pub(crate) fn type_names(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(|type_name| type_name.as_str())
    }
}

impl<'schema, 'doc> NarrowingContext<'schema, 'doc> {
    /// Unwrap every inline fragment in `selections` and sort field selections
    /// and fragment spreads into buckets keyed by the type they apply to.
    ///
    /// A selection nested under a type condition lands in the bucket of the
    /// narrower of the enclosing scope and the condition, so
    /// `... on Dog { ... on Animal { age } }` attributes `age` to `Dog`.
    /// Fragment spreads are bucketed by their fragment's type condition the
    /// same way but are not expanded here.
    pub(crate) fn flatten_selections(
        &self,
        scope_type_name: &str,
        selections: impl IntoIterator<Item = &'doc ast::operation::Selection>,
    ) -> FlattenedSelections<'doc> {
        let mut flattened = FlattenedSelections::default();
        self.flatten_into(scope_type_name, selections, &mut flattened);
        flattened
    }

    fn flatten_into(
        &self,
        scope_type_name: &str,
        selections: impl IntoIterator<Item = &'doc ast::operation::Selection>,
        flattened: &mut FlattenedSelections<'doc>,
    ) {
        use ast::operation::Selection;
        use ast::operation::TypeCondition;

        for selection in selections {
            match selection {
                Selection::Field(field) =>
                    flattened.bucket_mut(scope_type_name).fields.push(field),

                Selection::FragmentSpread(spread) => {
                    let target = match self.fragments.type_condition(&spread.fragment_name) {
                        Some(cond_type_name) =>
                            self.narrower_type(scope_type_name, cond_type_name),
                        // Left in scope so resolution reports it as undefined.
                        None => scope_type_name,
                    };
                    flattened.bucket_mut(target).spreads.push(spread);
                },

                Selection::InlineFragment(inline_frag) => {
                    let target = match &inline_frag.type_condition {
                        Some(TypeCondition::On(cond_type_name)) =>
                            self.narrower_type(scope_type_name, cond_type_name),
                        None => scope_type_name,
                    };
                    self.flatten_into(
                        target,
                        inline_frag.selection_set.items.iter(),
                        flattened,
                    );
                },
            }
        }
    }

    fn narrower_type<'a>(&self, scope_type_name: &'a str, cond_type_name: &'a str) -> &'a str {
        if self.is_subtype_of(scope_type_name, cond_type_name) {
            scope_type_name
        } else {
            cond_type_name
        }
    }

    /// Every selection that applies to a concrete object type: the buckets of
    /// the interfaces it implements (base-to-derived), then those of unions
    /// containing it, then its own.
    pub(crate) fn applicable_to_object<T: ObjectOrInterfaceTypeTrait>(
        &self,
        object_type: &T,
        flattened: &FlattenedSelections<'doc>,
    ) -> SelectionBucket<'doc> {
        let mut applicable = self.applicable_from_interfaces(
            self.schema.interface_ancestors(object_type),
            flattened,
        );

        for type_name in flattened.type_names() {
            let is_containing_union = self.schema
                .union_type(type_name)
                .map(|union_type| union_type.has_member(object_type.name()))
                .unwrap_or(false);
            if is_containing_union {
                if let Some(bucket) = flattened.get(type_name) {
                    applicable.extend(bucket);
                }
            }
        }

        if let Some(bucket) = flattened.get(object_type.name()) {
            applicable.extend(bucket);
        }
        applicable
    }

    /// Selections that apply at the level of an interface itself: the
    /// buckets of its base interfaces (base-to-derived) and its own.
    pub(crate) fn applicable_to_interface(
        &self,
        iface_type: &'schema InterfaceType,
        flattened: &FlattenedSelections<'doc>,
    ) -> SelectionBucket<'doc> {
        let mut ifaces = self.schema.interface_ancestors(iface_type);
        ifaces.push(iface_type);
        self.applicable_from_interfaces(ifaces, flattened)
    }

    fn applicable_from_interfaces(
        &self,
        ifaces: Vec<&'schema InterfaceType>,
        flattened: &FlattenedSelections<'doc>,
    ) -> SelectionBucket<'doc> {
        let mut applicable = SelectionBucket::default();
        for iface in ifaces {
            if let Some(bucket) = flattened.get(iface.name()) {
                applicable.extend(bucket);
            }
        }
        applicable
    }
}
