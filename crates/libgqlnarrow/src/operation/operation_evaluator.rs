use crate::ast;
use crate::loc;
use crate::operation::FragmentIndex;
use crate::operation::NarrowingContext;
use crate::operation::NarrowingError;
use crate::operation::OperationArtifact;
use crate::operation::OperationEvaluationError;
use crate::operation::OperationKind;
use crate::operation::QueriedField;
use crate::operation::SchemaReferenceKind;
use crate::operation::SelectionPath;
use crate::operation::UnsupportedConstructKind;
use crate::schema::Schema;
use crate::types::ObjectType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, OperationEvaluationError>;

/// Narrows the operations of one executable document against a [`Schema`].
///
/// Every call to [`evaluate()`](Self::evaluate) starts from a fresh
/// [`NarrowingContext`], so operations never observe each other's proxies or
/// fragment cache and may be evaluated in any order (or in parallel).
#[derive(Clone, Copy, Debug)]
pub struct OperationEvaluator<'schema, 'doc> {
    fragments: &'doc FragmentIndex<'doc>,
    schema: &'schema Schema,
}
impl<'schema, 'doc> OperationEvaluator<'schema, 'doc> {
    pub fn new(schema: &'schema Schema, fragments: &'doc FragmentIndex<'doc>) -> Self {
        Self {
            fragments,
            schema,
        }
    }

    pub fn evaluate(
        &self,
        op_def: &'doc ast::operation::OperationDefinition,
    ) -> Result<OperationArtifact> {
        use ast::operation::OperationDefinition;

        let no_var_defs: &'doc [ast::operation::VariableDefinition] = &[];
        let (kind, name, position, var_defs, selection_set) = match op_def {
            OperationDefinition::Mutation(mutation) => (
                OperationKind::Mutation,
                mutation.name.as_deref(),
                &mutation.position,
                mutation.variable_definitions.as_slice(),
                &mutation.selection_set,
            ),
            OperationDefinition::Query(query) => (
                OperationKind::Query,
                query.name.as_deref(),
                &query.position,
                query.variable_definitions.as_slice(),
                &query.selection_set,
            ),
            OperationDefinition::SelectionSet(selection_set) => (
                OperationKind::Query,
                None,
                &selection_set.span.0,
                no_var_defs,
                selection_set,
            ),
            OperationDefinition::Subscription(subscription) => (
                OperationKind::Subscription,
                subscription.name.as_deref(),
                &subscription.position,
                subscription.variable_definitions.as_slice(),
                &subscription.selection_set,
            ),
        };

        let location = loc::SourceLocation::from_execdoc_ast_position(
            self.fragments.file_path(),
            position,
        );
        let Some(name) = name else {
            return Err(OperationEvaluationError {
                error: NarrowingError::UnnamedOperationError {
                    kind,
                    location: location.to_owned(),
                },
                location,
                operation_name: None,
            });
        };

        self.evaluate_named(kind, name, &location, var_defs, selection_set)
            .map_err(|error| OperationEvaluationError {
                error,
                location,
                operation_name: Some(name.to_string()),
            })
    }

    fn evaluate_named(
        &self,
        kind: OperationKind,
        name: &str,
        location: &loc::SourceLocation,
        var_defs: &'doc [ast::operation::VariableDefinition],
        selection_set: &'doc ast::operation::SelectionSet,
    ) -> std::result::Result<OperationArtifact, NarrowingError> {
        let mut ctx = NarrowingContext::new(self.schema, self.fragments);
        ctx.evaluate_variable_definitions(var_defs)?;

        let root_type = self.schema.root_operation_type(&kind)
            .ok_or_else(|| NarrowingError::SchemaReferenceError {
                kind: SchemaReferenceKind::UndefinedRootOperationType {
                    operation: kind,
                },
                path: SelectionPath::root(),
            })?;
        let root_field = ctx.evaluate_root_selection(root_type, selection_set)?;

        log::debug!(
            "narrowed {kind} `{name}`: {} proxies, {} fragment(s) resolved, {} fragment \
            cache hit(s)",
            ctx.proxies.len(),
            ctx.stats.fragment_resolutions,
            ctx.stats.fragment_cache_hits,
        );

        Ok(OperationArtifact {
            def_location: location.to_owned(),
            fragments: ctx.fragment_cache,
            kind,
            name: name.to_string(),
            proxies: ctx.proxies,
            root_field,
            root_type_name: root_type.name().to_string(),
            stats: ctx.stats,
            variables: ctx.variables,
        })
    }
}

impl<'schema, 'doc> NarrowingContext<'schema, 'doc> {
    /// Evaluate an operation's top-level selection set against its root type
    /// and return the single root field it selects.
    ///
    /// The root type itself is not registered as a proxy: spreads of
    /// fragments on the root type are expanded in place.
    pub(crate) fn evaluate_root_selection(
        &mut self,
        root_type: &'schema ObjectType,
        selection_set: &'doc ast::operation::SelectionSet,
    ) -> std::result::Result<QueriedField, NarrowingError> {
        let root_path = SelectionPath::root();
        let mut selections = vec![];
        self.expand_root_spreads(root_type.name(), selection_set.items.iter(), &mut selections)?;
        let flattened = self.flatten_selections(root_type.name(), selections);
        let bucket = self.applicable_to_object(root_type, &flattened);

        let mut fields: IndexMap<String, QueriedField> = IndexMap::new();
        self.evaluate_bucket(root_type, &bucket, &root_path, &mut fields)?;

        let response_keys: Vec<String> = fields.keys().cloned().collect();
        match fields.into_values().next() {
            Some(root_field) if response_keys.len() == 1 => Ok(root_field),
            _ => Err(NarrowingError::UnsupportedConstructError {
                kind: UnsupportedConstructKind::MultipleRootFields { response_keys },
                path: root_path,
            }),
        }
    }

    fn expand_root_spreads(
        &mut self,
        root_type_name: &str,
        selections: impl IntoIterator<Item = &'doc ast::operation::Selection>,
        expanded: &mut Vec<&'doc ast::operation::Selection>,
    ) -> std::result::Result<(), NarrowingError> {
        use ast::operation::Selection;

        for selection in selections {
            match selection {
                Selection::FragmentSpread(spread)
                    if self.fragments.type_condition(&spread.fragment_name)
                        == Some(root_type_name) => {
                    let fragment_name = spread.fragment_name.as_str();
                    let Some(fragment_ast) = self.fragments.get(fragment_name) else {
                        expanded.push(selection);
                        continue;
                    };
                    self.check_fragment_cycle(fragment_name)?;

                    log::trace!("expanding root fragment `{fragment_name}` in place");
                    self.fragment_stack.insert(fragment_name.to_string());
                    let result = self.expand_root_spreads(
                        root_type_name,
                        fragment_ast.selection_set.items.iter(),
                        expanded,
                    );
                    self.fragment_stack.pop();
                    result?;
                },

                Selection::InlineFragment(inline_frag)
                    if applies_to_root(inline_frag.type_condition.as_ref(), root_type_name) =>
                    self.expand_root_spreads(
                        root_type_name,
                        inline_frag.selection_set.items.iter(),
                        expanded,
                    )?,

                _ => expanded.push(selection),
            }
        }
        Ok(())
    }
}

fn applies_to_root(
    type_condition: Option<&ast::operation::TypeCondition>,
    root_type_name: &str,
) -> bool {
    match type_condition {
        Some(ast::operation::TypeCondition::On(cond_type_name)) => cond_type_name == root_type_name,
        None => true,
    }
}
