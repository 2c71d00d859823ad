use crate::ast;
use crate::operation::NarrowingContext;
use crate::operation::NarrowingError;
use crate::operation::SelectionPath;
use crate::operation::VariableBindingKind;
use crate::operation::VariableDefinition;
use crate::operation::VariableUse;
use crate::types::Field;
use crate::types::TypeAnnotation;
use crate::types::TypeResolver;

type Result<T> = std::result::Result<T, NarrowingError>;

/// Variables may be typed as a list of a named type, but not as a list of
/// lists.
const MAX_VARIABLE_LIST_DEPTH: usize = 1;

impl<'schema, 'doc> NarrowingContext<'schema, 'doc> {
    /// Resolve and record an operation's variable definitions, in declaration
    /// order.
    pub(crate) fn evaluate_variable_definitions(
        &mut self,
        var_defs: &'doc [ast::operation::VariableDefinition],
    ) -> Result<()> {
        let resolver = TypeResolver::new(self.schema)
            .with_max_list_depth(MAX_VARIABLE_LIST_DEPTH);

        for var_def in var_defs {
            let def_location = self.execdoc_location(&var_def.position);
            let type_annotation = TypeAnnotation::from_ast_type(&def_location, &var_def.var_type);
            let resolved_type = resolver.resolve(&type_annotation)
                .map_err(|err| NarrowingError::from_type_resolution(
                    err,
                    || format!("variable `${}`", var_def.name),
                    &SelectionPath::root(),
                ))?;

            log::trace!("variable `${}`: {resolved_type}", var_def.name);
            self.variables.insert(var_def.name.to_owned(), VariableDefinition {
                def_location,
                default_value: var_def.default_value
                    .as_ref()
                    .map(|value| value.to_string()),
                name: var_def.name.to_owned(),
                resolved_type,
                type_annotation,
            });
        }
        Ok(())
    }

    /// Bind every `$variable` referenced by `field_node`'s arguments to the
    /// position of the argument it is passed to.
    ///
    /// Uses are returned ordered by argument position. A reference nested in
    /// a list or input-object literal binds to the enclosing argument.
    pub(crate) fn bind_variables(
        &self,
        field_def: &Field,
        field_node: &ast::operation::Field,
        path: &SelectionPath,
    ) -> Result<Vec<VariableUse>> {
        let mut references = 0;
        let mut uses = vec![];

        for (argument_name, value) in &field_node.arguments {
            let mut variable_names = vec![];
            collect_variable_names(value, &mut variable_names);
            references += variable_names.len();

            let Some(argument_position) = field_def.parameter_position(argument_name) else {
                log::debug!(
                    "`{}.{}` has no argument named `{argument_name}`; ignoring it at `{path}`",
                    field_def.parent_type_name(),
                    field_def.name(),
                );
                continue;
            };

            for variable_name in variable_names {
                if !self.variables.contains_key(variable_name) {
                    return Err(NarrowingError::VariableBindingError {
                        kind: VariableBindingKind::UndeclaredVariable {
                            argument_name: argument_name.to_owned(),
                            variable_name: variable_name.to_string(),
                        },
                        path: path.to_owned(),
                    });
                }
                uses.push(VariableUse {
                    argument_name: argument_name.to_owned(),
                    argument_position,
                    field_path: path.to_owned(),
                    variable_name: variable_name.to_string(),
                });
            }
        }

        if uses.len() != references {
            return Err(NarrowingError::VariableBindingError {
                kind: VariableBindingKind::BindingCountMismatch {
                    bindings: uses.len(),
                    field_name: field_def.name().to_string(),
                    references,
                },
                path: path.to_owned(),
            });
        }

        uses.sort_by_key(|var_use| var_use.argument_position);
        Ok(uses)
    }
}

fn collect_variable_names<'a>(value: &'a ast::operation::Value, names: &mut Vec<&'a str>) {
    use ast::operation::Value;

    match value {
        Value::Variable(name) => names.push(name.as_str()),
        Value::List(items) => {
            for item in items {
                collect_variable_names(item, names);
            }
        },
        Value::Object(entries) => {
            for entry_value in entries.values() {
                collect_variable_names(entry_value, names);
            }
        },
        Value::Boolean(_)
            | Value::Enum(_)
            | Value::Float(_)
            | Value::Int(_)
            | Value::Null
            | Value::String(_) => (),
    }
}
