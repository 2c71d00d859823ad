use crate::ast;
use crate::loc;
use crate::operation::ProxyTypeRef;
use crate::operation::SelectionPath;
use crate::operation::VariableUse;
use crate::types::Field;
use crate::types::ResolvedType;

/// One selected field within one operation.
#[derive(Clone, Debug, PartialEq)]
pub struct QueriedField {
    pub(crate) alias: Option<String>,
    pub(crate) definition: Field,
    pub(crate) injected: bool,
    pub(crate) origin_type: String,
    pub(crate) path: SelectionPath,
    pub(crate) proxy_type: Option<ProxyTypeRef>,
    pub(crate) resolved_type: ResolvedType,
    pub(crate) response_key: String,
    pub(crate) selection_location: Option<loc::SourceLocation>,
    pub(crate) variable_uses: Vec<VariableUse>,
}
impl QueriedField {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The schema definition of the selected field.
    pub fn definition(&self) -> &Field {
        &self.definition
    }

    /// `true` for fields the author did not select but that were added
    /// automatically (`id` for Node types, `__typename` discriminators).
    pub fn is_injected(&self) -> bool {
        self.injected
    }

    pub fn name(&self) -> &str {
        self.definition.name()
    }

    /// The object or interface type the field was selected on.
    pub fn origin_type(&self) -> &str {
        self.origin_type.as_str()
    }

    pub fn path(&self) -> &SelectionPath {
        &self.path
    }

    /// The narrowed proxy type of this field's value, for object, interface
    /// and union typed fields. `None` for scalar and enum fields.
    pub fn proxy_type(&self) -> Option<&ProxyTypeRef> {
        self.proxy_type.as_ref()
    }

    pub fn resolved_type(&self) -> &ResolvedType {
        &self.resolved_type
    }

    /// The key under which this field appears in a response: its alias if it
    /// has one, otherwise its name.
    pub fn response_key(&self) -> &str {
        self.response_key.as_str()
    }

    /// Where the author selected this field. `None` for injected fields.
    pub fn selection_location(&self) -> Option<&loc::SourceLocation> {
        self.selection_location.as_ref()
    }

    /// Variable uses bound to this field's arguments, ordered by argument
    /// position.
    pub fn variable_uses(&self) -> &[VariableUse] {
        self.variable_uses.as_slice()
    }
}

pub(crate) fn response_key(field: &ast::operation::Field) -> &str {
    field.alias.as_deref().unwrap_or(field.name.as_str())
}
