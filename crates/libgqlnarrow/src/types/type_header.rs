use crate::loc;

/// Identity shared by every named schema type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeHeader {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl TypeHeader {
    pub(crate) fn builtin(name: &str) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: None,
            name: name.to_string(),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The `"""` block written immediately before the definition, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
