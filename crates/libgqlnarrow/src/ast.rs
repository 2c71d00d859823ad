//! The [`graphql_parser`] syntax tree, pinned to owned `'static` strings so
//! parsed documents can outlive the text they were parsed from.

/// Line and column of a node, as reported by the parser.
pub type AstPos = graphql_parser::Pos;

/// Executable documents: operations and fragment definitions.
pub mod operation {
    use graphql_parser::query as gp;

    pub use gp::ParseError;

    pub type Definition = gp::Definition<'static, String>;
    pub type Document = gp::Document<'static, String>;
    pub type Field = gp::Field<'static, String>;
    pub type FragmentDefinition = gp::FragmentDefinition<'static, String>;
    pub type FragmentSpread = gp::FragmentSpread<'static, String>;
    pub type OperationDefinition = gp::OperationDefinition<'static, String>;
    pub type Selection = gp::Selection<'static, String>;
    pub type SelectionSet = gp::SelectionSet<'static, String>;
    pub type Type = gp::Type<'static, String>;
    pub type TypeCondition = gp::TypeCondition<'static, String>;
    pub type Value = gp::Value<'static, String>;
    pub type VariableDefinition = gp::VariableDefinition<'static, String>;

    pub fn parse(content: &str) -> Result<Document, ParseError> {
        Ok(gp::parse_query::<String>(content)?.into_static())
    }
}

/// Schema (SDL) documents.
pub mod schema {
    use graphql_parser::schema as gp;

    pub use gp::ParseError;

    pub type Definition = gp::Definition<'static, String>;
    pub type Document = gp::Document<'static, String>;
    pub type Field = gp::Field<'static, String>;
    pub type InputValue = gp::InputValue<'static, String>;
    pub type SchemaDefinition = gp::SchemaDefinition<'static, String>;
    pub type TypeDefinition = gp::TypeDefinition<'static, String>;
    pub type TypeExtension = gp::TypeExtension<'static, String>;

    pub fn parse(content: &str) -> Result<Document, ParseError> {
        Ok(gp::parse_schema::<String>(content)?.into_static())
    }
}
