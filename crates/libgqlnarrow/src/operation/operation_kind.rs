/// The three kinds of executable GraphQL operations.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// The name GraphQL assumes for this operation's root type when the
    /// schema does not override it with a `schema { ... }` block.
    pub fn default_root_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }

    /// The keyword used to declare this kind of operation in a document.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
