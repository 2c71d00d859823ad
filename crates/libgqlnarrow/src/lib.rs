//! Semantic narrowing core for schema-driven GraphQL client generators.
//!
//! Given a [`Schema`](schema::Schema) and an executable document, the
//! [`DocumentEvaluator`](operation::DocumentEvaluator) resolves every selection
//! against the schema and produces one
//! [`OperationArtifact`](operation::OperationArtifact) per operation: a closed,
//! operation-scoped graph of "proxy" types that a code-emission stage can turn
//! into statically typed client bindings.

pub mod ast;
pub mod file_reader;
pub mod loc;
pub mod operation;
pub mod schema;
pub mod types;
