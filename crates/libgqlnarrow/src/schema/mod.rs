mod schema;
mod schema_builder;

pub use schema::Schema;
pub use schema::SchemaSnapshotError;
pub use schema::SNAPSHOT_SIZE_LIMIT;
pub use schema_builder::NamedTypeDefLocation;
pub use schema_builder::SchemaBuildError;
pub use schema_builder::SchemaBuilder;

#[cfg(test)]
mod tests;
