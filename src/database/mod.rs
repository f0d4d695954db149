mod error;
mod model;
mod queries;
mod query_builder;
mod schema;

pub use error::*;
pub use model::*;
pub use queries::Database;

#[cfg(test)]
pub(crate) use queries::tests::test_database;
