//! ADQL construction from a [`FilterState`](koi_model::FilterState).

pub mod builder;
pub mod clauses;

pub use builder::{CatalogQueryBuilder, build_query, select_clause, where_clauses};
