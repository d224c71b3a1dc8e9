// ==========================================
// Furniture Catalog - repository layer
// ==========================================
// Data access only, no business logic. All statements parameterized.
// ==========================================

pub mod catalog_repo;
pub mod error;
pub mod query_repo;

pub use catalog_repo::CatalogStore;
pub use error::{RepositoryError, RepositoryResult};
pub use query_repo::QueryService;
