pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod schema;
pub mod services;
pub mod store;

pub use error::*;
pub use models::*;
pub use router::*;
pub use schema::{build_schema, ClinicSchema, MutationRoot, QueryRoot};
pub use services::*;
pub use store::{ClinicStore, SharedStore};
