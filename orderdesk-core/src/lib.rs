pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod order;
pub mod persist;
pub mod schema;

pub use config::DeskConfig;
pub use error::{ErrorKind, OrderError, Result};
pub use field::{FieldValue, FieldWidget};
pub use form::{FormState, ItemForm, ItemRecord, Order};
pub use order::{FormId, OrderPanel};
pub use schema::{lookup, FieldSpec, ItemKind};
