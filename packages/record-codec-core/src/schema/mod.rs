//! Record schema, field descriptors and schema validation.

mod field;
#[allow(clippy::module_inception)]
mod schema;
pub(crate) mod validation;

pub use field::FieldDescriptor;
pub use schema::Schema;
