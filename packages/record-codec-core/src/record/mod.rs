//! Record values and the record builder.

mod builder;
#[allow(clippy::module_inception)]
mod record;

pub use builder::RecordBuilder;
pub use record::Record;
