pub mod schema_ext;
pub mod spec;

pub use schema_ext::SchemaExt;
