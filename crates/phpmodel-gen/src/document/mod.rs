//! In-memory model of an already-merged OpenAPI 3 document.
//!
//! Only the component surface this generator consumes is modeled: named
//! schemas, request bodies and responses. Paths, parameters and security
//! schemes are accepted and ignored during deserialization.

pub mod schema;

use indexmap::IndexMap;
use serde::Deserialize;
pub use schema::{AdditionalProperties, Schema, SchemaOrRef, SchemaType};

/// A reference or an inline component object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ObjectOrReference<T> {
  Ref {
    #[serde(rename = "$ref")]
    ref_path: String,
  },
  Object(T),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Info {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub version: String,
  #[serde(default)]
  pub description: Option<String>,
}

/// One entry of a component's `content` map.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MediaTypeObject {
  #[serde(default)]
  pub schema: Option<SchemaOrRef>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RequestBody {
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub content: IndexMap<String, MediaTypeObject>,
  #[serde(default)]
  pub required: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Response {
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub content: IndexMap<String, MediaTypeObject>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Components {
  #[serde(default)]
  pub schemas: IndexMap<String, SchemaOrRef>,
  #[serde(rename = "requestBodies", default)]
  pub request_bodies: IndexMap<String, ObjectOrReference<RequestBody>>,
  #[serde(default)]
  pub responses: IndexMap<String, ObjectOrReference<Response>>,
}

/// The merged OpenAPI document as handed to the generator.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Document {
  #[serde(default)]
  pub openapi: String,
  #[serde(default)]
  pub info: Info,
  #[serde(default)]
  pub components: Components,
}
