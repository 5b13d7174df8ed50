use crate::generator::model::types::PhpValueType;

/// Which configured format string applies to a date-like value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateKind {
  Date,
  DateTime,
}

impl DateKind {
  /// Maps a date-like value type onto its format kind.
  #[must_use]
  pub fn of(value: &PhpValueType) -> Option<Self> {
    match value {
      PhpValueType::Date => Some(Self::Date),
      PhpValueType::DateTime => Some(Self::DateTime),
      _ => None,
    }
  }
}

/// One constructor parameter's JSON emission rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializerOp {
  /// Format a date scalar with the configured format string, optional
  /// chaining when nullable.
  DateScalar {
    property: String,
    wire_name: String,
    kind: DateKind,
    nullable: bool,
  },
  /// Map every element of a date array through the format function,
  /// preserving `null` when the whole array is null.
  DateArray {
    property: String,
    wire_name: String,
    kind: DateKind,
    nullable: bool,
  },
  /// Format only when the runtime value is date-like, pass through raw
  /// otherwise. Used for union-typed fields with a date branch.
  OneOfDate {
    property: String,
    wire_name: String,
    kind: DateKind,
  },
  /// Emit the field unchanged.
  Verbatim { property: String, wire_name: String },
}

impl SerializerOp {
  #[must_use]
  pub fn property(&self) -> &str {
    match self {
      Self::DateScalar { property, .. }
      | Self::DateArray { property, .. }
      | Self::OneOfDate { property, .. }
      | Self::Verbatim { property, .. } => property,
    }
  }
}

/// Overall shape of a class's custom `jsonSerialize` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializerShape {
  /// Field-by-field object output.
  Object,
  /// Zip each entry's key against its value into one mapping.
  Dictionary { value_dates: Option<DateKind> },
  /// Return the wrapped element list directly, date-mapped if needed.
  Collection { item_dates: Option<DateKind> },
}

/// The derived JSON emission plan for one class.
///
/// Built once per class after its properties settle; never mutated after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializerPlan {
  pub shape: SerializerShape,
  pub ops: Vec<SerializerOp>,
  /// Drop keys whose value was never provided. Only not-required fields are
  /// filtered; a required-but-nullable field's `null` is meaningful.
  pub filter_optional: bool,
}
