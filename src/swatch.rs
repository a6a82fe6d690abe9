use serde::Serialize;

use crate::parser::color::Rgb;

/// A named color sample taken from one matched element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    pub name: String,
    #[serde(serialize_with = "serialize_normalized")]
    pub color: Rgb,
}

/// An element that failed color parsing under the skip policy.
#[derive(Debug, Clone)]
pub struct Rejected {
    pub index: usize,
    pub label: String,
    pub error: String,
}

fn serialize_normalized<S: serde::Serializer>(rgb: &Rgb, s: S) -> Result<S::Ok, S::Error> {
    rgb.normalized().serialize(s)
}
