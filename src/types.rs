use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

// ─── Model ──────────────────────────────────────────────────────────────────

/// A materialized property-graph snapshot of one building model.
///
/// The snapshot is a read-only projection: elements and their property
/// sets are queried during validation, never mutated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Model {
    /// Name of the model file this snapshot was extracted from.
    pub source: String,
    /// Schema identifier of the source model (e.g. "IFC4").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Project root entities. Usually exactly one, but zero or more are
    /// tolerated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<Element>,
    /// Occurrence elements in snapshot order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<Element>,
}

// ─── Element ─────────────────────────────────────────────────────────────────

/// One discrete object of the model: an occurrence element or a project
/// root.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Element {
    /// Stable numeric id, unique within the snapshot.
    pub id: u64,
    /// IFC GlobalId of the entity, when the exporter provided one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_id: Option<String>,
    /// Definition relationships in snapshot order. An element with no
    /// definitions has no properties; that is data, not an error.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub definitions: Vec<Definition>,
}

// ─── Definition ──────────────────────────────────────────────────────────────

/// One definition relationship attached to an element.
///
/// Serialized as a one-key map. `property_set` is the only kind the
/// validator consumes; every other kind (quantity sets, type objects, …)
/// is carried through as [`Definition::Other`] and ignored downstream.
#[derive(Clone, Debug)]
pub enum Definition {
    PropertySet(PropertySet),
    /// A definition kind with a single unrecognized key.
    Other { key: String, value: Value },
}

impl Serialize for Definition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Definition::PropertySet(ps) => map.serialize_entry("property_set", ps)?,
            Definition::Other { key, value } => map.serialize_entry(key, value)?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Definition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map: serde_json::Map<String, Value> = serde_json::Map::deserialize(deserializer)?;

        // One-key map: the first key selects the definition kind.
        let (key, value) = map
            .into_iter()
            .next()
            .ok_or_else(|| serde::de::Error::custom("definition must have exactly one key"))?;

        match key.as_str() {
            "property_set" => {
                let ps: PropertySet =
                    serde_json::from_value(value).map_err(serde::de::Error::custom)?;
                Ok(Definition::PropertySet(ps))
            }
            _ => Ok(Definition::Other { key, value }),
        }
    }
}

// ─── PropertySet ─────────────────────────────────────────────────────────────

/// A named bundle of attribute/value pairs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertySet {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
}

/// A single attribute of a property set.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    /// Absent when the source entity carried no nominal value. Such
    /// properties are skipped during extraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<PropertyValue>,
}

// ─── PropertyValue ───────────────────────────────────────────────────────────

/// A coerced property value.
///
/// Resolution precedence, applied during deserialization:
///
/// 1. a wrapped/typed scalar, a mapping with a `value` key (e.g.
///    `{ type: IfcLabel, value: Trave }`) contributes its inner value;
/// 2. a bare string, integer, real, or boolean is used as-is;
/// 3. anything else is kept as its compact JSON rendering.
///
/// Every present value therefore has a defined rendering; downstream
/// comparisons operate on these coerced forms.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Integer(i64),
    Real(f64),
    Boolean(bool),
    /// Fallback rendering for values of unrecognized shape.
    Other(String),
}

impl PropertyValue {
    /// Coerce an arbitrary value tree into a `PropertyValue`.
    pub fn from_value(value: Value) -> PropertyValue {
        match value {
            Value::Object(mut map) => {
                // Wrapped scalar form. A nested wrapper unwraps again.
                if let Some(inner) = map.remove("value") {
                    PropertyValue::from_value(inner)
                } else {
                    let rendered = serde_json::to_string(&Value::Object(map))
                        .unwrap_or_else(|_| "null".to_string());
                    PropertyValue::Other(rendered)
                }
            }
            Value::String(s) => PropertyValue::Text(s),
            Value::Bool(b) => PropertyValue::Boolean(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    PropertyValue::Integer(i)
                } else {
                    PropertyValue::Real(n.as_f64().unwrap_or(0.0))
                }
            }
            other => {
                let rendered = serde_json::to_string(&other)
                    .unwrap_or_else(|_| "null".to_string());
                PropertyValue::Other(rendered)
            }
        }
    }

    /// The string rendering used for display and comparison.
    pub fn render(&self) -> String {
        match self {
            PropertyValue::Text(s) => s.clone(),
            PropertyValue::Integer(i) => i.to_string(),
            PropertyValue::Real(r) => r.to_string(),
            PropertyValue::Boolean(b) => b.to_string(),
            PropertyValue::Other(s) => s.clone(),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(s) | PropertyValue::Other(s) => write!(f, "{}", s),
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Real(r) => write!(f, "{}", r),
            PropertyValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropertyValue::Text(s) => serializer.serialize_str(s),
            PropertyValue::Integer(i) => serializer.serialize_i64(*i),
            PropertyValue::Real(r) => serializer.serialize_f64(*r),
            PropertyValue::Boolean(b) => serializer.serialize_bool(*b),
            PropertyValue::Other(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(PropertyValue::from_value(value))
    }
}
