//! Employee wire and storage representations.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An employee as returned to HTTP clients.
///
/// `id` is the 24-character hex form of the store-assigned `ObjectId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    #[serde(serialize_with = "serialize_number")]
    pub salary: f64,
    pub age: i64,
}

/// Largest magnitude below which every whole `f64` is an exact integer.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53

/// Write whole numbers without a fractional part (`50000`, not `50000.0`).
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < EXACT_INTEGER_LIMIT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// JSON `null` decodes to the field's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Client-supplied employee fields for create and update.
///
/// Decoding is permissive: missing or `null` fields take zero values and
/// unknown fields, including `id`, are ignored. Wrong JSON types are still rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeInput {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub salary: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub age: i64,
}

impl EmployeeInput {
    /// Decode a raw JSON request body. A bare `null` body is all zero values.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let input: Option<Self> = serde_json::from_slice(body)?;
        Ok(input.unwrap_or_default())
    }

    /// Attach an identifier, producing the wire representation.
    pub fn with_id(self, id: ObjectId) -> Employee {
        Employee {
            id: id.to_hex(),
            name: self.name,
            salary: self.salary,
            age: self.age,
        }
    }
}

/// The stored document shape: `{ _id, name, salary, age }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub salary: f64,
    #[serde(default)]
    pub age: i64,
}

impl EmployeeDocument {
    pub fn new(id: ObjectId, input: EmployeeInput) -> Self {
        Self {
            id,
            name: input.name,
            salary: input.salary,
            age: input.age,
        }
    }
}

impl From<EmployeeDocument> for Employee {
    fn from(doc: EmployeeDocument) -> Self {
        Employee {
            id: doc.id.to_hex(),
            name: doc.name,
            salary: doc.salary,
            age: doc.age,
        }
    }
}

/// Outcome of a delete, serialized as `{"DeletedCount": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    #[serde(rename = "DeletedCount")]
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_ignores_client_id() {
        let input = EmployeeInput::from_json(
            br#"{"id":"not-even-hex","name":"Ann","salary":50000,"age":30}"#,
        )
        .unwrap();
        assert_eq!(
            input,
            EmployeeInput { name: "Ann".into(), salary: 50000.0, age: 30 }
        );
    }

    #[test]
    fn test_input_missing_fields_default_to_zero() {
        let input = EmployeeInput::from_json(br#"{"name":"Bob"}"#).unwrap();
        assert_eq!(input.salary, 0.0);
        assert_eq!(input.age, 0);
    }

    #[test]
    fn test_input_null_fields_default_to_zero() {
        let input = EmployeeInput::from_json(br#"{"name":null,"salary":1,"age":2}"#).unwrap();
        assert_eq!(input, EmployeeInput { name: String::new(), salary: 1.0, age: 2 });

        let input = EmployeeInput::from_json(br#"{"name":"Ann","salary":null,"age":null}"#).unwrap();
        assert_eq!(input, EmployeeInput { name: "Ann".into(), salary: 0.0, age: 0 });
    }

    #[test]
    fn test_null_body_is_all_zero() {
        assert_eq!(EmployeeInput::from_json(b"null").unwrap(), EmployeeInput::default());
        assert_eq!(EmployeeInput::from_json(b" null ").unwrap(), EmployeeInput::default());
    }

    #[test]
    fn test_whole_salary_has_no_fraction() {
        let id = ObjectId::parse_str("65a1b2c3d4e5f60718293a4b").unwrap();
        let employee = EmployeeInput { name: "Ann".into(), salary: 50000.0, age: 30 }.with_id(id);
        assert_eq!(
            serde_json::to_string(&employee).unwrap(),
            r#"{"id":"65a1b2c3d4e5f60718293a4b","name":"Ann","salary":50000,"age":30}"#
        );

        let fractional = EmployeeInput { salary: 1.5, ..EmployeeInput::default() }.with_id(id);
        assert!(serde_json::to_string(&fractional).unwrap().contains(r#""salary":1.5"#));
    }

    #[test]
    fn test_input_rejects_wrong_types() {
        assert!(EmployeeInput::from_json(br#"{"name":"Ann","age":"thirty"}"#).is_err());
        assert!(EmployeeInput::from_json(br#"{"age":30.5}"#).is_err());
        assert!(EmployeeInput::from_json(b"not json").is_err());
        assert!(EmployeeInput::from_json(b"").is_err());
    }

    #[test]
    fn test_employee_serializes_id_as_hex_string() {
        let id = ObjectId::parse_str("65a1b2c3d4e5f60718293a4b").unwrap();
        let employee = EmployeeInput { name: "Ann".into(), salary: 50000.0, age: 30 }.with_id(id);
        assert_eq!(
            serde_json::to_value(&employee).unwrap(),
            json!({"id": "65a1b2c3d4e5f60718293a4b", "name": "Ann", "salary": 50000, "age": 30})
        );
    }

    #[test]
    fn test_document_uses_underscore_id() {
        let id = ObjectId::new();
        let doc = mongodb::bson::to_document(&EmployeeDocument::new(id, EmployeeInput::default())).unwrap();
        assert_eq!(doc.get_object_id("_id").unwrap(), id);
        assert!(doc.contains_key("name"));
        assert!(doc.contains_key("salary"));
        assert!(doc.contains_key("age"));
    }

    #[test]
    fn test_delete_outcome_shape() {
        let value = serde_json::to_value(DeleteOutcome { deleted_count: 1 }).unwrap();
        assert_eq!(value, json!({"DeletedCount": 1}));
    }
}
