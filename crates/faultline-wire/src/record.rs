use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// The intermediate JSON-object form an error passes through on its way to
/// and from the wire string.
///
/// Always carries a `className` field naming the error kind. Accessors
/// return `Option` and never panic; setters skip absent values so optional
/// fields stay absent on the wire.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatRecord {
    fields: Map<String, Value>,
}

pub const CLASS_NAME: &str = "className";

impl FlatRecord {
    pub fn new(class_name: &str) -> Self {
        let mut record = Self::default();
        record.set_str(CLASS_NAME, class_name);
        record
    }

    /// Wraps a decoded JSON value, if it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    pub fn class_name(&self) -> Option<&str> {
        self.str_field(CLASS_NAME)
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.fields.insert(key.to_string(), value);
    }

    pub fn set_str(&mut self, key: &str, value: &str) {
        self.set(key, Value::from(value));
    }

    /// Inserts only when the value is present.
    pub fn set_opt(&mut self, key: &str, value: Option<Value>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(Value::as_str)
    }

    pub fn string_field(&self, key: &str) -> Option<String> {
        self.str_field(key).map(str::to_string)
    }

    pub fn bool_field(&self, key: &str) -> Option<bool> {
        self.field(key).and_then(Value::as_bool)
    }

    pub fn u64_field(&self, key: &str) -> Option<u64> {
        self.field(key).and_then(Value::as_u64)
    }

    pub fn u16_field(&self, key: &str) -> Option<u16> {
        self.u64_field(key).and_then(|value| u16::try_from(value).ok())
    }

    pub fn array_field(&self, key: &str) -> Option<&Vec<Value>> {
        self.field(key).and_then(Value::as_array)
    }

    /// Reads an array of strings; non-string elements are dropped.
    pub fn string_array_field(&self, key: &str) -> Option<Vec<String>> {
        self.array_field(key).map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
    }

    /// Reads an object of string values; non-string entries are dropped.
    pub fn string_map_field(&self, key: &str) -> Option<BTreeMap<String, String>> {
        self.field(key).and_then(Value::as_object).map(|entries| {
            entries
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|v| (k.clone(), v.to_string())))
                .collect()
        })
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Renders the record as a compact JSON string.
    pub fn into_json(self) -> String {
        self.into_value().to_string()
    }
}
