// SPDX-FileCopyrightText: © 2026 Radflow contributors
// SPDX-License-Identifier: MIT

/// Semantic type of a descriptor input or output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    File,
    Folder,
    String,
    Float,
    Integer,
    List,
    Dict,
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            DataType::File => "file",
            DataType::Folder => "folder",
            DataType::String => "string",
            DataType::Float => "float",
            DataType::Integer => "integer",
            DataType::List => "list",
            DataType::Dict => "dict",
        };
        write!(f, "{}", name)
    }
}

/// A concrete value bound to a descriptor input.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Float(f64),
    Integer(i64),
    Path(std::path::PathBuf),
    List(Vec<Value>),
    Dict(serde_json::Map<String, serde_json::Value>),
}

impl Value {
    /// The substitution text of this value.
    ///
    /// Must be byte-stable for identical values so that rendered commands
    /// are reproducible: floats use the shortest round-trip representation
    /// (`0.4` stays `0.4`, `2000.0` becomes `2000`), dictionaries serialize
    /// with sorted keys, lists join their elements with a single space.
    pub fn render(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Float(x) => x.to_string(),
            Value::Integer(x) => x.to_string(),
            Value::Path(p) => p.display().to_string(),
            Value::List(items) => items.iter().map(Value::render).collect::<Vec<_>>().join(" "),
            Value::Dict(map) => serde_json::Value::Object(map.clone()).to_string(),
        }
    }

    /// Whether this value is acceptable for an input declared with the given
    /// type. String and path values are interchangeable for file/folder
    /// inputs; integers are accepted where a float is expected.
    pub fn matches(&self, data_type: DataType) -> bool {
        matches!(
            (self, data_type),
            (Value::Str(_), DataType::String)
                | (Value::Str(_), DataType::File)
                | (Value::Str(_), DataType::Folder)
                | (Value::Path(_), DataType::File)
                | (Value::Path(_), DataType::Folder)
                | (Value::Float(_), DataType::Float)
                | (Value::Integer(_), DataType::Float)
                | (Value::Integer(_), DataType::Integer)
                | (Value::List(_), DataType::List)
                | (Value::Dict(_), DataType::Dict)
        )
    }

    /// The JSON form used in serialized manifests.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Str(s) => serde_json::Value::from(s.clone()),
            Value::Float(x) => serde_json::Value::from(*x),
            Value::Integer(x) => serde_json::Value::from(*x),
            Value::Path(p) => serde_json::Value::from(p.display().to_string()),
            Value::List(items) => serde_json::Value::Array(items.iter().map(Value::to_json).collect()),
            Value::Dict(map) => serde_json::Value::Object(map.clone()),
        }
    }

    /// Untyped conversion from a JSON value. Booleans and nulls have no
    /// counterpart and yield `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(Value::Str(s.clone())),
            serde_json::Value::Number(n) => {
                if let Some(x) = n.as_i64() {
                    Some(Value::Integer(x))
                } else {
                    n.as_f64().map(Value::Float)
                }
            }
            serde_json::Value::Array(items) => items
                .iter()
                .map(Value::from_json)
                .collect::<Option<Vec<_>>>()
                .map(Value::List),
            serde_json::Value::Object(map) => Some(Value::Dict(map.clone())),
            serde_json::Value::Bool(_) | serde_json::Value::Null => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Value::Integer(x)
    }
}

impl From<std::path::PathBuf> for Value {
    fn from(p: std::path::PathBuf) -> Self {
        Value::Path(p)
    }
}

impl From<&std::path::Path> for Value {
    fn from(p: &std::path::Path) -> Self {
        Value::Path(p.to_path_buf())
    }
}
