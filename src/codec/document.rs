//! Parsing and serializing single documents.

use super::format::Format;
use crate::error::{MergeError, MULTI_DOCUMENT_MESSAGE};
use crate::value::Value;
use serde::{Deserialize, Serialize, Serializer};

/// Parses `text` as exactly one document of the given format.
///
/// YAML streams may contain empty documents (for example a trailing `---`);
/// those are skipped. More than one remaining document is rejected with
/// [`MergeError::MultiDocument`], and a stream with none is the null document.
pub fn parse_document(text: &str, format: Format) -> Result<Value, MergeError> {
    match format {
        Format::Json => {
            serde_json::from_str(text).map_err(|e| MergeError::parse(format, e.to_string()))
        }
        Format::Yaml => parse_yaml_stream(text),
    }
}

fn parse_yaml_stream(text: &str) -> Result<Value, MergeError> {
    let mut documents = Vec::new();
    for document in serde_yaml::Deserializer::from_str(text) {
        let value =
            Value::deserialize(document).map_err(|e| MergeError::parse(Format::Yaml, e.to_string()))?;
        if !is_empty_document(&value) {
            documents.push(value);
        }
    }
    if documents.len() > 1 {
        return Err(MergeError::multi_document(MULTI_DOCUMENT_MESSAGE));
    }
    Ok(documents.pop().unwrap_or_default())
}

/// Falsy documents carry nothing to merge.
fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Int(i) => *i == 0,
        Value::Float(f) => *f == 0.0 || f.is_nan(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Serializes `value` in the given format.
///
/// JSON is pretty printed with two-space indentation and writes big integers
/// as strings so that consumers limited to double precision read them back
/// unchanged.
///
/// A parsed tree always serializes: `serde_json` writes non-finite floats as
/// `null`, and every map key is a string. The error is kept for the writers'
/// signatures.
pub fn serialize_document(value: &Value, format: Format) -> Result<String, MergeError> {
    match format {
        Format::Json => serde_json::to_string_pretty(&JsonScalars(value))
            .map_err(|e| MergeError::serialize(format, e.to_string())),
        Format::Yaml => {
            serde_yaml::to_string(value).map_err(|e| MergeError::serialize(format, e.to_string()))
        }
    }
}

struct JsonScalars<'a>(&'a Value);

impl Serialize for JsonScalars<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::BigInt(i) => serializer.collect_str(i),
            Value::List(items) => serializer.collect_seq(items.iter().map(JsonScalars)),
            Value::Map(m) => serializer.collect_map(m.iter().map(|(k, v)| (k, JsonScalars(v)))),
            other => other.serialize(serializer),
        }
    }
}
