//! Get-with-default accessors over a `serde_json::Value` tree.
//!
//! Every lookup walks a key path and yields `None` (or an empty slice) as soon
//! as a segment is missing, `null`, or of the wrong shape.

use serde_json::Value;

pub fn at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |node, key| node.get(key))
        .filter(|node| !node.is_null())
}

pub fn str_at(value: &Value, path: &[&str]) -> Option<String> {
    at(value, path).and_then(Value::as_str).map(str::to_string)
}

pub fn f64_at(value: &Value, path: &[&str]) -> Option<f64> {
    at(value, path).and_then(Value::as_f64)
}

pub fn u32_at(value: &Value, path: &[&str]) -> Option<u32> {
    at(value, path)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}

pub fn array_at<'a>(value: &'a Value, path: &[&str]) -> &'a [Value] {
    at(value, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
