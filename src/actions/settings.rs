use serde_json::{Map, Value};

// Property inspectors send numbers as either JSON numbers or strings.

pub fn get_str<'a>(v: &'a Map<String, Value>, k: &str) -> Option<&'a str> {
    v.get(k)?.as_str()
}

/// Trimmed, and `None` when blank.
pub fn get_nonempty<'a>(v: &'a Map<String, Value>, k: &str) -> Option<&'a str> {
    get_str(v, k).map(str::trim).filter(|s| !s.is_empty())
}

pub fn get_i64(v: &Map<String, Value>, k: &str) -> Option<i64> {
    match v.get(k) {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn get_u64(v: &Map<String, Value>, k: &str) -> Option<u64> {
    match v.get(k) {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn map(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn numbers_accept_strings() {
        let m = map(json!({ "a": 5, "b": " 12 ", "c": "x", "d": -3 }));
        assert_eq!(get_i64(&m, "a"), Some(5));
        assert_eq!(get_i64(&m, "b"), Some(12));
        assert_eq!(get_i64(&m, "c"), None);
        assert_eq!(get_u64(&m, "d"), None);
        assert_eq!(get_i64(&m, "missing"), None);
    }

    #[test]
    fn blank_strings_are_absent() {
        let m = map(json!({ "a": "  ", "b": " hero " }));
        assert_eq!(get_nonempty(&m, "a"), None);
        assert_eq!(get_nonempty(&m, "b"), Some("hero"));
        assert_eq!(get_str(&m, "a"), Some("  "));
    }
}
