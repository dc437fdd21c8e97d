//! Typed access to loosely-typed tool arguments

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::McpError;

/// Read-only view over the `arguments` object of a `tools/call` request
#[derive(Debug, Clone, Copy)]
pub struct Arguments<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Arguments<'a> {
    /// Wrap an argument map
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    /// Required string argument
    ///
    /// Non-string scalars are taken through their JSON text (`42` becomes
    /// `"42"`). A missing or null value is an error.
    pub fn string(&self, key: &str) -> Result<String, McpError> {
        match self.text(key) {
            Some(value) => {
                debug!("Argument '{}' = {}", key, value);
                Ok(value)
            }
            None => Err(McpError::MissingParameter(key.to_string())),
        }
    }

    /// Optional string argument; absent, null and empty values yield `default`
    pub fn string_or(&self, key: &str, default: &str) -> String {
        match self.text(key) {
            Some(value) if !value.is_empty() => value,
            _ => {
                debug!("Argument '{}' not set, using default: {}", key, default);
                default.to_string()
            }
        }
    }

    /// Optional integer argument
    ///
    /// Accepts an integral JSON number or a string holding one. Anything else
    /// yields `None`.
    pub fn integer(&self, key: &str) -> Option<i64> {
        let parsed = match self.map.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        if parsed.is_none() {
            debug!("Argument '{}' is not an integer, ignoring", key);
        }
        parsed
    }

    /// Optional count argument; negative values clamp to zero
    pub fn count(&self, key: &str) -> Option<usize> {
        self.integer(key)
            .map(|n| usize::try_from(n.max(0)).unwrap_or(usize::MAX))
    }

    fn text(&self, key: &str) -> Option<String> {
        match self.map.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_string_coercion() {
        let args = map(json!({"a": "text", "b": 42, "c": true, "d": null}));
        let args = Arguments::new(&args);

        assert_eq!(args.string("a").unwrap(), "text");
        assert_eq!(args.string("b").unwrap(), "42");
        assert_eq!(args.string("c").unwrap(), "true");
        assert!(matches!(args.string("d"), Err(McpError::MissingParameter(k)) if k == "d"));
        assert_eq!(
            args.string("missing").unwrap_err().to_string(),
            "Parameter 'missing' is required"
        );
    }

    #[test]
    fn test_string_or_default() {
        let args = map(json!({"empty": "", "set": "html", "null": null}));
        let args = Arguments::new(&args);

        assert_eq!(args.string_or("set", "markdown"), "html");
        assert_eq!(args.string_or("empty", "markdown"), "markdown");
        assert_eq!(args.string_or("null", "markdown"), "markdown");
        assert_eq!(args.string_or("missing", "markdown"), "markdown");
    }

    #[test]
    fn test_integer_coercion() {
        let args = map(json!({
            "number": 5,
            "text": " 12 ",
            "float": 2.5,
            "word": "five",
            "flag": true,
            "negative": -3
        }));
        let args = Arguments::new(&args);

        assert_eq!(args.integer("number"), Some(5));
        assert_eq!(args.integer("text"), Some(12));
        assert_eq!(args.integer("float"), None);
        assert_eq!(args.integer("word"), None);
        assert_eq!(args.integer("flag"), None);
        assert_eq!(args.integer("missing"), None);
        assert_eq!(args.count("negative"), Some(0));
        assert_eq!(args.count("number"), Some(5));
    }

    proptest! {
        #[test]
        fn prop_integer_accepts_numbers_and_their_text(n in any::<i64>()) {
            let args = map(json!({"as_number": n, "as_text": n.to_string()}));
            let args = Arguments::new(&args);
            prop_assert_eq!(args.integer("as_number"), Some(n));
            prop_assert_eq!(args.integer("as_text"), Some(n));
        }

        #[test]
        fn prop_count_is_never_negative(n in any::<i64>()) {
            let args = map(json!({"limit": n}));
            let count = Arguments::new(&args).count("limit");
            prop_assert_eq!(count, Some(n.max(0) as usize));
        }
    }
}
