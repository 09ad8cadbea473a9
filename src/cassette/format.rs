//! Cassette data structures for recording and replaying interactions.

use std::fmt::Display;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::ports::PortError;

/// Port name under which filesystem calls are recorded.
pub const FS_PORT: &str = "fs";

/// A single recorded interaction with an external port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name (currently always "fs").
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Input data sent to the port.
    pub input: serde_json::Value,
    /// Output data returned from the port.
    pub output: serde_json::Value,
}

/// A cassette containing a sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Scan root the recorded run was pointed at.
    pub root: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

/// Input payload of a call that takes a single path.
#[must_use]
pub fn path_input(path: &Path) -> Value {
    json!({ "path": path.display().to_string() })
}

/// Input payload of a `write` call.
#[must_use]
pub fn write_input(path: &Path, contents: &str) -> Value {
    json!({ "path": path.display().to_string(), "contents": contents })
}

/// Encodes a port result as `{"ok": value}` or `{"err": "message"}`.
pub fn encode_result<T: Serialize, E: Display>(result: &Result<T, E>) -> Value {
    match result {
        Ok(value) => match serde_json::to_value(value) {
            Ok(inner) => json!({ "ok": inner }),
            Err(e) => json!({ "err": format!("unrecordable output: {e}") }),
        },
        Err(e) => json!({ "err": e.to_string() }),
    }
}

/// Decodes an output written by [`encode_result`].
///
/// A bare value without an `ok`/`err` wrapper is read as a success.
///
/// # Errors
///
/// Returns the recorded error message, or a deserialization error naming `method`.
pub fn decode_result<T: DeserializeOwned>(output: &Value, method: &str) -> Result<T, PortError> {
    if let Some(err) = output.get("err") {
        return Err(err.as_str().unwrap_or("unknown error").into());
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{FS_PORT}::{method}: failed to deserialize output: {e}").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_keeps_interaction_order_and_payloads() {
        let cassette = Cassette {
            name: "tree-run".into(),
            recorded_at: Utc::now(),
            root: "assets/svg".into(),
            interactions: vec![
                Interaction {
                    seq: 0,
                    port: "fs".into(),
                    method: "list_dir".into(),
                    input: json!({"path": "assets/svg"}),
                    output: json!({"ok": ["logo.svg", "icons"]}),
                },
                Interaction {
                    seq: 1,
                    port: "fs".into(),
                    method: "kind".into(),
                    input: json!({"path": "assets/svg/icons"}),
                    output: json!({"ok": "dir"}),
                },
            ],
        };
        let yaml = serde_yaml::to_string(&cassette).expect("serialize");
        assert!(yaml.contains("root: assets/svg"));

        let deserialized: Cassette = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(deserialized.interactions[0].method, "list_dir");
        assert_eq!(deserialized.interactions[1].output, json!({"ok": "dir"}));
    }

    #[test]
    fn encoded_results_decode_back() {
        let listed: Result<Vec<String>, String> = Ok(vec!["a.svg".into()]);
        let output = encode_result(&listed);
        assert_eq!(output, json!({"ok": ["a.svg"]}));
        let decoded: Vec<String> = decode_result(&output, "list_dir").unwrap();
        assert_eq!(decoded, ["a.svg"]);

        let failed: Result<(), String> = Err("Permission denied".into());
        let err = decode_result::<()>(&encode_result(&failed), "write").unwrap_err();
        assert_eq!(err.to_string(), "Permission denied");
    }

    #[test]
    fn decode_reports_shape_mismatch() {
        let err = decode_result::<bool>(&json!({"ok": "dir"}), "exists").unwrap_err();
        assert!(err.to_string().starts_with("fs::exists: failed to deserialize output"));
    }

    #[test]
    fn inputs_carry_display_paths() {
        let path = Path::new("assets/svg/index.json");
        assert_eq!(path_input(path), json!({"path": "assets/svg/index.json"}));
        assert_eq!(write_input(path, "{}")["contents"], json!("{}"));
    }
}
