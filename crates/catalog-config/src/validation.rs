//! Structural checks that serde alone cannot express.

use serde_json::Value;

use crate::config::CatalogConfig;
use crate::error::{ConfigError, Result};

impl CatalogConfig {
    /// Validate the loaded configuration.
    ///
    /// The `webpack` override is merged over an object, so anything other than
    /// a table/object cannot be applied.
    pub fn validate(&self) -> Result<()> {
        if let Some(webpack) = &self.webpack {
            if !matches!(webpack, Value::Object(_)) {
                return Err(ConfigError::InvalidValue {
                    field: "webpack".to_string(),
                    hint: Some(format!(
                        "expected a table of bundler overrides, found {}",
                        value_kind(webpack)
                    )),
                });
            }
        }

        Ok(())
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a table",
    }
}
