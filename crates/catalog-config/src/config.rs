//! The Catalog configuration file schema.
//!
//! The file is optional and every field in it is optional. For locating and
//! reading the file, see the `discovery` module.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result as ConfigResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CatalogConfig {
    /// Use the project's `.babelrc` when compiling the catalog.
    ///
    /// Overridden by the `--babelrc` flag; when both are absent the presence of
    /// a `.babelrc` file decides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_babelrc: Option<bool>,

    /// Overrides merged over the generated bundler configuration.
    ///
    /// Keys follow the bundler configuration's camelCase layout, e.g.
    /// `[webpack.devServer.https]` in TOML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webpack: Option<Value>,
}

impl CatalogConfig {
    /// Create from a `serde_json::Value`.
    ///
    /// # Example
    ///
    /// ```
    /// use catalog_config::CatalogConfig;
    /// use serde_json::json;
    ///
    /// let config = CatalogConfig::from_value(json!({ "useBabelrc": false })).unwrap();
    /// assert_eq!(config.use_babelrc, Some(false));
    /// assert!(config.webpack.is_none());
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }
}

/// Deep-merge `update` into `target`.
///
/// Objects merge key by key; arrays and scalars in `update` replace whatever
/// `target` held at that key.
pub fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, Value::Object(update_map)) => {
            let mut new_obj = serde_json::Map::with_capacity(update_map.len());
            for (key, value) in update_map {
                new_obj.insert(key.clone(), value.clone());
            }
            *target_slot = Value::Object(new_obj);
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_reads_camel_case_fields() {
        let config = CatalogConfig::from_value(json!({
            "useBabelrc": true,
            "webpack": { "devtool": "eval" }
        }))
        .unwrap();

        assert_eq!(config.use_babelrc, Some(true));
        assert_eq!(config.webpack, Some(json!({ "devtool": "eval" })));
    }

    #[test]
    fn from_value_rejects_unknown_fields() {
        let err = CatalogConfig::from_value(json!({ "use_babelrc": true })).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn merge_values_merges_nested_objects() {
        let mut base = json!({
            "mode": "development",
            "devServer": { "historyApiFallback": true, "contentBase": ["a", "b"] }
        });
        merge_values(
            &mut base,
            &json!({ "devServer": { "contentBase": ["c"] }, "devtool": "eval" }),
        );

        assert_eq!(
            base,
            json!({
                "mode": "development",
                "devtool": "eval",
                "devServer": { "historyApiFallback": true, "contentBase": ["c"] }
            })
        );
    }

    #[test]
    fn merge_values_replaces_scalar_with_object() {
        let mut base = json!({ "devtool": null });
        merge_values(&mut base, &json!({ "devtool": { "kind": "eval" } }));
        assert_eq!(base, json!({ "devtool": { "kind": "eval" } }));
    }
}
