//! Chart contents embedded in a release.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A packaged chart: metadata, templates, default values and nested charts.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Chart {
    #[prost(message, optional, tag = "1")]
    pub metadata: Option<Metadata>,
    #[prost(message, repeated, tag = "2")]
    pub templates: Vec<Template>,
    /// Sub-charts this chart depends on.
    #[prost(message, repeated, tag = "3")]
    pub dependencies: Vec<Chart>,
    /// Default configuration values.
    #[prost(message, optional, tag = "4")]
    pub values: Option<Config>,
    /// Miscellaneous files shipped with the chart (README, LICENSE, ...).
    #[prost(message, repeated, tag = "5")]
    pub files: Vec<Any>,
}

/// Chart metadata from `Chart.yaml`.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub home: String,
    #[prost(string, repeated, tag = "3")]
    pub sources: Vec<String>,
    /// SemVer 2 version of the chart.
    #[prost(string, tag = "4")]
    pub version: String,
    #[prost(string, tag = "5")]
    pub description: String,
    #[prost(string, repeated, tag = "6")]
    pub keywords: Vec<String>,
    #[prost(message, repeated, tag = "7")]
    pub maintainers: Vec<Maintainer>,
    /// Template engine name; empty means the default Go template engine.
    #[prost(string, tag = "8")]
    pub engine: String,
    #[prost(string, tag = "9")]
    pub icon: String,
    #[prost(string, tag = "10")]
    pub api_version: String,
    #[prost(string, tag = "11")]
    pub condition: String,
    #[prost(string, tag = "12")]
    pub tags: String,
    #[prost(string, tag = "13")]
    pub app_version: String,
    #[prost(bool, tag = "14")]
    pub deprecated: bool,
    #[prost(string, tag = "15")]
    pub tiller_version: String,
    #[prost(btree_map = "string, string", tag = "16")]
    pub annotations: BTreeMap<String, String>,
    /// SemVer constraint on the supported cluster version.
    #[prost(string, tag = "17")]
    pub kube_version: String,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Maintainer {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub email: String,
    #[prost(string, tag = "3")]
    pub url: String,
}

/// A template file, raw bytes before rendering.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    /// Path relative to the chart root, e.g. `templates/deployment.yaml`.
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(bytes = "vec", tag = "2")]
    pub data: Vec<u8>,
}

/// Configuration values, both as the raw YAML document and parsed.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[prost(string, tag = "1")]
    pub raw: String,
    #[prost(btree_map = "string, message", tag = "2")]
    pub values: BTreeMap<String, ConfigValue>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigValue {
    #[prost(string, tag = "1")]
    pub value: String,
}

/// Opaque typed blob, wire-compatible with `google.protobuf.Any`.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Any {
    #[prost(string, tag = "1")]
    pub type_url: String,
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_nested_chart_roundtrip() {
        let child = Chart {
            metadata: Some(Metadata {
                name: "redis".to_string(),
                version: "10.5.7".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let mut annotations = BTreeMap::new();
        annotations.insert("category".to_string(), "Database".to_string());
        let chart = Chart {
            metadata: Some(Metadata {
                name: "app".to_string(),
                version: "1.2.0".to_string(),
                deprecated: true,
                annotations,
                ..Default::default()
            }),
            templates: vec![Template {
                name: "templates/svc.yaml".to_string(),
                data: b"kind: Service\n".to_vec(),
            }],
            dependencies: vec![child],
            values: None,
            files: vec![Any {
                type_url: "README.md".to_string(),
                value: b"# app".to_vec(),
            }],
        };

        let decoded = Chart::decode(chart.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, chart);
        assert_eq!(decoded.dependencies[0].metadata.as_ref().unwrap().name, "redis");
    }

    #[test]
    fn test_config_map_encoding_is_deterministic() {
        let mut a = Config::default();
        a.values.insert("b".to_string(), ConfigValue { value: "2".to_string() });
        a.values.insert("a".to_string(), ConfigValue { value: "1".to_string() });

        let mut b = Config::default();
        b.values.insert("a".to_string(), ConfigValue { value: "1".to_string() });
        b.values.insert("b".to_string(), ConfigValue { value: "2".to_string() });

        assert_eq!(a.encode_to_vec(), b.encode_to_vec());
    }
}
