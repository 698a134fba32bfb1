//! Parameters selecting and configuring an ML classifier.

use serde::{Deserialize, Serialize};

use crate::constants::{BrainFlowClassifier, BrainFlowMetric};
use crate::error::Result;

/// Default size of the buffer `predict` writes into.
pub const DEFAULT_MAX_ARRAY_SIZE: i32 = 8192;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrainFlowModelParams {
    /// Raw [`BrainFlowMetric`] value.
    pub metric: i32,
    /// Raw [`BrainFlowClassifier`] value.
    pub classifier: i32,
    /// Model file for classifiers loaded from disk.
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub other_info: String,
    /// Output node name for ONNX models.
    #[serde(default)]
    pub output_name: String,
    #[serde(default = "default_max_array_size")]
    pub max_array_size: i32,
}

fn default_max_array_size() -> i32 {
    DEFAULT_MAX_ARRAY_SIZE
}

impl BrainFlowModelParams {
    pub fn new(metric: BrainFlowMetric, classifier: BrainFlowClassifier) -> Self {
        Self {
            metric: metric as i32,
            classifier: classifier as i32,
            file: String::new(),
            other_info: String::new(),
            output_name: String::new(),
            max_array_size: DEFAULT_MAX_ARRAY_SIZE,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    pub fn with_other_info(mut self, info: impl Into<String>) -> Self {
        self.other_info = info.into();
        self
    }

    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = name.into();
        self
    }

    pub fn with_max_array_size(mut self, size: i32) -> Self {
        self.max_array_size = size;
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_layout() {
        let params = BrainFlowModelParams::new(
            BrainFlowMetric::Restfulness,
            BrainFlowClassifier::OnnxClassifier,
        )
        .with_file("model.onnx")
        .with_output_name("label");

        let value: serde_json::Value = serde_json::from_str(&params.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "metric": 1,
                "classifier": 2,
                "file": "model.onnx",
                "other_info": "",
                "output_name": "label",
                "max_array_size": 8192,
            })
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let params = BrainFlowModelParams::from_json(r#"{"metric": 0, "classifier": 0}"#).unwrap();
        assert_eq!(
            params,
            BrainFlowModelParams::new(
                BrainFlowMetric::Mindfulness,
                BrainFlowClassifier::DefaultClassifier
            )
        );
    }

    #[test]
    fn test_round_trip() {
        let params = BrainFlowModelParams::new(
            BrainFlowMetric::UserDefined,
            BrainFlowClassifier::DynLibClassifier,
        )
        .with_other_info("threshold=0.5")
        .with_max_array_size(16);

        let restored = BrainFlowModelParams::from_json(&params.to_json().unwrap()).unwrap();
        assert_eq!(restored, params);
    }
}
