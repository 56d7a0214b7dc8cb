use crate::error::{GateError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure for mlgate.
///
/// Every field has a default matching the built-in pattern sets, so an empty
/// config file (or no config file at all) behaves identically to the stock
/// gate. A config file only needs to name the sets it wants to replace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Substrings flagging ML library imports in .py files
    pub ml_libraries: Vec<String>,
    /// Substrings flagging model weight loading in .py files
    pub weight_ops: Vec<String>,
    /// Substrings flagging pretrained model usage in .py files
    pub pretrained_models: Vec<String>,
    /// Substrings flagging external downloads in .py files
    pub download_commands: Vec<String>,
    /// File suffixes flagged as serialized model files (content never read)
    pub model_extensions: Vec<String>,
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ml_libraries: to_strings(&[
                "torch",
                "tensorflow",
                "keras",
                "sklearn",
                "xgboost",
                "catboost",
            ]),
            weight_ops: to_strings(&[
                "load_weights",
                "torch.load",
                "joblib.load",
                "pickle.load",
            ]),
            pretrained_models: to_strings(&[
                "ResNet",
                "VGG",
                "Inception",
                "EfficientNet",
                "BERT",
                "GPT",
                "T5",
                "DistilBERT",
            ]),
            download_commands: to_strings(&[
                "wget",
                "curl",
                "requests.get",
                "urllib.request.urlretrieve",
            ]),
            model_extensions: to_strings(&[".h5", ".pt", ".pth", ".pb", ".joblib"]),
        }
    }
}

impl Config {
    /// Load config from the given path, or fall back to the built-in defaults
    /// when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|e| GateError::ReadError {
                    path: path.display().to_string(),
                    source: e,
                })?;
                serde_yaml::from_str(&content).map_err(|e| GateError::ConfigError {
                    path: path.display().to_string(),
                    source: e,
                })
            }
            None => Ok(Self::default()),
        }
    }
}
