use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub version: String,

    #[serde(default)]
    pub input: Option<InputConfig>,

    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub generations: Vec<GenerationConfig>,

    #[serde(default)]
    pub hooks: HooksConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct InputConfig {
    #[serde(default)]
    pub format: Option<String>,

    pub source: PathBuf,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GenerationConfig {
    /// Generator name; also the target-language key ("python", "java",
    /// "php").
    pub generator: String,

    /// Output filename. Defaults to the diagram name plus the language's
    /// conventional extension.
    #[serde(rename = "outputFile", default)]
    pub output_file: Option<String>,

    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct HooksConfig {
    #[serde(rename = "beforeGenerate", default)]
    pub before_generate: Vec<String>,

    #[serde(rename = "afterGenerate", default)]
    pub after_generate: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            input: None,
            output: Some(PathBuf::from("generated")),
            generations: vec![],
            hooks: HooksConfig::default(),
        }
    }
}
