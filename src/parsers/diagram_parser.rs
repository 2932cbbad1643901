use super::{Diagram, InputParser};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parser for diagram documents saved by the editor (JSON) or written by
/// hand (YAML).
pub struct DiagramParser;

impl InputParser for DiagramParser {
    fn format_name(&self) -> &str {
        "diagram"
    }

    fn supported_extensions(&self) -> Vec<&str> {
        vec!["json", "yaml", "yml"]
    }

    fn parse(&self, source: &Path) -> Result<Diagram> {
        self.validate(source)?;

        let content = fs::read_to_string(source)
            .with_context(|| format!("Failed to read diagram file: {:?}", source))?;

        let diagram: Diagram = if source.extension().and_then(|s| s.to_str()) == Some("json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid diagram JSON: {:?}", source))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid diagram YAML: {:?}", source))?
        };

        Ok(diagram)
    }
}
