pub mod diagram_ir;
pub mod diagram_parser;

use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

pub use diagram_ir::*;
pub use diagram_parser::DiagramParser;

/// Input parser trait - converts a diagram document into the in-memory model
pub trait InputParser: Send + Sync {
    /// Name of the input format (e.g., "diagram")
    fn format_name(&self) -> &str;

    /// File extensions this parser supports
    fn supported_extensions(&self) -> Vec<&str>;

    /// Parse input file into a diagram
    fn parse(&self, source: &Path) -> Result<Diagram>;

    /// Validate input file before parsing
    fn validate(&self, source: &Path) -> Result<()> {
        if !source.exists() {
            anyhow::bail!("Input file not found: {:?}", source);
        }
        Ok(())
    }
}

/// Parser registry for managing available input parsers
pub struct ParserRegistry {
    parsers: HashMap<String, Box<dyn InputParser>>,
}

impl ParserRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            parsers: HashMap::new(),
        };

        // Register built-in parsers
        registry.register(Box::new(DiagramParser));

        registry
    }

    pub fn register(&mut self, parser: Box<dyn InputParser>) {
        self.parsers.insert(parser.format_name().to_string(), parser);
    }

    pub fn get(&self, format: &str) -> Option<&dyn InputParser> {
        self.parsers.get(format).map(|p| p.as_ref())
    }

    /// Auto-detect format from file extension
    pub fn detect_format(&self, path: &Path) -> Option<&str> {
        let ext = path.extension()?.to_str()?;

        for parser in self.parsers.values() {
            if parser.supported_extensions().contains(&ext) {
                return Some(parser.format_name());
            }
        }

        None
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detects_diagram_format_from_extension() {
        let registry = ParserRegistry::new();
        assert_eq!(
            registry.detect_format(&PathBuf::from("shop.json")),
            Some("diagram")
        );
        assert_eq!(
            registry.detect_format(&PathBuf::from("shop.yaml")),
            Some("diagram")
        );
        assert_eq!(registry.detect_format(&PathBuf::from("shop.xml")), None);
    }

    #[test]
    fn registry_resolves_by_format_name() {
        let registry = ParserRegistry::new();
        assert!(registry.get("diagram").is_some());
        assert!(registry.get("xmi").is_none());
    }
}
