pub mod java;
pub mod php;
pub mod python;

use crate::engine::ClassView;
use std::collections::HashMap;

pub use java::JavaGenerator;
pub use php::PhpGenerator;
pub use python::PythonGenerator;

/// Generated output from a generator
#[derive(Debug)]
pub struct GeneratedOutput {
    pub filename: String,
    pub content: String,
}

/// Generator trait - renders resolved/merged class data as target
/// language source text.
///
/// The emission skeleton (header, fields, constructor, accessors, method
/// stubs) is the same for every language; implementations confine
/// themselves to keyword spelling, declaration order, collection-type
/// spelling, and the per-file prelude/epilogue.
pub trait Generator: Send + Sync {
    /// Unique name of the generator (e.g., "python", "java")
    fn name(&self) -> &str;

    /// File extension for generated output (e.g., "py", "java")
    fn file_extension(&self) -> &str;

    /// Once-per-file header (imports, open tags), emitted only when some
    /// class in the file needs it.
    fn prelude(&self, classes: &[ClassView<'_>]) -> Option<String> {
        let _ = classes;
        None
    }

    /// One complete class/interface declaration, newline-terminated.
    fn emit_class(&self, view: &ClassView<'_>) -> String;

    /// Once-per-file trailer.
    fn epilogue(&self) -> Option<String> {
        None
    }
}

/// Generator registry for managing available code generators
pub struct GeneratorRegistry {
    generators: HashMap<String, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            generators: HashMap::new(),
        };

        // Register built-in generators
        registry.register(Box::new(PythonGenerator));
        registry.register(Box::new(JavaGenerator));
        registry.register(Box::new(PhpGenerator));

        registry
    }

    pub fn register(&mut self, generator: Box<dyn Generator>) {
        self.generators
            .insert(generator.name().to_string(), generator);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Generator> {
        self.generators.get(name).map(|g| g.as_ref())
    }

    pub fn available_generators(&self) -> Vec<&str> {
        self.generators.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// First-letter capitalization for accessor names (`toys` -> `getToys`).
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
