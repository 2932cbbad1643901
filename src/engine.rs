//! The code generation engine: a stateless, pure transformation from a
//! class/association graph to source text in one target language.
//!
//! Three passes share one immutable input: the relationship resolver scans
//! associations into lookup maps, the attribute merger flattens
//! inheritance in parent-before-child order, and the per-language backend
//! renders each class. Passes 1-2 are language-independent; only the
//! backend varies per call.

use crate::attribute_merger::{self, CyclicInheritanceError};
use crate::generators::{GeneratedOutput, GeneratorRegistry};
use crate::parsers::{AssociationModel, Attribute, ClassModel, Diagram};
use crate::relationship_resolver::{self, AssociationField, ResolutionWarning};

/// Returned verbatim when the requested language has no backend. A
/// sentinel output, not an error.
pub const UNSUPPORTED_LANGUAGE_PLACEHOLDER: &str = "// Unsupported language";

/// Language name to conventional file extension. Callers writing output
/// files must use this mapping rather than invent their own.
pub const FILE_EXTENSIONS: &[(&str, &str)] = &[("python", "py"), ("java", "java"), ("php", "php")];

pub fn file_extension_for(language: &str) -> Option<&'static str> {
    FILE_EXTENSIONS
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, ext)| *ext)
}

/// Everything a backend needs to render one class: the class itself plus
/// the resolved and merged data from passes 1-2.
#[derive(Debug)]
pub struct ClassView<'a> {
    pub class: &'a ClassModel,
    pub parent_name: Option<String>,
    pub interfaces: Vec<String>,
    /// Has-a fields in edge input order.
    pub association_fields: Vec<AssociationField>,
    /// Flattened ancestor attributes, parent declaration order.
    pub inherited: Vec<Attribute>,
    /// Own attributes minus shadowed names.
    pub unique: Vec<Attribute>,
}

impl ClassView<'_> {
    pub fn scalar_fields(&self) -> impl Iterator<Item = &AssociationField> {
        self.association_fields.iter().filter(|f| !f.is_collection)
    }

    pub fn collection_fields(&self) -> impl Iterator<Item = &AssociationField> {
        self.association_fields.iter().filter(|f| f.is_collection)
    }

    /// Constructor parameter order for association fields: scalars before
    /// collections, so defaulted collection parameters stay trailing.
    pub fn constructor_fields(&self) -> impl Iterator<Item = &AssociationField> {
        self.scalar_fields().chain(self.collection_fields())
    }

    /// True when the class body would be empty in every backend.
    pub fn is_empty(&self) -> bool {
        self.inherited.is_empty()
            && self.unique.is_empty()
            && self.association_fields.is_empty()
            && self.class.methods.is_empty()
    }
}

/// Generated text plus the non-fatal findings from the resolution scan.
#[derive(Debug)]
pub struct Generation {
    pub content: String,
    pub warnings: Vec<ResolutionWarning>,
}

/// Generate source text for every class, concatenated in class input
/// order.
///
/// Unknown languages yield [`UNSUPPORTED_LANGUAGE_PLACEHOLDER`]; an empty
/// class list yields an empty string. The only error is a cyclic
/// `extends` graph.
pub fn generate(
    classes: &[ClassModel],
    associations: &[AssociationModel],
    language: &str,
) -> Result<String, CyclicInheritanceError> {
    generate_detailed(classes, associations, language).map(|g| g.content)
}

/// [`generate`], keeping resolver warnings for callers that report them.
pub fn generate_detailed(
    classes: &[ClassModel],
    associations: &[AssociationModel],
    language: &str,
) -> Result<Generation, CyclicInheritanceError> {
    if classes.is_empty() {
        return Ok(Generation {
            content: String::new(),
            warnings: Vec::new(),
        });
    }

    let registry = GeneratorRegistry::new();
    let backend = match registry.get(language) {
        Some(backend) => backend,
        None => {
            return Ok(Generation {
                content: UNSUPPORTED_LANGUAGE_PLACEHOLDER.to_string(),
                warnings: Vec::new(),
            })
        }
    };

    let resolved = relationship_resolver::resolve(classes, associations);
    let merged = attribute_merger::merge_all(classes, &resolved)?;

    let views: Vec<ClassView<'_>> = classes
        .iter()
        .map(|cls| {
            let attrs = &merged[&cls.id];
            ClassView {
                class: cls,
                parent_name: resolved.parent_of(cls.id).map(str::to_string),
                interfaces: resolved.interfaces_of(cls.id).to_vec(),
                association_fields: resolved.associations_of(cls.id).to_vec(),
                inherited: attrs.inherited.clone(),
                unique: attrs.unique.clone(),
            }
        })
        .collect();

    let mut content = String::new();
    if let Some(prelude) = backend.prelude(&views) {
        content.push_str(&prelude);
    }
    for view in &views {
        content.push_str(&backend.emit_class(view));
    }
    if let Some(epilogue) = backend.epilogue() {
        content.push_str(&epilogue);
    }

    Ok(Generation {
        content,
        warnings: resolved.warnings,
    })
}

/// Generate one downloadable artifact for a diagram. The filename stem is
/// the diagram name; unknown languages fall back to the language string
/// itself as the extension.
pub fn generate_output(
    diagram: &Diagram,
    language: &str,
) -> Result<GeneratedOutput, CyclicInheritanceError> {
    let content = generate(&diagram.classes, &diagram.associations, language)?;
    let stem = diagram.name.as_deref().unwrap_or("generated");
    let extension = file_extension_for(language).unwrap_or(language);

    Ok(GeneratedOutput {
        filename: format!("{}.{}", stem, extension),
        content,
    })
}
