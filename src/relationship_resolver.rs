use crate::parsers::{AssociationKind, AssociationModel, ClassId, ClassModel};
use indexmap::IndexMap;
use std::fmt;

/// A has-a relationship materialized as a field on the source class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationField {
    /// Name of the target class, used as the field's type.
    pub target: String,
    pub is_collection: bool,
}

impl AssociationField {
    /// Field name: target class lower-cased, pluralized with `s` for
    /// collections.
    pub fn field_name(&self) -> String {
        let lower = self.target.to_lowercase();
        if self.is_collection {
            format!("{}s", lower)
        } else {
            lower
        }
    }

    /// Name for a single element, used for `add` method parameters.
    pub fn element_name(&self) -> String {
        self.target.to_lowercase()
    }
}

/// Non-fatal data-quality findings from the resolution scan. Surfaced to
/// the caller for diagnostics; never abort generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionWarning {
    /// An association endpoint references a class id that is not in the
    /// diagram. The relationship is skipped.
    DanglingEndpoint {
        association_id: u64,
        missing_class_id: ClassId,
    },

    /// A class has more than one `extends` edge. The last one wins;
    /// the earlier parent is discarded.
    DuplicateParent {
        class: String,
        kept: String,
        discarded: String,
    },
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionWarning::DanglingEndpoint {
                association_id,
                missing_class_id,
            } => write!(
                f,
                "association {} references missing class {}; relationship skipped",
                association_id, missing_class_id
            ),
            ResolutionWarning::DuplicateParent {
                class,
                kept,
                discarded,
            } => write!(
                f,
                "class {} has multiple extends edges; keeping {}, discarding {}",
                class, kept, discarded
            ),
        }
    }
}

/// Result of the single association scan: who extends whom, who implements
/// what, and which has-a edges become fields.
#[derive(Debug, Default)]
pub struct ResolvedRelationships {
    parents: IndexMap<ClassId, String>,
    interfaces: IndexMap<ClassId, Vec<String>>,
    associations: IndexMap<ClassId, Vec<AssociationField>>,
    pub warnings: Vec<ResolutionWarning>,
}

impl ResolvedRelationships {
    pub fn parent_of(&self, id: ClassId) -> Option<&str> {
        self.parents.get(&id).map(String::as_str)
    }

    pub fn interfaces_of(&self, id: ClassId) -> &[String] {
        self.interfaces.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn associations_of(&self, id: ClassId) -> &[AssociationField] {
        self.associations
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Scan the associations once and build the relationship lookup maps.
///
/// The result is a pure function of the input set: iteration order of the
/// output only follows edge input order, and dangling endpoints are
/// recorded as warnings rather than errors.
pub fn resolve(
    classes: &[ClassModel],
    associations: &[AssociationModel],
) -> ResolvedRelationships {
    // Arena-style id lookup built once; no per-edge linear scans.
    let by_id: IndexMap<ClassId, &ClassModel> =
        classes.iter().map(|c| (c.id, c)).collect();

    let mut resolved = ResolvedRelationships::default();

    for assoc in associations {
        let target = match by_id.get(&assoc.target_id) {
            Some(cls) => *cls,
            None => {
                resolved.warnings.push(ResolutionWarning::DanglingEndpoint {
                    association_id: assoc.id,
                    missing_class_id: assoc.target_id,
                });
                continue;
            }
        };

        let source = match by_id.get(&assoc.source_id) {
            Some(cls) => *cls,
            None => {
                resolved.warnings.push(ResolutionWarning::DanglingEndpoint {
                    association_id: assoc.id,
                    missing_class_id: assoc.source_id,
                });
                continue;
            }
        };

        match assoc.kind {
            AssociationKind::Extends => {
                if let Some(previous) = resolved
                    .parents
                    .insert(assoc.source_id, target.name.clone())
                {
                    resolved.warnings.push(ResolutionWarning::DuplicateParent {
                        class: source.name.clone(),
                        kept: target.name.clone(),
                        discarded: previous,
                    });
                }
            }
            AssociationKind::Implement => {
                resolved
                    .interfaces
                    .entry(assoc.source_id)
                    .or_default()
                    .push(target.name.clone());
            }
            AssociationKind::Association
            | AssociationKind::Aggregation
            | AssociationKind::Composition => {
                resolved
                    .associations
                    .entry(assoc.source_id)
                    .or_default()
                    .push(AssociationField {
                        target: target.name.clone(),
                        is_collection: assoc.is_collection(),
                    });
            }
        }
    }

    resolved
}
