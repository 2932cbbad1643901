use crate::parsers::{Attribute, ClassId, ClassModel};
use crate::relationship_resolver::ResolvedRelationships;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// An `extends` cycle in the diagram. Merging would never terminate, so
/// this aborts generation instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cyclic inheritance between classes: {}", .classes.join(" -> "))]
pub struct CyclicInheritanceError {
    /// The classes forming the cycle, in chain order.
    pub classes: Vec<String>,
}

/// Per-class attribute partition after inheritance flattening.
#[derive(Debug, Clone, Default)]
pub struct MergedAttributes {
    /// The parent's full (already flattened) attribute set, in parent
    /// declaration order. Never re-declared by the child.
    pub inherited: Vec<Attribute>,

    /// The class's own attributes minus any whose name shadows an
    /// inherited one. A shadowed name keeps only the ancestor declaration;
    /// the child's type and visibility for it are discarded.
    pub unique: Vec<Attribute>,
}

/// Flatten attributes for every class, processing parents before children.
///
/// Input order of `classes` carries no ordering guarantee for the
/// `extends` graph; the traversal computes its own parent-first order and
/// detects cycles while doing so.
pub fn merge_all(
    classes: &[ClassModel],
    resolved: &ResolvedRelationships,
) -> Result<IndexMap<ClassId, MergedAttributes>, CyclicInheritanceError> {
    let by_id: HashMap<ClassId, &ClassModel> = classes.iter().map(|c| (c.id, c)).collect();

    // First class wins on duplicate names, matching lookup-by-name
    // semantics everywhere else in the engine.
    let mut by_name: HashMap<&str, ClassId> = HashMap::new();
    for cls in classes {
        by_name.entry(cls.name.as_str()).or_insert(cls.id);
    }

    let parent_id = |id: ClassId| -> Option<ClassId> {
        resolved
            .parent_of(id)
            .and_then(|name| by_name.get(name).copied())
    };

    // Parent-before-child order via chain walking. Single-parent model:
    // each class has at most one outgoing extends edge, so a chain walk
    // with a visited marker is a full topological sort.
    let mut done: HashSet<ClassId> = HashSet::new();
    let mut order: Vec<ClassId> = Vec::with_capacity(classes.len());

    for cls in classes {
        let mut chain: Vec<ClassId> = Vec::new();
        let mut cursor = Some(cls.id);

        while let Some(id) = cursor {
            if done.contains(&id) {
                break;
            }
            if let Some(pos) = chain.iter().position(|&c| c == id) {
                let names = chain[pos..]
                    .iter()
                    .map(|c| by_id[c].name.clone())
                    .collect();
                return Err(CyclicInheritanceError { classes: names });
            }
            chain.push(id);
            cursor = parent_id(id);
        }

        for id in chain.into_iter().rev() {
            done.insert(id);
            order.push(id);
        }
    }

    let mut merged: IndexMap<ClassId, MergedAttributes> = IndexMap::with_capacity(classes.len());

    for id in order {
        let cls = by_id[&id];

        let inherited: Vec<Attribute> = match parent_id(id) {
            Some(pid) => {
                let parent = &merged[&pid];
                parent
                    .inherited
                    .iter()
                    .chain(parent.unique.iter())
                    .cloned()
                    .collect()
            }
            None => Vec::new(),
        };

        let inherited_names: HashSet<&str> =
            inherited.iter().map(|a| a.name.as_str()).collect();

        let unique: Vec<Attribute> = cls
            .attributes
            .iter()
            .filter(|a| !inherited_names.contains(a.name.as_str()))
            .cloned()
            .collect();

        merged.insert(id, MergedAttributes { inherited, unique });
    }

    Ok(merged)
}
