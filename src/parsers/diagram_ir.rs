use serde::{Deserialize, Serialize};

/// Identifier assigned by the diagram editor. Stable across saves.
pub type ClassId = u64;

/// A UML class diagram as persisted by the editor: the aggregate root
/// consumed by the code generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagram {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, alias = "uml_classes")]
    pub classes: Vec<ClassModel>,

    #[serde(default, alias = "uml_association", alias = "uml_associations")]
    pub associations: Vec<AssociationModel>,
}

/// One class, abstract class, or interface node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassModel {
    pub id: ClassId,
    pub name: String,

    #[serde(default, alias = "shape")]
    pub kind: ClassKind,

    #[serde(default)]
    pub attributes: Vec<Attribute>,

    #[serde(default)]
    pub methods: Vec<Method>,

    /// Canvas coordinate. Carried through untouched; irrelevant to
    /// code generation.
    #[serde(default)]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Class,
    Abstract,
    Interface,
}

impl ClassKind {
    /// Interfaces and abstract classes share "no concrete body" semantics
    /// in most backends.
    pub fn is_abstract_like(self) -> bool {
        matches!(self, ClassKind::Abstract | ClassKind::Interface)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    pub id: u64,
    pub name: String,

    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default)]
    pub visibility: Visibility,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Method {
    pub id: u64,
    pub name: String,

    #[serde(default, rename = "returnType", alias = "return_type")]
    pub return_type: String,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "type")]
    pub type_name: String,
}

/// Member visibility. The editor encodes these as `+` / `-` / `#`;
/// both spellings deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[serde(alias = "+")]
    #[default]
    Public,

    #[serde(alias = "-")]
    Private,

    #[serde(alias = "#")]
    Protected,
}

impl Visibility {
    /// Keyword spelling shared by the Java and PHP backends.
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A directed edge between two classes. `extends` / `implement` read as
/// "source derives-from / implements target".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssociationModel {
    pub id: u64,

    #[serde(alias = "shape")]
    pub kind: AssociationKind,

    #[serde(rename = "sourceId", alias = "source")]
    pub source_id: ClassId,

    #[serde(rename = "targetId", alias = "target")]
    pub target_id: ClassId,

    /// Multiplicity such as `1:1` or `1:*`. Only the presence of `*` is
    /// consumed, to pick collection- over scalar-valued fields.
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssociationKind {
    Extends,

    #[serde(alias = "implements")]
    Implement,

    Association,
    Aggregation,
    Composition,
}

impl AssociationModel {
    /// A `*` on either side of the multiplicity label selects a
    /// collection-valued field; absent or unparseable labels mean scalar.
    pub fn is_collection(&self) -> bool {
        self.label.as_deref().is_some_and(|l| l.contains('*'))
    }
}
