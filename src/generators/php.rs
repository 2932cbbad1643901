use super::{capitalize, Generator};
use crate::engine::ClassView;
use crate::parsers::{ClassKind, Method};
use crate::relationship_resolver::AssociationField;

pub struct PhpGenerator;

impl Generator for PhpGenerator {
    fn name(&self) -> &str {
        "php"
    }

    fn file_extension(&self) -> &str {
        "php"
    }

    fn prelude(&self, _classes: &[ClassView<'_>]) -> Option<String> {
        Some("<?php\n\n".to_string())
    }

    fn emit_class(&self, view: &ClassView<'_>) -> String {
        let cls = view.class;
        let mut out = String::new();

        let header = match cls.kind {
            ClassKind::Interface => format!("interface {}", cls.name),
            ClassKind::Abstract => format!("abstract class {}", cls.name),
            ClassKind::Class => format!("class {}", cls.name),
        };
        out.push_str(&header);

        if cls.kind != ClassKind::Interface {
            if let Some(parent) = view.parent_name.as_deref() {
                out.push_str(&format!(" extends {}", parent));
            }
        }

        if !view.interfaces.is_empty() {
            let clause = if cls.kind == ClassKind::Interface {
                "extends"
            } else {
                "implements"
            };
            out.push_str(&format!(" {} {}", clause, view.interfaces.join(", ")));
        }

        out.push_str(" {\n");

        let mut members: Vec<String> = Vec::new();

        let fields = emit_fields(view);
        if !fields.is_empty() {
            members.push(fields);
        }

        if cls.kind != ClassKind::Interface {
            members.push(emit_constructor(view));
            for field in &view.association_fields {
                members.push(emit_accessors(field));
            }
            for method in &cls.methods {
                members.push(emit_method(method));
            }
        }

        out.push_str(&members.join("\n"));
        out.push_str("}\n\n");
        out
    }

    fn epilogue(&self) -> Option<String> {
        Some("?>\n".to_string())
    }
}

fn emit_fields(view: &ClassView<'_>) -> String {
    let mut out = String::new();

    for attr in &view.unique {
        out.push_str(&format!(
            "    {} ${};\n",
            attr.visibility.keyword(),
            attr.name
        ));
    }

    for field in &view.association_fields {
        out.push_str(&format!("    private ${};\n", field.field_name()));
    }

    out
}

fn emit_constructor(view: &ClassView<'_>) -> String {
    let mut params: Vec<String> = Vec::new();
    params.extend(view.inherited.iter().map(|a| format!("${}", a.name)));
    params.extend(view.unique.iter().map(|a| format!("${}", a.name)));
    for field in view.constructor_fields() {
        if field.is_collection {
            params.push(format!("${} = null", field.field_name()));
        } else {
            params.push(format!("${}", field.field_name()));
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "    public function __construct({}) {{\n",
        params.join(", ")
    ));

    if view.parent_name.is_some() {
        let inherited_names: Vec<String> =
            view.inherited.iter().map(|a| format!("${}", a.name)).collect();
        out.push_str(&format!(
            "        parent::__construct({});\n",
            inherited_names.join(", ")
        ));
    }

    for attr in &view.unique {
        out.push_str(&format!("        $this->{} = ${};\n", attr.name, attr.name));
    }

    for field in &view.association_fields {
        let name = field.field_name();
        if field.is_collection {
            out.push_str(&format!("        $this->{} = ${} ?? [];\n", name, name));
        } else {
            out.push_str(&format!("        $this->{} = ${};\n", name, name));
        }
    }

    out.push_str("    }\n");
    out
}

fn emit_accessors(field: &AssociationField) -> String {
    let name = field.field_name();
    let accessor = capitalize(&name);
    let mut out = String::new();

    out.push_str(&format!(
        "    public function get{}() {{\n        return $this->{};\n    }}\n",
        accessor, name
    ));
    out.push('\n');
    out.push_str(&format!(
        "    public function set{}(${}) {{\n        $this->{} = ${};\n    }}\n",
        accessor, name, name, name
    ));

    if field.is_collection {
        let element = field.element_name();
        out.push('\n');
        out.push_str(&format!(
            "    public function add{}(${}) {{\n",
            field.target, element
        ));
        out.push_str(&format!("        if ($this->{} === null) {{\n", name));
        out.push_str(&format!("            $this->{} = [];\n", name));
        out.push_str("        }\n");
        out.push_str(&format!("        $this->{}[] = ${};\n", name, element));
        out.push_str("    }\n");
    }

    out
}

fn emit_method(method: &Method) -> String {
    let params: Vec<String> = method
        .parameters
        .iter()
        .map(|p| format!("${}", p.name))
        .collect();

    let mut out = String::new();
    out.push_str(&format!(
        "    {} function {}({}) {{\n",
        method.visibility.keyword(),
        method.name,
        params.join(", ")
    ));
    out.push_str(&format!(
        "        // TODO: Implement {} method\n",
        method.name
    ));
    if let Some(line) = default_return(&method.return_type) {
        out.push_str(line);
    }
    out.push_str("    }\n");
    out
}

fn default_return(return_type: &str) -> Option<&'static str> {
    match return_type {
        "int" | "integer" => Some("        return 0;\n"),
        "bool" | "boolean" => Some("        return false;\n"),
        "float" | "double" => Some("        return 0.0;\n"),
        "void" => None,
        _ => Some("        return null;\n"),
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::generate;
    use crate::parsers::*;

    fn attr(id: u64, name: &str, type_name: &str, visibility: Visibility) -> Attribute {
        Attribute {
            id,
            name: name.to_string(),
            type_name: type_name.to_string(),
            visibility,
        }
    }

    fn method(id: u64, name: &str, return_type: &str) -> Method {
        Method {
            id,
            name: name.to_string(),
            return_type: return_type.to_string(),
            visibility: Visibility::Public,
            parameters: vec![],
        }
    }

    fn class(id: u64, name: &str, kind: ClassKind) -> ClassModel {
        ClassModel {
            id,
            name: name.to_string(),
            kind,
            attributes: vec![],
            methods: vec![],
            position: None,
        }
    }

    #[test]
    fn file_is_wrapped_in_php_tags() {
        let classes = vec![class(1, "Ghost", ClassKind::Class)];
        let out = generate(&classes, &[], "php").unwrap();
        assert!(out.starts_with("<?php\n\n"));
        assert!(out.ends_with("?>\n"));
    }

    #[test]
    fn headers_per_kind() {
        let a = class(1, "Base", ClassKind::Abstract);
        let i = class(2, "Speaker", ClassKind::Interface);
        let c = class(3, "Impl", ClassKind::Class);

        let associations = vec![
            AssociationModel {
                id: 100,
                kind: AssociationKind::Extends,
                source_id: 3,
                target_id: 1,
                label: None,
            },
            AssociationModel {
                id: 101,
                kind: AssociationKind::Implement,
                source_id: 3,
                target_id: 2,
                label: None,
            },
        ];

        let out = generate(&[a, i, c], &associations, "php").unwrap();
        assert!(out.contains("abstract class Base {\n"));
        assert!(out.contains("interface Speaker {\n"));
        assert!(out.contains("class Impl extends Base implements Speaker {\n"));
    }

    #[test]
    fn constructor_chains_to_parent() {
        let mut animal = class(1, "Animal", ClassKind::Class);
        animal
            .attributes
            .push(attr(10, "name", "String", Visibility::Private));
        let mut dog = class(2, "Dog", ClassKind::Class);
        dog.attributes
            .push(attr(11, "breed", "String", Visibility::Private));

        let associations = vec![AssociationModel {
            id: 100,
            kind: AssociationKind::Extends,
            source_id: 2,
            target_id: 1,
            label: None,
        }];

        let out = generate(&[animal, dog], &associations, "php").unwrap();
        assert!(out.contains("    private $name;\n"));
        assert!(out.contains("    public function __construct($name, $breed) {\n"));
        assert!(out.contains("        parent::__construct($name);\n"));
        assert!(out.contains("        $this->breed = $breed;\n"));
    }

    #[test]
    fn collection_association_members() {
        let order = class(1, "Order", ClassKind::Class);
        let item = class(2, "Item", ClassKind::Class);

        let associations = vec![AssociationModel {
            id: 100,
            kind: AssociationKind::Composition,
            source_id: 1,
            target_id: 2,
            label: Some("1:*".to_string()),
        }];

        let out = generate(&[order, item], &associations, "php").unwrap();
        assert!(out.contains("    private $items;\n"));
        assert!(out.contains("    public function __construct($items = null) {\n"));
        assert!(out.contains("        $this->items = $items ?? [];\n"));
        assert!(out.contains(
            "    public function getItems() {\n        return $this->items;\n    }\n"
        ));
        assert!(out.contains(
            "    public function setItems($items) {\n        $this->items = $items;\n    }\n"
        ));
        assert!(out.contains("    public function addItem($item) {\n"));
        assert!(out.contains("        if ($this->items === null) {\n"));
        assert!(out.contains("        $this->items[] = $item;\n"));
    }

    #[test]
    fn interface_methods_are_skipped() {
        let mut pet = class(1, "Pet", ClassKind::Interface);
        pet.methods.push(method(10, "play", "void"));

        let out = generate(&[pet], &[], "php").unwrap();
        assert!(out.contains("interface Pet {\n"));
        assert!(!out.contains("function play"));
    }

    #[test]
    fn method_stub_default_returns() {
        let mut cls = class(1, "Flags", ClassKind::Class);
        cls.methods.push(method(1, "enabled", "bool"));
        cls.methods.push(method(2, "count", "int"));
        cls.methods.push(method(3, "ratio", "float"));
        cls.methods.push(method(4, "reset", "void"));
        cls.methods.push(method(5, "label", "string"));

        let out = generate(&[cls], &[], "php").unwrap();
        assert!(out.contains(
            "    public function enabled() {\n        // TODO: Implement enabled method\n        return false;\n    }\n"
        ));
        assert!(out.contains("        return 0;\n"));
        assert!(out.contains("        return 0.0;\n"));
        assert!(out.contains(
            "    public function reset() {\n        // TODO: Implement reset method\n    }\n"
        ));
        assert!(out.contains("        return null;\n"));
    }

    #[test]
    fn method_parameters_use_dollar_names() {
        let mut cls = class(1, "Calc", ClassKind::Class);
        cls.methods.push(Method {
            id: 1,
            name: "add".to_string(),
            return_type: "int".to_string(),
            visibility: Visibility::Public,
            parameters: vec![
                Parameter {
                    name: "a".to_string(),
                    type_name: "int".to_string(),
                },
                Parameter {
                    name: "b".to_string(),
                    type_name: "int".to_string(),
                },
            ],
        });

        let out = generate(&[cls], &[], "php").unwrap();
        assert!(out.contains("    public function add($a, $b) {\n"));
    }
}
