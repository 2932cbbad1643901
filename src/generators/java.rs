use super::{capitalize, Generator};
use crate::engine::ClassView;
use crate::parsers::{ClassKind, Method};
use crate::relationship_resolver::AssociationField;

pub struct JavaGenerator;

impl Generator for JavaGenerator {
    fn name(&self) -> &str {
        "java"
    }

    fn file_extension(&self) -> &str {
        "java"
    }

    fn prelude(&self, classes: &[ClassView<'_>]) -> Option<String> {
        classes
            .iter()
            .any(|v| v.collection_fields().next().is_some())
            .then(|| "import java.util.ArrayList;\nimport java.util.List;\n\n".to_string())
    }

    fn emit_class(&self, view: &ClassView<'_>) -> String {
        let cls = view.class;
        let mut out = String::new();

        let modifier = match cls.kind {
            ClassKind::Interface => "interface",
            ClassKind::Abstract => "abstract class",
            ClassKind::Class => "class",
        };

        out.push_str(&format!("public {} {}", modifier, cls.name));

        if cls.kind != ClassKind::Interface {
            if let Some(parent) = view.parent_name.as_deref() {
                out.push_str(&format!(" extends {}", parent));
            }
        }

        if !view.interfaces.is_empty() {
            // Interfaces extending interfaces; classes implement them.
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
}

fn field_type(field: &AssociationField) -> String {
    if field.is_collection {
        format!("List<{}>", field.target)
    } else {
        field.target.clone()
    }
}

fn emit_fields(view: &ClassView<'_>) -> String {
    let mut out = String::new();

    // Inherited attributes are never re-declared.
    for attr in &view.unique {
        out.push_str(&format!(
            "    {} {} {};\n",
            attr.visibility.keyword(),
            attr.type_name,
            attr.name
        ));
    }

    for field in &view.association_fields {
        out.push_str(&format!(
            "    private {} {};\n",
            field_type(field),
            field.field_name()
        ));
    }

    out
}

fn emit_constructor(view: &ClassView<'_>) -> String {
    let mut params: Vec<String> = Vec::new();
    params.extend(
        view.inherited
            .iter()
            .map(|a| format!("{} {}", a.type_name, a.name)),
    );
    params.extend(
        view.unique
            .iter()
            .map(|a| format!("{} {}", a.type_name, a.name)),
    );
    for field in view.constructor_fields() {
        params.push(format!("{} {}", field_type(field), field.field_name()));
    }

    let name = &view.class.name;
    let mut out = String::new();

    if params.is_empty() {
        if view.parent_name.is_some() {
            out.push_str(&format!(
                "    public {}() {{\n        super();\n    }}\n",
                name
            ));
        } else {
            out.push_str(&format!("    public {}() {{\n    }}\n", name));
        }
        return out;
    }

    out.push_str(&format!("    public {}({}) {{\n", name, params.join(", ")));

    if view.parent_name.is_some() {
        let inherited_names: Vec<&str> =
            view.inherited.iter().map(|a| a.name.as_str()).collect();
        out.push_str(&format!("        super({});\n", inherited_names.join(", ")));
    }

    for attr in &view.unique {
        out.push_str(&format!("        this.{} = {};\n", attr.name, attr.name));
    }

    for field in &view.association_fields {
        let name = field.field_name();
        if field.is_collection {
            out.push_str(&format!(
                "        this.{} = {} != null ? {} : new ArrayList<>();\n",
                name, name, name
            ));
        } else {
            out.push_str(&format!("        this.{} = {};\n", name, name));
        }
    }

    out.push_str("    }\n");
    out
}

fn emit_accessors(field: &AssociationField) -> String {
    let name = field.field_name();
    let accessor = capitalize(&name);
    let ty = field_type(field);
    let mut out = String::new();

    out.push_str(&format!(
        "    public {} get{}() {{\n        return {};\n    }}\n",
        ty, accessor, name
    ));
    out.push('\n');
    out.push_str(&format!(
        "    public void set{}({} {}) {{\n        this.{} = {};\n    }}\n",
        accessor, ty, name, name, name
    ));

    if field.is_collection {
        let element = field.element_name();
        out.push('\n');
        out.push_str(&format!(
            "    public void add{}({} {}) {{\n",
            field.target, field.target, element
        ));
        out.push_str(&format!("        if (this.{} == null) {{\n", name));
        out.push_str(&format!("            this.{} = new ArrayList<>();\n", name));
        out.push_str("        }\n");
        out.push_str(&format!("        this.{}.add({});\n", name, element));
        out.push_str("    }\n");
    }

    out
}

fn emit_method(method: &Method) -> String {
    let params: Vec<String> = method
        .parameters
        .iter()
        .map(|p| format!("{} {}", p.type_name, p.name))
        .collect();

    let mut out = String::new();
    out.push_str(&format!(
        "    {} {} {}({}) {{\n",
        method.visibility.keyword(),
        method.return_type,
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
        "int" => Some("        return 0;\n"),
        "boolean" => Some("        return false;\n"),
        "double" | "float" => Some("        return 0.0;\n"),
        "void" => None,
        _ => Some("        return null;\n"),
    }
}
