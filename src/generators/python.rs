use super::Generator;
use crate::engine::ClassView;
use crate::parsers::{ClassKind, Method};
use crate::relationship_resolver::AssociationField;

pub struct PythonGenerator;

impl Generator for PythonGenerator {
    fn name(&self) -> &str {
        "python"
    }

    fn file_extension(&self) -> &str {
        "py"
    }

    fn prelude(&self, classes: &[ClassView<'_>]) -> Option<String> {
        classes
            .iter()
            .any(|v| v.class.kind.is_abstract_like())
            .then(|| "from abc import ABC, abstractmethod\n\n".to_string())
    }

    fn emit_class(&self, view: &ClassView<'_>) -> String {
        let cls = view.class;
        let mut out = String::new();

        let mut bases: Vec<&str> = Vec::new();
        if let Some(parent) = view.parent_name.as_deref() {
            bases.push(parent);
        }
        bases.extend(view.interfaces.iter().map(String::as_str));

        let base_clause = if bases.is_empty() {
            if cls.kind.is_abstract_like() {
                "ABC".to_string()
            } else {
                "object".to_string()
            }
        } else {
            bases.join(", ")
        };

        out.push_str(&format!("class {}({}):\n", cls.name, base_clause));

        let mut members: Vec<String> = Vec::new();

        if cls.kind != ClassKind::Interface && !view.is_empty() {
            members.push(emit_constructor(view));
            for field in &view.association_fields {
                members.push(emit_accessors(field));
            }
        }

        for method in &cls.methods {
            members.push(emit_method(cls.kind, method));
        }

        if members.is_empty() {
            out.push_str("    pass\n");
        } else {
            out.push_str(&members.join("\n"));
        }
        out.push('\n');
        out
    }
}

fn emit_constructor(view: &ClassView<'_>) -> String {
    let mut params: Vec<String> = Vec::new();
    params.extend(view.inherited.iter().map(|a| a.name.clone()));
    params.extend(view.unique.iter().map(|a| a.name.clone()));
    for field in view.constructor_fields() {
        if field.is_collection {
            params.push(format!("{}=None", field.field_name()));
        } else {
            params.push(field.field_name());
        }
    }

    let mut out = String::new();
    if params.is_empty() {
        out.push_str("    def __init__(self):\n");
    } else {
        out.push_str(&format!("    def __init__(self, {}):\n", params.join(", ")));
    }

    let mut body = String::new();
    if view.parent_name.is_some() {
        let inherited_names: Vec<&str> =
            view.inherited.iter().map(|a| a.name.as_str()).collect();
        body.push_str(&format!(
            "        super().__init__({})\n",
            inherited_names.join(", ")
        ));
    }
    for attr in &view.unique {
        body.push_str(&format!("        self.{} = {}\n", attr.name, attr.name));
    }
    for field in &view.association_fields {
        let name = field.field_name();
        if field.is_collection {
            body.push_str(&format!(
                "        self.{} = {} if {} is not None else []\n",
                name, name, name
            ));
        } else {
            body.push_str(&format!("        self.{} = {}\n", name, name));
        }
    }

    if body.is_empty() {
        body.push_str("        pass\n");
    }

    out.push_str(&body);
    out
}

fn emit_accessors(field: &AssociationField) -> String {
    let name = field.field_name();
    let mut out = String::new();

    out.push_str(&format!(
        "    def get_{}(self):\n        return self.{}\n",
        name, name
    ));
    out.push('\n');
    out.push_str(&format!(
        "    def set_{}(self, {}):\n        self.{} = {}\n",
        name, name, name, name
    ));

    if field.is_collection {
        let element = field.element_name();
        out.push('\n');
        out.push_str(&format!("    def add_{}(self, {}):\n", element, element));
        out.push_str(&format!("        if self.{} is None:\n", name));
        out.push_str(&format!("            self.{} = []\n", name));
        out.push_str(&format!("        self.{}.append({})\n", name, element));
    }

    out
}

fn emit_method(kind: ClassKind, method: &Method) -> String {
    let params: Vec<&str> = method.parameters.iter().map(|p| p.name.as_str()).collect();
    let signature = if params.is_empty() {
        format!("    def {}(self):\n", method.name)
    } else {
        format!("    def {}(self, {}):\n", method.name, params.join(", "))
    };

    let mut out = String::new();
    if kind.is_abstract_like() {
        out.push_str("    @abstractmethod\n");
        out.push_str(&signature);
        out.push_str("        raise NotImplementedError()\n");
    } else {
        out.push_str(&signature);
        out.push_str(&format!(
            "        # TODO: Implement {} method\n",
            method.name
        ));
        out.push_str(default_return(&method.return_type));
    }
    out
}

fn default_return(return_type: &str) -> &'static str {
    match return_type {
        "bool" | "boolean" => "        return False\n",
        "int" | "integer" => "        return 0\n",
        "float" | "double" => "        return 0.0\n",
        "void" | "" => "        pass\n",
        _ => "        return None\n",
    }
}
