//! Class-description projection.
//!
//! Read-only transform from the inferred document to
//! [`ClassDescription`] values. Types and optionality were fixed by
//! field/element inference; this module only renders those decisions
//! into a neutral class shape.

use super::{
    ClassDescription, ConstructorDescription, ConstructorKind, ExportError, MethodDescription,
    MethodKind, ParameterDescription, PropertyDescription,
};
use crate::models::{Document, Element, Field, naming};

/// Projects inferred elements into class descriptions.
pub struct ClassExporter;

impl ClassExporter {
    /// Projects one element (recursively including its children in
    /// hierarchical mode).
    pub fn export_element(document: &Document, key: &str) -> Result<ClassDescription, ExportError> {
        let element = document
            .element(key)
            .ok_or_else(|| ExportError::UnknownElement(key.to_string()))?;
        Ok(Self::class_for(document, element))
    }

    /// Projects the whole document: every element class (or the root
    /// class with nested children, in hierarchical mode) plus the
    /// document class with its import/export file operation pair.
    ///
    /// # Example
    ///
    /// ```rust
    /// use xml_modelling_sdk::export::ClassExporter;
    /// use xml_modelling_sdk::import::XmlImporter;
    ///
    /// let doc = XmlImporter::default()
    ///     .import_str(r#"<Root><Item id="1"/></Root>"#)
    ///     .unwrap();
    /// let classes = ClassExporter::export_document(&doc);
    /// assert_eq!(classes.last().unwrap().name, "RootDocument");
    /// ```
    pub fn export_document(document: &Document) -> Vec<ClassDescription> {
        let mut classes = if document.preserve_hierarchy() {
            vec![Self::class_for(document, document.root_element())]
        } else {
            document
                .elements()
                .map(|element| Self::class_for(document, element))
                .collect()
        };
        classes.push(Self::document_class(document));
        classes
    }

    fn class_for(document: &Document, element: &Element) -> ClassDescription {
        let mut properties = Vec::new();
        let mut methods = Vec::new();
        let mut per_value_params = Vec::new();

        for field in element.fields() {
            let (type_name, optional) = Self::property_type(field);
            let rendered = if optional {
                format!("Option<{type_name}>")
            } else {
                type_name.clone()
            };
            properties.push(PropertyDescription {
                name: field.property_name().to_string(),
                type_name: rendered.clone(),
                optional,
                summary: if field.summary().is_empty() {
                    format!("Value of '{}'.", field.name())
                } else {
                    field.summary().to_string()
                },
            });
            per_value_params.push(ParameterDescription {
                name: naming::camel_case(field.property_name()),
                type_name: rendered,
            });
            methods.push(Self::import_method(field, &type_name));
            methods.push(Self::export_method(field, &type_name));
        }

        for child_key in element.children() {
            if let Some(child) = document.element(child_key) {
                properties.push(PropertyDescription {
                    name: child.class_name().to_string(),
                    type_name: format!("Vec<{}>", child.class_name()),
                    optional: false,
                    summary: format!("Child '{}' elements.", child.name()),
                });
                per_value_params.push(ParameterDescription {
                    name: naming::camel_case(child.class_name()),
                    type_name: format!("Vec<{}>", child.class_name()),
                });
            }
        }

        let constructors = vec![
            ConstructorDescription {
                kind: ConstructorKind::PerValue,
                parameters: per_value_params,
                summary: "Builds the instance from already-typed values.".to_string(),
            },
            ConstructorDescription {
                kind: ConstructorKind::FromNode,
                parameters: vec![ParameterDescription {
                    name: "node".to_string(),
                    type_name: "XmlNode".to_string(),
                }],
                summary: "Re-derives every field from an element node via its import \
                          contract; absent-but-optional fields default to none, a \
                          missing non-optional field or child is a data error."
                    .to_string(),
            },
        ];

        let nested = if document.preserve_hierarchy() {
            element
                .children()
                .iter()
                .filter_map(|key| document.element(key))
                .map(|child| Self::class_for(document, child))
                .collect()
        } else {
            Vec::new()
        };

        ClassDescription {
            name: element.class_name().to_string(),
            summary: format!("Typed access to '{}' elements.", element.name()),
            properties,
            constructors,
            methods,
            nested,
        }
    }

    /// Generated type and whether it needs an optional wrapper: widened
    /// whenever the field may be absent or empty and the type has no
    /// native null form (inherently textual types keep their plain form
    /// and represent absence by null/empty-string convention).
    fn property_type(field: &Field) -> (String, bool) {
        let selected = field.selected();
        let optional =
            (field.is_optional() || field.can_be_empty()) && !selected.has_native_null();
        (selected.type_name(), optional)
    }

    fn import_method(field: &Field, type_name: &str) -> MethodDescription {
        let mut summary = format!(
            "Parses the raw '{}' string into a {}; a value that fails to \
             parse is a data error",
            field.name(),
            type_name
        );
        if field.is_optional() || field.can_be_empty() {
            summary.push('.');
        } else {
            summary.push_str("; a null or empty string is a (distinct) data error.");
        }
        MethodDescription {
            kind: MethodKind::ImportField,
            name: format!("Import{}", field.property_name()),
            parameters: vec![ParameterDescription {
                name: "raw".to_string(),
                type_name: "String".to_string(),
            }],
            return_type: type_name.to_string(),
            summary,
        }
    }

    fn export_method(field: &Field, type_name: &str) -> MethodDescription {
        MethodDescription {
            kind: MethodKind::ExportField,
            name: format!("Export{}", field.property_name()),
            parameters: vec![ParameterDescription {
                name: "value".to_string(),
                type_name: type_name.to_string(),
            }],
            return_type: "String".to_string(),
            summary: format!(
                "Renders '{}' back to its canonical string form, yielding null \
                 only if the field is optional ({}) and an empty string only if \
                 it can be empty ({}).",
                field.name(),
                field.is_optional(),
                field.can_be_empty()
            ),
        }
    }

    fn document_class(document: &Document) -> ClassDescription {
        let root = document.root_element();
        let root_class = root.class_name().to_string();
        ClassDescription {
            name: format!("{root_class}Document"),
            summary: format!("Imports and exports whole '{}' documents.", root.name()),
            properties: vec![
                PropertyDescription {
                    name: "Version".to_string(),
                    type_name: "Option<String>".to_string(),
                    optional: true,
                    summary: "XML declaration version.".to_string(),
                },
                PropertyDescription {
                    name: "Encoding".to_string(),
                    type_name: "Option<String>".to_string(),
                    optional: true,
                    summary: "XML declaration encoding.".to_string(),
                },
                PropertyDescription {
                    name: root_class.clone(),
                    type_name: root_class.clone(),
                    optional: false,
                    summary: "The document's root element.".to_string(),
                },
            ],
            constructors: vec![ConstructorDescription {
                kind: ConstructorKind::PerValue,
                parameters: vec![ParameterDescription {
                    name: naming::camel_case(&root_class),
                    type_name: root_class.clone(),
                }],
                summary: "Wraps an existing root element.".to_string(),
            }],
            methods: vec![
                MethodDescription {
                    kind: MethodKind::ImportDocument,
                    name: "ImportDocument".to_string(),
                    parameters: vec![ParameterDescription {
                        name: "path".to_string(),
                        type_name: "String".to_string(),
                    }],
                    return_type: root_class.clone(),
                    summary: "Reads and parses the file, then builds the root element \
                              through its node constructor; unreadable or malformed \
                              input is a data error."
                        .to_string(),
                },
                MethodDescription {
                    kind: MethodKind::ExportDocument,
                    name: "ExportDocument".to_string(),
                    parameters: vec![ParameterDescription {
                        name: "path".to_string(),
                        type_name: "String".to_string(),
                    }],
                    return_type: "()".to_string(),
                    summary: "Renders the root element back to XML and writes it to \
                              the file."
                        .to_string(),
                },
            ],
            nested: Vec::new(),
        }
    }
}
