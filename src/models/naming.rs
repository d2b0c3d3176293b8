//! Identifier transforms from XML names to generated-language names.
//!
//! XML names may contain underscores, dashes, dots and namespace colons;
//! every run of non-alphanumeric characters is treated as a word boundary.

/// Upper-camel-case transform used for class names and property names.
///
/// The first letter of each word is upper-cased; the remaining characters
/// keep their original case, so acronyms like `CDATA` survive intact.
pub fn pascal_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    for word in split_words(name) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            first.to_uppercase().for_each(|c| result.push(c));
            result.push_str(chars.as_str());
        }
    }
    result
}

/// Lower-camel-case transform used for constructor parameter names.
pub fn camel_case(name: &str) -> String {
    let pascal = pascal_case(name);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(pascal.len());
            first.to_lowercase().for_each(|c| result.push(c));
            result.push_str(chars.as_str());
            result
        }
        None => pascal,
    }
}

fn split_words(name: &str) -> impl Iterator<Item = &str> {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_capitalizes_underscore_words() {
        assert_eq!(pascal_case("item_list"), "ItemList");
        assert_eq!(pascal_case("note"), "Note");
    }

    #[test]
    fn pascal_case_keeps_acronyms() {
        assert_eq!(pascal_case("CDATA"), "CDATA");
        assert_eq!(pascal_case("serialNumber"), "SerialNumber");
    }

    #[test]
    fn pascal_case_splits_on_namespace_colon() {
        assert_eq!(pascal_case("xsi:type"), "XsiType");
    }

    #[test]
    fn pascal_case_handles_dashes_and_dots() {
        assert_eq!(pascal_case("max-speed"), "MaxSpeed");
        assert_eq!(pascal_case("a.b"), "AB");
    }

    #[test]
    fn camel_case_lowers_first_letter() {
        assert_eq!(camel_case("Item_List"), "itemList");
        assert_eq!(camel_case("Text"), "text");
    }
}
