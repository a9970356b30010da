//! JVM binary class names
//!
//! Override keys use the names `Class.getName()` reports: primitives (`int`),
//! array descriptors (`[I`, `[Ljava.lang.String;`) and binary names with `$`
//! separating member classes (`java.util.Map$Entry`). Parsing them is
//! [`ClassRef::parse`]; this module derives Frege names from the result.

use nativegen_engine::model::primitive_code;
use nativegen_engine::ClassRef;

/// Frege name for an override that names only a purity.
///
/// - primitives are capitalized: `int` → `Int`
/// - arrays use the component's source name: `[I` → `intArr`
/// - member classes join with `_`: `java.util.Map$Entry` → `Map_Entry`
/// - anything else keeps its simple name
pub fn derived_type_name(class: &ClassRef) -> String {
    if let Some(component) = &class.component {
        return format!("{}Arr", component.canonical_name());
    }
    if primitive_code(&class.name).is_some() {
        return capitalize(&class.name);
    }
    if class.member {
        class.unqualified_name().replace('$', "_")
    } else {
        class.unqualified_name().to_string()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_type_names() {
        let derive = |name: &str| derived_type_name(&ClassRef::parse(name).unwrap());
        assert_eq!(derive("int"), "Int");
        assert_eq!(derive("boolean"), "Boolean");
        assert_eq!(derive("[I"), "intArr");
        assert_eq!(derive("[Ljava.lang.String;"), "java.lang.StringArr");
        assert_eq!(derive("java.util.Locale$Builder"), "Locale_Builder");
        assert_eq!(derive("java.util.ArrayList"), "ArrayList");
    }
}
