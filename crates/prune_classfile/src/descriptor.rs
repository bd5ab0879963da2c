//! Field and method descriptor scanning.

/// Returns the internal names of all object types mentioned in a descriptor.
///
/// Works for field descriptors (`Ljava/lang/String;`, `[[I`) and method
/// descriptors (`(ILa/B;)[La/C;`). Primitive types yield nothing. An unterminated
/// object type is ignored.
pub fn object_types(descriptor: &str) -> Vec<&str> {
    let mut types = Vec::new();
    let mut rest = descriptor;
    while let Some(start) = rest.find('L') {
        let after = &rest[start + 1..];
        match after.find(';') {
            Some(end) => {
                if end > 0 {
                    types.push(&after[..end]);
                }
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    types
}

/// Returns the internal name of the element class named by a `CONSTANT_Class` entry.
///
/// Plain class names are returned as-is; array types (`[La/B;`) are unwrapped
/// to their element class. Arrays of primitives return `None`.
pub fn class_entry_type(name: &str) -> Option<&str> {
    if name.starts_with('[') {
        object_types(name).into_iter().next()
    } else if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Converts an internal name (`a/b/C`) to a symbolic name (`a.b.C`).
pub fn to_symbol(internal: &str) -> String {
    internal.replace('/', ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_descriptor() {
        assert_eq!(object_types("Ljava/lang/String;"), vec!["java/lang/String"]);
        assert!(object_types("I").is_empty());
        assert_eq!(object_types("[[La/B;"), vec!["a/B"]);
    }

    #[test]
    fn method_descriptor() {
        assert_eq!(
            object_types("(ILa/B;[JLa/C$D;)La/E;"),
            vec!["a/B", "a/C$D", "a/E"]
        );
        assert!(object_types("(IJZ)V").is_empty());
    }

    #[test]
    fn unterminated_object_type_is_ignored() {
        assert_eq!(object_types("(La/B;La/C"), vec!["a/B"]);
    }

    #[test]
    fn class_entries() {
        assert_eq!(class_entry_type("a/B"), Some("a/B"));
        assert_eq!(class_entry_type("[La/B;"), Some("a/B"));
        assert_eq!(class_entry_type("[[I"), None);
        assert_eq!(class_entry_type(""), None);
    }

    #[test]
    fn symbol_conversion() {
        assert_eq!(to_symbol("a/b/C$D"), "a.b.C$D");
    }
}
