#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Derives a human-readable operation name from a path template and
//! HTTP method when the operation declares no explicit name.

use regex::Regex;

/// Derives an English operation name for `method` applied to `path`.
///
/// The trailing path segment supplies the noun; a brace- or
/// colon-delimited placeholder right after it marks the path as
/// templated (item-addressing) and selects the singular form. Paths
/// with no extractable trailing segment, and unrecognized methods,
/// fall back to the literal `"{method} - {path}"` form.
pub fn derive_name(path: &str, method: &str) -> String {
    let re = Regex::new(r"(\w+)/?(\{(\w+)\}|:(\w+))?$").expect("Invalid regex constant");

    let Some(caps) = re.captures(path) else {
        return format!("{} - {}", method, path);
    };
    let noun = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    let is_templated = caps.get(3).is_some() || caps.get(4).is_some();

    match method.to_lowercase().as_str() {
        "get" | "head" => {
            if is_templated {
                format!("Get {}", singular(noun))
            } else {
                format!("List {}", plural(noun))
            }
        }
        "post" | "put" | "patch" => {
            let verb = if is_templated { "Update" } else { "Create" };
            format!("{} {}", verb, singular(noun))
        }
        "delete" => format!("Delete {}", inflected(noun, is_templated)),
        "options" => format!("Get options for {}", inflected(noun, is_templated)),
        _ => format!("{} - {}", method, path),
    }
}

fn singular(noun: &str) -> String {
    pluralizer::pluralize(noun, 1, false)
}

fn plural(noun: &str) -> String {
    pluralizer::pluralize(noun, 2, false)
}

fn inflected(noun: &str, singular_form: bool) -> String {
    if singular_form {
        singular(noun)
    } else {
        plural(noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_lists_collections_and_gets_items() {
        assert_eq!(derive_name("with/a/path", "get"), "List paths");
        assert_eq!(derive_name("with/a/path/{id}", "get"), "Get path");
        assert_eq!(derive_name("with/a/path", "head"), "List paths");
        assert_eq!(derive_name("with/a/path/{id}", "head"), "Get path");
    }

    #[test]
    fn test_colon_placeholder_marks_templated() {
        assert_eq!(derive_name("with/a/path/:id", "get"), "Get path");
    }

    #[test]
    fn test_mutating_methods_create_or_update() {
        assert_eq!(derive_name("with/a/path", "post"), "Create path");
        assert_eq!(derive_name("with/a/path/{id}", "post"), "Update path");
        assert_eq!(derive_name("with/a/path", "put"), "Create path");
        assert_eq!(derive_name("with/a/path/{id}", "patch"), "Update path");
    }

    #[test]
    fn test_delete_inflects_on_templating() {
        assert_eq!(derive_name("with/a/path", "delete"), "Delete paths");
        assert_eq!(derive_name("with/a/path/{id}", "delete"), "Delete path");
    }

    #[test]
    fn test_options_phrase() {
        assert_eq!(derive_name("with/a/path", "options"), "Get options for paths");
        assert_eq!(
            derive_name("with/a/path/{id}", "options"),
            "Get options for path"
        );
    }

    #[test]
    fn test_unrecognized_method_uses_literal_fallback() {
        assert_eq!(
            derive_name("with/a/path/{id}", "something"),
            "something - with/a/path/{id}"
        );
    }

    #[test]
    fn test_method_matching_is_case_insensitive() {
        assert_eq!(derive_name("with/a/path", "GET"), "List paths");
    }

    #[test]
    fn test_unextractable_path_uses_literal_fallback() {
        assert_eq!(derive_name("", "get"), "get - ");
        assert_eq!(derive_name("{id}", "get"), "get - {id}");
    }
}
