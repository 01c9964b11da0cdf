/// Separator used when no other delimiter is configured.
pub const DEFAULT_DELIMITER: char = '.';

/// Splits a delimited path into its non-empty components.
///
/// `"A..B"`, `".A"` and `"A."` all yield the components of `"A.B"` or `"A"`,
/// and an empty path yields nothing.
pub fn split_path(path: &str, delimiter: char) -> Vec<&str> {
    path.split(delimiter).filter(|c| !c.is_empty()).collect()
}

pub fn join_path<S: AsRef<str>>(components: &[S], delimiter: char) -> String {
    let mut joined = String::new();
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            joined.push(delimiter);
        }
        joined.push_str(component.as_ref());
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_dotted_path_when_splitting_then_returns_components() {
        assert_eq!(split_path("C.D.E", '.'), vec!["C", "D", "E"]);
    }

    #[test]
    fn given_empty_components_when_splitting_then_skips_them() {
        assert_eq!(split_path("A..B.", '.'), vec!["A", "B"]);
        assert!(split_path("", '.').is_empty());
        assert!(split_path("...", '.').is_empty());
    }

    #[test]
    fn given_custom_delimiter_when_joining_then_uses_it() {
        assert_eq!(join_path(&["a", "b", "c"], '/'), "a/b/c");
        assert_eq!(join_path::<&str>(&[], '/'), "");
    }
}
