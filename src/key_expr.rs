use crate::error::{LookupError, Result};

/// Returns the last `/`-separated segment of `key_expr`, verbatim.
///
/// A key expression without any `/` is its own term. Empty input and a
/// trailing `/` are rejected since they leave nothing to look up.
pub fn lookup_term(key_expr: &str) -> Result<&str> {
    match key_expr.rsplit('/').next() {
        Some(term) if !term.is_empty() => Ok(term),
        _ => Err(LookupError::InvalidKeyExpr(key_expr.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_last_segment() {
        assert_eq!(lookup_term("foo/bar/hello").unwrap(), "hello");
        assert_eq!(lookup_term("a/b/Paris").unwrap(), "Paris");
        assert_eq!(lookup_term("x/nonexistentword123").unwrap(), "nonexistentword123");
    }

    #[test]
    fn keeps_term_verbatim() {
        assert_eq!(lookup_term("lookup/New York").unwrap(), "New York");
        assert_eq!(lookup_term("lookup/HeLLo").unwrap(), "HeLLo");
        assert_eq!(lookup_term("a//b").unwrap(), "b");
    }

    #[test]
    fn whole_string_without_slash() {
        assert_eq!(lookup_term("hello").unwrap(), "hello");
    }

    #[test]
    fn rejects_empty_terms() {
        assert!(matches!(lookup_term(""), Err(LookupError::InvalidKeyExpr(_))));
        assert!(matches!(
            lookup_term("foo/"),
            Err(LookupError::InvalidKeyExpr(k)) if k == "foo/"
        ));
        assert!(lookup_term("/").unwrap_err().is_invalid_input());
    }
}
