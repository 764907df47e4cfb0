//! SQL dialect support.
//!
//! Different databases have slightly different SQL syntax. This module
//! provides a trait for the lexical policy a serializer needs: how to quote
//! identifiers, what the positional placeholder looks like, and which
//! optional grammar the target supports.

/// Trait for SQL dialect-specific behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Returns the positional bind-parameter placeholder token.
    fn placeholder(&self) -> &'static str {
        "?"
    }

    /// Returns whether the dialect supports the RETURNING clause.
    fn supports_returning(&self) -> bool {
        false
    }

    /// Returns whether the dialect supports UPSERT (ON CONFLICT).
    fn supports_upsert(&self) -> bool {
        false
    }

    /// Quotes an identifier, doubling any embedded quote characters.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        let mut out = String::with_capacity(name.len() + 2);
        out.push(quote);
        for c in name.chars() {
            if c == quote {
                out.push(quote);
            }
            out.push(c);
        }
        out.push(quote);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ansi;

    impl Dialect for Ansi {
        fn name(&self) -> &'static str {
            "ansi"
        }
    }

    #[test]
    fn default_policy() {
        let d = Ansi;
        assert_eq!(d.identifier_quote(), '"');
        assert_eq!(d.placeholder(), "?");
        assert!(!d.supports_returning());
        assert!(!d.supports_upsert());
    }

    #[test]
    fn quoting_doubles_embedded_quotes() {
        let d = Ansi;
        assert_eq!(d.quote_identifier("users"), "\"users\"");
        assert_eq!(d.quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }
}
