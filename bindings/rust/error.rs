//! Failures reported while loading a grammar.

use thiserror::Error;

/// Result alias used by the verification entry points.
pub type Result<T> = std::result::Result<T, GrammarLoadError>;

/// A grammar could not be turned into a usable [`tree_sitter::Language`].
///
/// Both variants render the same diagnostic so callers (and test output) see
/// `Error loading <name> grammar` regardless of which check failed.
#[derive(Debug, Error)]
pub enum GrammarLoadError {
    /// The loader returned a null language descriptor.
    #[error("Error loading {grammar} grammar")]
    NullHandle { grammar: String },

    /// The descriptor was generated for an ABI the runtime does not support.
    #[error("Error loading {grammar} grammar")]
    IncompatibleVersion {
        grammar: String,
        #[source]
        source: tree_sitter::LanguageError,
    },
}

impl GrammarLoadError {
    /// Name of the grammar that failed to load.
    pub fn grammar(&self) -> &str {
        match self {
            Self::NullHandle { grammar } | Self::IncompatibleVersion { grammar, .. } => grammar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as _;

    #[test]
    fn null_handle_names_the_grammar() {
        let err = GrammarLoadError::NullHandle {
            grammar: "Baml".to_string(),
        };
        assert_eq!(err.to_string(), "Error loading Baml grammar");
        assert_eq!(err.grammar(), "Baml");
        assert!(err.source().is_none());
    }
}
