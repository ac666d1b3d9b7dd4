//! Rust bindings for the `tree-sitter-baml` grammar.
//!
//! This follows the standard layout used by Tree-sitter grammars so that
//! consumers can link the generated parser and obtain a
//! `tree_sitter::Language` handle:
//!
//! ```ignore
//! let mut parser = tree_sitter::Parser::new();
//! parser
//!     .set_language(&tree_sitter_baml::LANGUAGE.into())
//!     .expect("Error loading Baml grammar");
//! ```
//!
//! The generated parser (`src/parser.c`) comes from running
//! `tree-sitter generate` over `grammar.js`. Builds without it still compile,
//! but [`LinkedGrammar`] then fails to load with `Error loading Baml grammar`.

pub mod error;
pub mod verify;

pub use error::{GrammarLoadError, Result};
pub use verify::{verify_grammar_loads, verify_parser_accepts, GrammarHandle, GrammarLoader};

#[cfg(not(baml_parser_missing))]
use tree_sitter::Language;
use tree_sitter_language::LanguageFn;

/// Name of this grammar as it appears in diagnostics.
pub const GRAMMAR_NAME: &str = "Baml";

#[cfg(not(baml_parser_missing))]
extern "C" {
    fn tree_sitter_baml() -> *const ();
}

/// The tree-sitter [`LanguageFn`] for this grammar.
#[cfg(not(baml_parser_missing))]
pub const LANGUAGE: LanguageFn = unsafe { LanguageFn::from_raw(tree_sitter_baml) };

/// Returns the Tree-sitter [`Language`] for this grammar.
#[cfg(not(baml_parser_missing))]
pub fn language() -> Language {
    LANGUAGE.into()
}

// Stands in for `tree_sitter_baml` when the parser was not generated, so the
// missing grammar surfaces as a load failure.
#[cfg(baml_parser_missing)]
unsafe extern "C" fn missing_grammar() -> *const () {
    std::ptr::null()
}

/// The grammar compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedGrammar;

impl GrammarLoader for LinkedGrammar {
    fn grammar_name(&self) -> &str {
        GRAMMAR_NAME
    }

    #[cfg(not(baml_parser_missing))]
    fn language_fn(&self) -> LanguageFn {
        LANGUAGE
    }

    #[cfg(baml_parser_missing)]
    fn language_fn(&self) -> LanguageFn {
        unsafe { LanguageFn::from_raw(missing_grammar) }
    }
}

/// Checks that the grammar compiled into this crate loads.
pub fn verify_linked_grammar() -> Result<GrammarHandle> {
    verify_grammar_loads(&LinkedGrammar)
}
