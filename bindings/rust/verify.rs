//! Loadability checks for compiled grammars.
//!
//! A grammar reaches Rust as a C function returning a pointer to a generated
//! `TSLanguage`. [`verify_grammar_loads`] calls that function through a
//! [`GrammarLoader`], rejects a null descriptor, and hands back a
//! [`GrammarHandle`] wrapping the runtime [`Language`]. The descriptor itself
//! stays opaque: the handle is never inspected beyond the null check unless
//! the caller asks for [`verify_parser_accepts`].

use tree_sitter::{Language, Parser};
use tree_sitter_language::LanguageFn;

use crate::error::{GrammarLoadError, Result};

/// Source of a compiled grammar.
pub trait GrammarLoader {
    /// Display name used in diagnostics, e.g. `Baml`.
    fn grammar_name(&self) -> &str;

    /// Raw entry point exported by the generated parser.
    fn language_fn(&self) -> LanguageFn;
}

/// A grammar that loaded successfully.
///
/// Generated languages are immutable static data, so handles can be cloned,
/// sent across threads and kept for the life of the process.
#[derive(Debug, Clone)]
pub struct GrammarHandle {
    name: String,
    language: Language,
}

impl GrammarHandle {
    /// Grammar name reported by the loader.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The runtime language wrapping the loaded descriptor.
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Consumes the handle, keeping only the runtime language.
    pub fn into_language(self) -> Language {
        self.language
    }
}

/// Loads the grammar behind `loader` and fails if the descriptor is null.
pub fn verify_grammar_loads<L: GrammarLoader + ?Sized>(loader: &L) -> Result<GrammarHandle> {
    let name = loader.grammar_name();
    let language_fn = loader.language_fn();

    // SAFETY: loader entry points take no arguments and only return a pointer
    // to static data.
    let raw = unsafe { (language_fn.into_raw())() };
    if raw.is_null() {
        let err = GrammarLoadError::NullHandle {
            grammar: name.to_string(),
        };
        tracing::warn!(grammar = name, "{err}");
        return Err(err);
    }

    // SAFETY: `raw` was checked for null above.
    let language = unsafe { Language::from_raw(raw.cast()) };
    tracing::debug!(
        grammar = name,
        abi_version = language.abi_version(),
        "grammar loaded"
    );

    Ok(GrammarHandle {
        name: name.to_string(),
        language,
    })
}

/// Assigns the grammar to a fresh [`Parser`], which rejects descriptors
/// generated for an ABI outside the runtime's supported range.
pub fn verify_parser_accepts(handle: &GrammarHandle) -> Result<()> {
    let mut parser = Parser::new();
    match parser.set_language(handle.language()) {
        Ok(()) => {
            tracing::debug!(grammar = handle.name(), "parser accepted grammar");
            Ok(())
        }
        Err(source) => {
            tracing::warn!(grammar = handle.name(), %source, "parser rejected grammar");
            Err(GrammarLoadError::IncompatibleVersion {
                grammar: handle.name().to_string(),
                source,
            })
        }
    }
}
