pub mod farewell;
pub mod language;
pub mod words;

use anyhow::{Context, Result};
use thiserror::Error;

pub use farewell::FarewellTable;
pub use language::{Language, Rgb, LANGUAGES};
pub use words::{SecretWord, WordBank};

/// Everything that can go wrong while building the game's data sets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("secret words cannot be empty")]
    EmptyWord,
    #[error("'{word}' contains '{letter}', only lowercase ascii letters are allowed")]
    InvalidLetter { word: String, letter: char },
    #[error("the word bank needs at least one word")]
    EmptyWordBank,
    #[error("the language catalog needs at least two languages, got {0}")]
    TooFewLanguages(usize),
}

/// The immutable data a game is played against.
///
/// Loaded once at start-up and handed to the game and the front ends by
/// reference.
#[derive(Clone, Debug)]
pub struct Catalog {
    languages: Vec<Language>,
    words: WordBank,
    farewells: FarewellTable,
}

impl Catalog {
    /// Build a catalog from custom data sets.
    ///
    /// The last language is the one that survives a lost game, so at least
    /// two are needed for a single wrong guess to be possible.
    pub fn new(
        languages: Vec<Language>,
        words: WordBank,
        farewells: FarewellTable,
    ) -> Result<Self, CatalogError> {
        if languages.len() < 2 {
            return Err(CatalogError::TooFewLanguages(languages.len()));
        }
        Ok(Catalog {
            languages,
            words,
            farewells,
        })
    }

    /// The built-in languages, the embedded word list and the built-in
    /// farewell texts.
    pub fn load() -> Result<Self> {
        let words = WordBank::embedded()?;
        Catalog::new(LANGUAGES.to_vec(), words, FarewellTable::builtin())
            .context("Building the built-in catalog")
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn words(&self) -> &WordBank {
        &self.words
    }

    pub fn farewells(&self) -> &FarewellTable {
        &self.farewells
    }

    /// Number of wrong guesses that ends the game.
    pub fn attempts(&self) -> usize {
        self.languages.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.languages().len(), 9);
        assert_eq!(catalog.attempts(), 8);
        assert!(!catalog.words().is_empty());
        assert_eq!(catalog.languages().last().unwrap().name, "Assembly");
    }

    #[test]
    fn single_language_is_rejected() {
        let words = WordBank::from_words(["react"]).unwrap();
        let err = Catalog::new(LANGUAGES[..1].to_vec(), words, FarewellTable::builtin());
        assert_eq!(err.unwrap_err(), CatalogError::TooFewLanguages(1));
    }
}
