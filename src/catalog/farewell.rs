use std::borrow::Cow;

use rustc_hash::FxHashMap;

const BUILTIN: [(&str, &str); 9] = [
    ("HTML", "Farewell, HTML"),
    ("CSS", "Adios, CSS"),
    ("JavaScript", "R.I.P., JavaScript"),
    ("React", "We'll miss you, React"),
    ("TypeScript", "Oh no, not TypeScript!"),
    ("Node.js", "Node.js bites the dust"),
    ("Python", "Gone but not forgotten, Python"),
    ("Ruby", "Ruby has left the building"),
    ("Assembly", "The end of Assembly as we know it"),
];

/// Flavor text shown when a language is eliminated.
#[derive(Clone, Debug, Default)]
pub struct FarewellTable {
    texts: FxHashMap<&'static str, &'static str>,
}

impl FarewellTable {
    pub fn builtin() -> Self {
        BUILTIN.into_iter().collect()
    }

    /// Look up the farewell for a language.
    ///
    /// Unknown names get a generic farewell instead of failing.
    ///
    /// # Example
    ///
    /// ```
    /// use assembly_endgame::catalog::FarewellTable;
    /// let table = FarewellTable::builtin();
    /// assert_eq!(table.text("CSS"), "Adios, CSS");
    /// assert_eq!(table.text("Cobol"), "Farewell, Cobol");
    /// ```
    pub fn text(&self, language: &str) -> Cow<'static, str> {
        match self.texts.get(language) {
            Some(text) => Cow::Borrowed(*text),
            None => Cow::Owned(format!("Farewell, {language}")),
        }
    }
}

impl FromIterator<(&'static str, &'static str)> for FarewellTable {
    fn from_iter<T: IntoIterator<Item = (&'static str, &'static str)>>(iter: T) -> Self {
        FarewellTable {
            texts: iter.into_iter().collect(),
        }
    }
}
