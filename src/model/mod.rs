
pub mod branch;
pub mod catalog;
pub mod employee;
pub mod inventory;
pub mod profile;

use crate::{Error, Result};

/// A value picked from a fixed list, the way the panel's drop-downs work.
pub trait Choice: Sized + Copy + 'static {
    /// Name used in error messages.
    const KIND: &'static str;
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    /// Short alias accepted by the shell next to the full label.
    fn key(&self) -> &'static str;

    fn parse_choice(value: &str) -> Result<Self> {
        let wanted = normalize(value);
        Self::ALL
            .iter()
            .copied()
            .find(|choice| normalize(choice.label()) == wanted || choice.key() == wanted)
            .ok_or_else(|| Error::UnknownChoice { kind: Self::KIND, value: value.to_string() })
    }
}

/// Lower-cases, strips Spanish accents and turns `_`/`-` into spaces.
pub fn normalize(value: &str) -> String {
    value
        .trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            '_' | '-' => ' ',
            other => other,
        })
        .collect()
}
