use crate::utils::error::{CipherError, Result};
use std::collections::HashMap;
use std::fmt;

/// Which of the three input files a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Key,
    Alphabet,
    PlainText,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Key => write!(f, "key"),
            InputKind::Alphabet => write!(f, "alphabet"),
            InputKind::PlainText => write!(f, "plaintext"),
        }
    }
}

/// Ordered symbol set that defines the index space of the cipher.
///
/// Duplicate symbols are accepted; lookups resolve to the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    positions: HashMap<char, usize>,
    has_space: bool,
}

impl Alphabet {
    /// Builds an alphabet from already normalized text.
    pub fn from_normalized(text: &str) -> Result<Self> {
        let symbols: Vec<char> = text.chars().collect();
        if symbols.is_empty() {
            return Err(CipherError::EmptyInput {
                input: InputKind::Alphabet,
            });
        }

        let mut positions = HashMap::with_capacity(symbols.len());
        for (index, symbol) in symbols.iter().enumerate() {
            positions.entry(*symbol).or_insert(index);
        }

        Ok(Self {
            has_space: positions.contains_key(&' '),
            symbols,
            positions,
        })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed alphabet.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn has_space(&self) -> bool {
        self.has_space
    }

    pub fn position(&self, symbol: char) -> Option<usize> {
        self.positions.get(&symbol).copied()
    }

    pub fn symbol_at(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Symbols that occur more than once, in order of their second appearance.
    pub fn duplicate_symbols(&self) -> Vec<char> {
        self.symbols
            .iter()
            .enumerate()
            .filter(|&(index, &symbol)| self.positions.get(&symbol) != Some(&index))
            .map(|(_, symbol)| *symbol)
            .collect()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Key phrase, consumed cyclically. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    chars: Vec<char>,
}

impl Key {
    pub fn from_normalized(text: &str) -> Result<Self> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Err(CipherError::EmptyInput {
                input: InputKind::Key,
            });
        }
        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a constructed key.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlainText {
    text: String,
}

impl PlainText {
    pub fn from_normalized(text: String) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for PlainText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CipherText {
    text: String,
}

impl CipherText {
    pub(crate) fn new(text: String) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for CipherText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Everything the extract stage hands to the cipher.
#[derive(Debug, Clone)]
pub struct CipherInputs {
    pub alphabet: Alphabet,
    pub key: Key,
    pub plaintext: PlainText,
}

/// Outcome of one complete run.
#[derive(Debug, Clone)]
pub struct EncryptionReport {
    pub inputs: CipherInputs,
    pub ciphertext: CipherText,
    pub output_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_positions_and_space_flag() {
        let alphabet = Alphabet::from_normalized("ab c").unwrap();
        assert_eq!(alphabet.len(), 4);
        assert!(alphabet.has_space());
        assert_eq!(alphabet.position('a'), Some(0));
        assert_eq!(alphabet.position(' '), Some(2));
        assert_eq!(alphabet.position('z'), None);
        assert_eq!(alphabet.symbol_at(3), Some('c'));
        assert_eq!(alphabet.symbol_at(4), None);

        let without_space = Alphabet::from_normalized("abc").unwrap();
        assert!(!without_space.has_space());
    }

    #[test]
    fn test_alphabet_counts_characters_not_bytes() {
        let alphabet = Alphabet::from_normalized("абвгд").unwrap();
        assert_eq!(alphabet.len(), 5);
        assert_eq!(alphabet.position('г'), Some(3));
        assert_eq!(alphabet.to_string(), "абвгд");
    }

    #[test]
    fn test_alphabet_duplicates_resolve_to_first() {
        let alphabet = Alphabet::from_normalized("abca").unwrap();
        assert_eq!(alphabet.len(), 4);
        assert_eq!(alphabet.position('a'), Some(0));
        assert_eq!(alphabet.duplicate_symbols(), vec!['a']);
    }

    #[test]
    fn test_empty_alphabet_and_key_are_rejected() {
        assert!(matches!(
            Alphabet::from_normalized(""),
            Err(CipherError::EmptyInput {
                input: InputKind::Alphabet
            })
        ));
        assert!(matches!(
            Key::from_normalized(""),
            Err(CipherError::EmptyInput {
                input: InputKind::Key
            })
        ));
    }

    #[test]
    fn test_plaintext_may_be_empty() {
        let plaintext = PlainText::from_normalized(String::new());
        assert!(plaintext.is_empty());
        assert_eq!(plaintext.len(), 0);
    }
}
