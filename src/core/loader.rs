use crate::core::normalize::{decode_lossy, normalize};
use crate::domain::model::{Alphabet, InputKind, Key, PlainText};
use crate::utils::error::{CipherError, Result};

fn normalized_text(raw: &[u8], input: InputKind) -> Result<String> {
    if raw.is_empty() {
        return Err(CipherError::EmptyInput { input });
    }
    Ok(normalize(&decode_lossy(raw, input)))
}

/// 讀取字母表
pub fn load_alphabet(raw: &[u8]) -> Result<Alphabet> {
    let alphabet = Alphabet::from_normalized(&normalized_text(raw, InputKind::Alphabet)?)?;

    let duplicates = alphabet.duplicate_symbols();
    if !duplicates.is_empty() {
        tracing::warn!(
            "Alphabet contains repeated symbols {:?}; the first occurrence of each is used",
            duplicates
        );
    }

    tracing::debug!(
        "Loaded alphabet: {} symbols, has_space={}",
        alphabet.len(),
        alphabet.has_space()
    );
    Ok(alphabet)
}

pub fn load_key(raw: &[u8]) -> Result<Key> {
    let key = Key::from_normalized(&normalized_text(raw, InputKind::Key)?)?;
    tracing::debug!("Loaded key: {} characters", key.len());
    Ok(key)
}

/// An empty plaintext file is an error; text that normalizes to nothing is not.
pub fn load_plaintext(raw: &[u8]) -> Result<PlainText> {
    let plaintext = PlainText::from_normalized(normalized_text(raw, InputKind::PlainText)?);
    tracing::debug!("Loaded plaintext: {} characters", plaintext.len());
    Ok(plaintext)
}
