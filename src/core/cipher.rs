use crate::domain::model::{Alphabet, CipherText, Key, PlainText};

/// Cyclic position inside the key.
#[derive(Debug, Clone)]
pub struct KeyCursor<'k> {
    key: &'k Key,
    position: usize,
}

impl<'k> KeyCursor<'k> {
    pub fn new(key: &'k Key) -> Self {
        Self { key, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the key character under the cursor and moves to the next one,
    /// wrapping to the start after the last.
    pub fn advance(&mut self) -> char {
        let chars = self.key.chars();
        let current = chars[self.position];
        self.position += 1;
        if self.position == chars.len() {
            self.position = 0;
        }
        current
    }
}

/// Folds an out-of-range index sum back into the alphabet.
///
/// Uses `|sum - len|` rather than `sum % len`; both agree while `sum < 2 * len`.
pub fn fold_back(sum: usize, alphabet_len: usize) -> usize {
    if sum >= alphabet_len {
        sum.abs_diff(alphabet_len)
    } else {
        sum
    }
}

/// Encrypts `plaintext` with `key` over `alphabet`.
///
/// Characters outside the alphabet are copied through and do not consume key
/// material. A key character outside the alphabet consumes its step and emits
/// nothing, so the matching plaintext character is dropped.
pub fn encrypt(alphabet: &Alphabet, key: &Key, plaintext: &PlainText) -> CipherText {
    let mut out = String::with_capacity(plaintext.as_str().len());
    let mut cursor = KeyCursor::new(key);
    let mut passed_through = 0usize;
    let mut dropped = 0usize;

    for c in plaintext.as_str().chars() {
        let Some(text_pos) = alphabet.position(c) else {
            out.push(c);
            passed_through += 1;
            continue;
        };

        let key_char = cursor.advance();
        let Some(key_pos) = alphabet.position(key_char) else {
            dropped += 1;
            continue;
        };

        let index = fold_back(text_pos + key_pos, alphabet.len());
        if let Some(symbol) = alphabet.symbol_at(index) {
            out.push(symbol);
        }
    }

    tracing::debug!(
        "Encrypted {} characters: {} passed through, {} dropped",
        plaintext.len(),
        passed_through,
        dropped
    );

    CipherText::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(alphabet: &str, key: &str, plaintext: &str) -> String {
        let alphabet = Alphabet::from_normalized(alphabet).unwrap();
        let key = Key::from_normalized(key).unwrap();
        let plaintext = PlainText::from_normalized(plaintext.to_string());
        encrypt(&alphabet, &key, &plaintext).as_str().to_string()
    }

    #[test]
    fn test_basic_scenario() {
        assert_eq!(run("abc", "ab", "abc"), "acc");
    }

    #[test]
    fn test_passthrough_keeps_key_position() {
        assert_eq!(run("abc", "ab", "abz"), "acz");
        // 'z' consumes nothing, so the trailing 'a' takes the wrapped key 'a'.
        assert_eq!(run("abc", "ab", "abza"), "acza");
        assert_eq!(run("abc", "ab", "a!b"), "a!c");
        assert_eq!(run("abc", "ab", "!!b"), "!!b");
    }

    #[test]
    fn test_key_char_outside_alphabet_drops_output() {
        // cursor: 'x' (drop), 'b' -> b+b, 'x' (drop), 'b' -> a+b
        assert_eq!(run("abc", "xb", "abca"), "cb");
    }

    #[test]
    fn test_dropped_step_still_advances_cursor() {
        assert_eq!(run("abc", "xa", "bb"), "b");
    }

    #[test]
    fn test_passthrough_before_drop() {
        assert_eq!(run("abc", "xb", "-a-b"), "--c");
    }

    #[test]
    fn test_wrap_around_uses_fold_back() {
        assert_eq!(fold_back(8, 5), 3);
        assert_eq!(fold_back(5, 5), 0);
        assert_eq!(fold_back(4, 5), 4);
        assert_eq!(run("abcde", "e", "e"), "d");
    }

    #[test]
    fn test_empty_plaintext() {
        assert_eq!(run("abc", "ab", ""), "");
    }

    #[test]
    fn test_output_length_matches_input_when_all_mapped() {
        let alphabet = "abcdefghijklmnopqrstuvwxyz ";
        let plaintext = "the quick brown fox jumps over the lazy dog";
        for key in ["k", "lemon", "zz top", "abcdefghijklmnopqrstuvwxyz "] {
            let cipher = run(alphabet, key, plaintext);
            assert_eq!(cipher.chars().count(), plaintext.chars().count());
            assert!(cipher.chars().all(|c| alphabet.contains(c)));
        }
    }

    #[test]
    fn test_classic_vigenere_over_latin_alphabet() {
        assert_eq!(
            run("abcdefghijklmnopqrstuvwxyz", "lemon", "attackatdawn"),
            "lxfopvefrnhr"
        );
    }

    #[test]
    fn test_cyrillic_alphabet() {
        let alphabet = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";
        assert_eq!(run(alphabet, "б", "абя"), "бва");
    }

    #[test]
    fn test_deterministic() {
        let first = run("abc ", "cab", "a b c abc");
        let second = run("abc ", "cab", "a b c abc");
        assert_eq!(first, second);
    }

    #[test]
    fn test_key_cursor_wraps() {
        let key = Key::from_normalized("xy").unwrap();
        let mut cursor = KeyCursor::new(&key);
        assert_eq!(cursor.advance(), 'x');
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.advance(), 'y');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.advance(), 'x');
    }
}
