use crate::core::cipher::encrypt;
use crate::core::loader::{load_alphabet, load_key, load_plaintext};
use crate::core::{CipherInputs, CipherText, ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;

pub struct EncryptionPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> EncryptionPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for EncryptionPipeline<S, C> {
    fn extract(&self) -> Result<CipherInputs> {
        // 三個檔案都先讀完，才開始正規化
        tracing::debug!("Reading key from: {}", self.config.key_path());
        let raw_key = self.storage.read_file(self.config.key_path())?;

        tracing::debug!("Reading alphabet from: {}", self.config.alphabet_path());
        let raw_alphabet = self.storage.read_file(self.config.alphabet_path())?;

        tracing::debug!("Reading plaintext from: {}", self.config.plaintext_path());
        let raw_plaintext = self.storage.read_file(self.config.plaintext_path())?;

        let alphabet = load_alphabet(&raw_alphabet)?;
        let key = load_key(&raw_key)?;
        let plaintext = load_plaintext(&raw_plaintext)?;

        Ok(CipherInputs {
            alphabet,
            key,
            plaintext,
        })
    }

    fn transform(&self, inputs: &CipherInputs) -> Result<CipherText> {
        Ok(encrypt(&inputs.alphabet, &inputs.key, &inputs.plaintext))
    }

    fn load(&self, ciphertext: &CipherText) -> Result<String> {
        let output_path = self.config.output_path();
        tracing::debug!(
            "Writing {} bytes of ciphertext to {}",
            ciphertext.as_bytes().len(),
            output_path
        );
        self.storage.write_file(output_path, ciphertext.as_bytes())?;
        Ok(output_path.to_string())
    }
}
