use crate::domain::model::{CipherInputs, CipherText};
use crate::utils::error::Result;

/// Byte-level file access used by the orchestrator. The cipher core never touches it.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn key_path(&self) -> &str;
    fn alphabet_path(&self) -> &str;
    fn plaintext_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn echo_enabled(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<CipherInputs>;
    fn transform(&self, inputs: &CipherInputs) -> Result<CipherText>;
    fn load(&self, ciphertext: &CipherText) -> Result<String>;
}
