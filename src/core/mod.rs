pub mod cipher;
pub mod engine;
pub mod loader;
pub mod normalize;
pub mod pipeline;

pub use crate::domain::model::{Alphabet, CipherInputs, CipherText, Key, PlainText};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
