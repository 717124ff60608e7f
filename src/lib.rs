pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, RunConfig};

pub use crate::core::{cipher::encrypt, engine::EncryptionEngine, pipeline::EncryptionPipeline};
pub use domain::model::{Alphabet, CipherText, EncryptionReport, InputKind, Key, PlainText};
pub use utils::error::{CipherError, Result};
