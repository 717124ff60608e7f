use crate::core::Pipeline;
use crate::domain::model::EncryptionReport;
use crate::utils::error::Result;

pub struct EncryptionEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EncryptionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Runs extract, transform and load in order. Nothing is written unless
    /// every input loaded successfully.
    pub fn run(&self) -> Result<EncryptionReport> {
        tracing::info!("Reading inputs...");
        let inputs = self.pipeline.extract()?;
        tracing::info!(
            "Loaded key ({} chars), alphabet ({} symbols), plaintext ({} chars)",
            inputs.key.len(),
            inputs.alphabet.len(),
            inputs.plaintext.len()
        );

        tracing::info!("Encrypting...");
        let ciphertext = self.pipeline.transform(&inputs)?;

        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(&ciphertext)?;
        tracing::info!("Ciphertext ({} chars) saved to: {}", ciphertext.len(), output_path);

        Ok(EncryptionReport {
            inputs,
            ciphertext,
            output_path,
        })
    }
}
