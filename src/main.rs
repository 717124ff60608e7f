use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use vigenere_cli::utils::logger;
use vigenere_cli::{
    CipherError, CliConfig, EncryptionEngine, EncryptionPipeline, EncryptionReport, LocalStorage,
};

fn main() {
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // 參數錯誤：印出用法後以非零碼結束
            let _ = e.print();
            let err = CipherError::ArgumentError {
                message: e.kind().as_str().unwrap_or("invalid arguments").to_string(),
            };
            std::process::exit(err.exit_code());
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting vigenere-cli");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e @ CipherError::MissingConfigError { .. }) => {
            eprintln!("{}", CliConfig::command().render_usage());
            fail(e)
        }
        Err(e) => fail(e),
    };
    let echo = config.echo;

    let pipeline = EncryptionPipeline::new(LocalStorage::default(), config);
    let engine = EncryptionEngine::new(pipeline);

    match engine.run() {
        Ok(report) => {
            if echo {
                print_report(&report);
            }
            tracing::info!("Encryption completed, output saved to: {}", report.output_path);
        }
        Err(e) => fail(e),
    }
}

fn print_report(report: &EncryptionReport) {
    println!("\tAll displayed text without newlines");
    println!("Key phrase: {}", report.inputs.key);
    println!("Clear text: {}", report.inputs.plaintext);
    println!("Using alph: {}", report.inputs.alphabet);
    println!("Encrt text: {}", report.ciphertext);
}

fn fail(e: CipherError) -> ! {
    tracing::error!("{} (Category: {:?})", e, e.category());
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
