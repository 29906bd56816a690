use clap::Parser;
use codeaid::app::driver;
use codeaid::utils::logger;
use codeaid::{CliConfig, OpenAiClient};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting codeaid");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let exit_code = driver::run(
        &config,
        |name| std::env::var(name).ok(),
        OpenAiClient::new,
        &mut stdout.lock(),
        &mut stderr.lock(),
    );

    if exit_code == driver::EXIT_SUCCESS {
        tracing::info!("✅ Response written");
    }
    std::process::exit(exit_code);
}
