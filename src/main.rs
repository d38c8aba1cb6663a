use clap::Parser;
use help_desk::utils::{logger, validation::Validate};
use help_desk::{CliConfig, LogFormat, MenuSession, RequestCenter};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting help-desk CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let mut center = RequestCenter::from_config(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = MenuSession::new(&mut center, stdin.lock(), stdout.lock(), &config).run();

    match result {
        Ok(handled) => {
            tracing::info!(
                handled,
                customers = center.registry().len(),
                served = center.history().len(),
                pending = center.pending().len(),
                "Session ended"
            );
        }
        Err(e) => {
            tracing::error!("❌ Session aborted: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
