use chrono::Local;
use clap::Parser;
use flight_filter::app::demo::run_demo;
use flight_filter::utils::error::ErrorSeverity;
use flight_filter::utils::{logger, validation::Validate};
use flight_filter::CliConfig;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let report = run_demo(&config.demo_options(), Local::now().naive_local()).and_then(|report| {
        if config.json {
            report.render_json()
        } else {
            Ok(report.render_text())
        }
    });

    match report {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(
                "❌ Flight filtering failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
