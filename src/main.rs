use clap::Parser;
use png2objc::utils::logger;
use png2objc::{CliConfig, EmbedEngine, LocalDirectory, ObjcPipeline};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let storage = LocalDirectory::current();
    tracing::debug!("Scanning {}", storage.root().display());

    let stdout = std::io::stdout();
    let pipeline = ObjcPipeline::new(storage, stdout.lock());
    let mut engine = EmbedEngine::new(pipeline);

    match engine.run() {
        Ok(count) => {
            tracing::info!("Embedded {} image(s)", count);
        }
        Err(e) => {
            // Release the stdout lock so earlier lines are flushed before exit.
            drop(engine);

            tracing::error!("❌ Embedding failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}: {}", e.user_friendly_message(), e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
