//! Debrief - turn a long operational document into an executive action report.

use clap::Parser;
use debrief_cli::{loader, render, Cli, Config, Console};
use debrief_llm::OpenAiProvider;
use debrief_pipeline::Pipeline;
use std::time::Duration;
use tracing::Level;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> debrief_cli::Result<()> {
    // Pick up DEBRIEF_* variables from a local .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Log to stderr so the status lines stay clean on stdout
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let console = Console::new(!cli.no_color);
    let config = Config::load(&cli)?;
    let pipeline_config = config.pipeline_config()?;

    println!(
        "{}",
        console.info(&format!("Loading document: {}", cli.filepath.display()))
    );
    let text = loader::load_document(&cli.filepath)?;

    let provider = OpenAiProvider::new(&config.endpoint, &config.api_key, &config.model)
        .with_timeout(Duration::from_secs(config.timeout_secs));
    let pipeline = Pipeline::new(provider, pipeline_config).with_model_name(&config.model);

    println!(
        "{}",
        console.info(&format!(
            "Analyzing {} characters with {}",
            text.chars().count(),
            config.model
        ))
    );
    let outcome = pipeline.run(&text).await?;

    if outcome.metadata.degraded_windows > 0 {
        println!(
            "{}",
            console.warning(&format!(
                "{} of {} sections could not be analyzed",
                outcome.metadata.degraded_windows, outcome.metadata.window_count
            ))
        );
    }
    if outcome.metadata.synthesis_degraded {
        println!(
            "{}",
            console.warning("Synthesis failed; the report carries a placeholder summary")
        );
    }

    println!("\n{}", "=".repeat(40));
    println!("{}", render::to_markdown(&outcome.report));
    println!("{}\n", "=".repeat(40));

    let report_path = render::save_report(&outcome.report, &cli.filepath)?;

    println!("{}", console.success("Analysis complete"));
    println!(
        "{}",
        console.success(&format!("Report saved to: {}", report_path.display()))
    );

    Ok(())
}
