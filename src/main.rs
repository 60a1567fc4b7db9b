use clap::Parser;
use colored::Colorize;
use dotenv::dotenv;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use thiserror::Error;

use ecoscan::api::openfoodfacts::OpenFoodFactsClient;
use ecoscan::commands::ScanHandler;
use ecoscan::config::OffConfig;
use ecoscan::resolver::ProductResolver;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Look up a single barcode and exit instead of starting the scanner
    barcode: Option<String>,

    /// Override the Open Food Facts base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Print the one-shot lookup result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Command error: {0}")]
    CommandError(String),
    #[error("Readline error: {0}")]
    ReadlineError(#[from] ReadlineError),
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize colored output
    colored::control::set_override(true);

    // Load environment variables
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    let mut config = OffConfig::from_env();
    if let Some(base_url) = &args.base_url {
        config.product_base_url = base_url.clone();
        config.search_base_url = base_url.clone();
    }

    let resolver = ProductResolver::new(Box::new(OpenFoodFactsClient::new(config)));
    let mut handler = ScanHandler::new(resolver);

    // One-shot lookup mode
    if let Some(barcode) = &args.barcode {
        handler.on_manual_submit(barcode).await;
        if args.json {
            let json = serde_json::to_string_pretty(handler.session().result())
                .map_err(|e| AppError::CommandError(format!("Failed to encode result: {}", e)))?;
            println!("{}", json);
        } else {
            handler.print_session();
        }
        return Ok(());
    }

    handler
        .handle_command("help")
        .await
        .map_err(AppError::CommandError)?;

    // Main input loop
    let mut rl = Editor::<(), DefaultHistory>::new()?;
    loop {
        match rl.readline("📷 ") {
            Ok(line) => {
                let input = line.trim();
                if input == "exit" || input == "quit" {
                    break;
                }
                let _ = rl.add_history_entry(input);

                if let Err(e) = handler.handle_command(input).await {
                    println!("{}", e.red());
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
