use colored::{ColoredString, Colorize};
use log::info;

use crate::resolver::ProductResolver;
use crate::session::ScanSession;

/// Single entry point for barcode intake, camera-delivered or typed, plus
/// the interactive command dispatch built on top of it.
pub struct ScanHandler {
    resolver: ProductResolver,
    session: ScanSession,
}

impl ScanHandler {
    pub fn new(resolver: ProductResolver) -> Self {
        Self {
            resolver,
            session: ScanSession::new(),
        }
    }

    /// Handles one decoded barcode. Events arriving while a session is
    /// active are ignored until `reset`.
    pub async fn on_scanned(&mut self, barcode: &str) {
        let Some(token) = self.session.accept(barcode) else {
            info!("Ignoring scan of {} while a session is active", barcode);
            return;
        };

        let result = self.resolver.resolve(barcode).await;
        if !self.session.install(token, result) {
            info!("Discarding stale result for {}", barcode);
        }
    }

    /// Manually typed barcodes go through the same resolution path as
    /// camera scans. Blank input is ignored.
    pub async fn on_manual_submit(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.on_scanned(text).await;
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn session(&self) -> &ScanSession {
        &self.session
    }

    pub async fn handle_command(&mut self, input: &str) -> Result<(), String> {
        let input = input.trim();

        match input.split_whitespace().next() {
            Some("scan") => {
                let barcode = input.trim_start_matches("scan").trim();
                if barcode.is_empty() {
                    return Ok(println!("Please specify a barcode to scan."));
                }
                self.on_scanned(barcode).await;
                self.print_session();
                Ok(())
            }
            Some("reset") => {
                self.reset();
                println!("{}", "Scanner reset. Ready for the next barcode.".green());
                Ok(())
            }
            Some("show") => {
                self.print_session();
                Ok(())
            }
            Some("help") | None => {
                println!(
                    "Available commands:\n\
                     - scan <barcode> (Look up a scanned barcode)\n\
                     - <barcode> (Manual entry, same lookup)\n\
                     - show (Show the current session)\n\
                     - reset (Clear the session and scan again)\n\
                     - exit (Quit)"
                );
                Ok(())
            }
            // Anything else is treated as a manually typed barcode.
            Some(_) => {
                self.on_manual_submit(input).await;
                self.print_session();
                Ok(())
            }
        }
    }

    pub fn print_session(&self) {
        println!(
            "Scanned Barcode: {}",
            self.session.barcode().unwrap_or("None")
        );

        if self.session.scanned() {
            let result = self.session.result();
            println!("Product Name: {}", result.name.cyan());
            println!("Ecoscore: {}", grade_color(&result.ecoscore));
            if let Some(url) = &result.image_url {
                println!("Image: {}", url);
            }
        }
    }
}

fn grade_color(grade: &str) -> ColoredString {
    match grade.to_lowercase().as_str() {
        "a" => grade.green(),
        "b" => grade.bright_green(),
        "c" => grade.yellow(),
        "d" => grade.bright_red(),
        "e" => grade.red(),
        _ => grade.normal(),
    }
}
