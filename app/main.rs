/// Kaloriku
///
/// Single-photo food calorie estimation for the browser: upload a photo,
/// preview it, run the pre-trained classifier, and read off the calorie
/// range per 100 g from the FatSecret-derived reference table.
/// Served by a synchronous tiny_http server; no JavaScript frameworks.
///
/// Run with:
///   cargo run --bin kaloriku --release
/// Then open http://127.0.0.1:7878
///
/// Steps:
///   1. Upload  — pick a JPG/PNG photo of the food
///   2. Preview — check the photo, filename, and size
///   3. Loading — short analysis pause
///   4. Result  — predicted dish, calorie range, confidence

mod config;
mod handlers;
mod render;
mod routes;
mod state;
mod util;

use std::sync::{Arc, Mutex};
use tiny_http::Server;

use kaloriku::Estimator;

use config::AppConfig;
use state::{AppContext, AppState};

fn main() {
    if let Err(message) = run() {
        eprintln!("kaloriku: {}", message);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config = AppConfig::load()?;

    // Model, labels, and calorie table are loaded and cross-validated before
    // the server binds; a broken deployment never serves a page.
    let estimator = Estimator::load(
        &config.model_path,
        &config.class_names_path,
        &config.calorie_csv_path,
    )
    .map_err(|e| e.to_string())?;

    let server = Server::http(&config.bind_addr)
        .map_err(|e| format!("could not bind {}: {}", config.bind_addr, e))?;

    println!("╔══════════════════════════════════════════════╗");
    println!("║          Kaloriku                            ║");
    println!("╠══════════════════════════════════════════════╣");
    println!("║  Open in your browser:                       ║");
    println!("║  http://{}                 ║", config.bind_addr);
    println!("╠══════════════════════════════════════════════╣");
    println!("║  {:3} food classes, calorie table validated   ║", estimator.labels().len());
    println!("╚══════════════════════════════════════════════╝");

    let ctx = AppContext {
        estimator: Arc::new(estimator),
        state: Arc::new(Mutex::new(AppState::new())),
    };

    // Each request is dispatched on its own thread so the Loading pause
    // (which blocks its request for the full duration) does not stall
    // regular page loads.
    for request in server.incoming_requests() {
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            routes::dispatch(request, ctx);
        });
    }
    Ok(())
}
