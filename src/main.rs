use crate::analyze::{AppState, OpenAiVision, VisionModel};
use crate::config::AppConfig;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod analyze;
mod config;
mod errors;
mod images;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Read configuration from the environment
    let cfg = AppConfig::from_env();

    // 2️⃣ Build the model client. A missing key is not fatal here: the
    // server still comes up and /api/analyze answers 500 until one is set.
    let model: Option<Box<dyn VisionModel + Send + Sync>> = match cfg.api_key.clone() {
        Some(key) => match OpenAiVision::new(key, cfg.model.clone()) {
            Ok(client) => Some(Box::new(client)),
            Err(e) => {
                eprintln!("❌ Model client init failed: {e}");
                std::process::exit(1);
            }
        },
        None => {
            eprintln!("⚠️ OPENAI_API_KEY not set; /api/analyze will return 500");
            None
        }
    };

    let addr: SocketAddr = match cfg.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ Bad bind address {:?}: {e}", cfg.bind_addr);
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState { cfg, model });

    // 3️⃣ Start the server
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 4️⃣ Serve requests, passing shared state into the closure
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
