//! tictactoe-bridge -- answers tic-tac-toe queries for a host application.
//!
//! This binary reads JSON requests from stdin, one per line, and writes one
//! JSON response per request to stdout. An optional first argument names a
//! JSON config file.

use std::io::{self, BufRead};
use std::path::Path;

use tictactoe_bridge::config::BridgeConfig;
use tictactoe_bridge::host::Host;
use tictactoe_bridge::protocol::request::parse_request;

/// Runs the request loop until `quit` or end of input.
fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match BridgeConfig::load(Path::new(&path)) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{}; using defaults", e);
                BridgeConfig::default()
            }
        },
        None => BridgeConfig::default(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut host = Host::new(config);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let request = match parse_request(&line) {
            Some(r) => r,
            None => continue,
        };

        match host.respond(request, &mut out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                eprintln!("failed to write response: {}", e);
                break;
            }
        }
    }
}
