//! Host request handling.
//!
//! Holds the configuration and the bridge between requests. The bridge is
//! built lazily on the first query and rebuilt after any option change.

use std::io::{self, Write};

use crate::bridge::DynBridge;
use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::protocol::request::{Request, Response};

/// Mutable state of the bridge binary between requests.
pub struct Host {
    config: BridgeConfig,
    bridge: Option<DynBridge>,
}

impl Host {
    pub fn new(config: BridgeConfig) -> Self {
        Host {
            config,
            bridge: None,
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Changes one option; the bridge is rebuilt on the next query.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), String> {
        self.config.set_option(name, value)?;
        self.bridge = None;
        Ok(())
    }

    fn bridge(&mut self) -> Result<&mut DynBridge, BridgeError> {
        let bridge = match self.bridge.take() {
            Some(b) => b,
            None => DynBridge::from_config(&self.config)?,
        };
        Ok(self.bridge.insert(bridge))
    }

    /// Answers one request. Returns `None` for `quit`.
    pub fn handle(&mut self, request: Request) -> Option<Response> {
        let response = match request {
            Request::Quit => return None,
            Request::IsReady => Response::Ok { ok: true },
            Request::SetOption { name, value } => match self.set_option(&name, value.as_deref()) {
                Ok(()) => Response::Ok { ok: true },
                Err(error) => Response::Error { error },
            },
            Request::BestMove {
                board,
                difficulty,
                player,
            } => match self
                .bridge()
                .and_then(|b| b.best_move(&board, difficulty, player))
            {
                Ok(board) => Response::Board { board },
                Err(e) => Response::Error {
                    error: e.to_string(),
                },
            },
            Request::IsWinner { board, player } => {
                match self.bridge().and_then(|b| b.is_winner(&board, player)) {
                    Ok(outcome) => Response::Outcome { outcome },
                    Err(e) => Response::Error {
                        error: e.to_string(),
                    },
                }
            }
        };
        Some(response)
    }

    /// Answers one request and writes the response line to `out`.
    /// Returns false once the host asked to quit.
    pub fn respond<W: Write>(&mut self, request: Request, out: &mut W) -> io::Result<bool> {
        let response = match self.handle(request) {
            Some(r) => r,
            None => return Ok(false),
        };
        serde_json::to_writer(&mut *out, &response)?;
        writeln!(out)?;
        out.flush()?;
        Ok(true)
    }
}
