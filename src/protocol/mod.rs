//! Wire formats.
//!
//! Flat board encoding for the logic engine, the engine terms goals are
//! written in, and the JSON-lines requests the host binary accepts.

pub mod flat;
pub mod request;
pub mod term;

pub use flat::{decode_term, decode_tokens, encode_list, encode_term, encode_tokens, EMPTY_TOKEN};
pub use request::{parse_request, Request, Response};
pub use term::{quote_atom, Bindings, Term};
