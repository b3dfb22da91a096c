//! Parameter table decoders
//!
//! Each known parameter ID maps to a [`ParameterHandler`]. Tables with an ID
//! that has no handler are dumped word by word with [`UNKNOWN_HANDLER`].

pub mod basic;
mod unknown;

use std::io;

use crate::format::FieldWriter;
use crate::sfdp::PARAM_ID_BASIC;

/// Decode routine for one parameter table
///
/// `words` holds exactly the declared table length. Short tables are valid
/// and simply produce fewer fields.
pub type DecodeFn = fn(words: &[u32], out: &mut FieldWriter<'_>) -> io::Result<()>;

/// A parameter table decoder
#[derive(Clone, Copy)]
pub struct ParameterHandler {
    /// Parameter ID handled
    pub id: u16,
    /// Human readable table name
    pub name: &'static str,
    /// Decode routine
    pub decode: DecodeFn,
}

/// Fallback for IDs without a dedicated decoder
pub static UNKNOWN_HANDLER: ParameterHandler = ParameterHandler {
    id: 0,
    name: "Unknown parameter",
    decode: unknown::decode,
};

/// Registered decoders
pub static HANDLERS: &[ParameterHandler] = &[ParameterHandler {
    id: PARAM_ID_BASIC,
    name: "Basic flash parameter table",
    decode: basic::decode,
}];

/// Select the decoder for `id`
pub fn find_handler(id: u16) -> &'static ParameterHandler {
    HANDLERS
        .iter()
        .find(|h| h.id == id)
        .unwrap_or(&UNKNOWN_HANDLER)
}
