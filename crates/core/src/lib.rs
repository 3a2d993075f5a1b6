//! poscodec-core: reversible positional-index text transform
//!
//! This library encodes a text into a per-character positional index and
//! reconstructs the text from that index:
//! - Encode: scan the source once, record every 1-based position of each
//!   distinct character in first-occurrence order
//! - Decode: size an output buffer from the largest recorded position and
//!   write each character back into its slots
//! - Verify: compare original and decoded text and summarise the table
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `table`: the `EncodingTable` data model and derived statistics
//! - `encoder`: source text → table, with alphabet and limit validation
//! - `decoder`: table → text, tolerant of gaps and overlaps
//! - `report`: human-readable verification summary
//! - `error`: structured error types
//!
//! # Design Principles
//!
//! - **No panics**: all failures are structured errors; decode never fails
//! - **Bounded input**: length and distinct-character limits are validated
//!   up front, never silently truncated
//! - **Pure functions**: encode and decode have no side effects and do not
//!   mutate their inputs

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod report;
pub mod table;

// Re-export commonly used types
pub use decoder::{decode, FILLER};
pub use encoder::{encode, Limits, ALPHABET_SIZE};
pub use error::{EncodeError, Error, Result};
pub use report::{verify, VerifyReport};
pub use table::{CharacterRecord, EncodingTable};
