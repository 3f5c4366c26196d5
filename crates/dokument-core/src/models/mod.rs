//! Journal models shared by both journal backends
//!
//! Field names on the wire follow the backends' camelCase (Norwegian)
//! JSON; the Rust names are descriptive.

mod avvik;
mod command;
mod journalpost;
mod status;

pub use avvik::*;
pub use command::*;
pub use journalpost::*;
pub use status::*;
