//! note.com API access

pub mod client;
pub mod html;
pub mod locator;
pub mod payload;
pub mod response;

#[cfg(test)]
pub(crate) mod mock;

pub use client::NoteClient;
pub use response::{DraftSaveResponse, TextNote};
