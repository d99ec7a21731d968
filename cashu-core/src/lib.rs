//! # cashu-core
//!
//! Core types and traits for the Cashu wallet bot: [`Bot`], [`Handler`], message, user and document
//! types, errors, and tracing initialization. Transport-agnostic; used by every other crate in the workspace.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, DocumentRef, Handler, HandlerResponse, Message, MessageDirection, ToCoreMessage,
    ToCoreUser, User,
};
