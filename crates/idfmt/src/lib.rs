//! # idfmt
//!
//! Custom, human-readable item identifiers built from a small closed set of
//! tokens: literal text, random alphanumeric codes, GUIDs, dates and a
//! per-inventory sequence counter.
//!
//! A format is stored as a canonical string such as `ITEM-{SEQ}` or
//! `{DATE:yyyyMMdd}-{RANDOM:20}`. The [`Engine`] compiles that string into a
//! [`Format`] and renders it, either committing (advancing the inventory's
//! sequence counter) or as a side-effect-free preview.
//!
//! ```
//! use idfmt::{Engine, InventoryId};
//!
//! let engine = Engine::new();
//! let inventory = InventoryId::new(7);
//!
//! assert_eq!(engine.generate(inventory, "ITEM-{SEQ}").unwrap(), "ITEM-00001");
//! assert_eq!(engine.generate(inventory, "ITEM-{SEQ}").unwrap(), "ITEM-00002");
//!
//! let preview = engine.preview("X-{SEQ}").unwrap();
//! assert_eq!(preview.preview, "X-00001");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod base36;
mod engine;
mod error;
mod format;
mod policy;
mod rand;
mod render;
mod sequence;
mod time;
mod token;

pub use crate::engine::*;
pub use crate::error::*;
pub use crate::format::*;
pub use crate::policy::*;
pub use crate::rand::*;
pub use crate::render::*;
pub use crate::sequence::*;
pub use crate::time::*;
pub use crate::token::*;
