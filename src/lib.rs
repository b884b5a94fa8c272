//! twenty48 (workspace facade crate).
//!
//! This package exposes the `twenty48::{core,history,input,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use twenty48_core as core;
pub use twenty48_history as history;
pub use twenty48_input as input;
pub use twenty48_types as types;
