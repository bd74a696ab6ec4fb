// ============================================================================
// DOM MODULE - Árbol de render + hosts
// ============================================================================

pub mod node;
pub mod host;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub mod events;

pub use node::*;
pub use host::*;
