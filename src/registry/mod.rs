// ============================================================================
// REGISTRY MODULE - Registros de capacidades y componentes (write-once)
// ============================================================================

pub mod capabilities;
pub mod components;

pub use capabilities::*;
pub use components::*;
