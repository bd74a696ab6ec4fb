// Servicios globales (capacidades) inyectados en las vistas

pub mod charts;
pub mod ui;

pub use charts::*;
pub use ui::*;
