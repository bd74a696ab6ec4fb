// ============================================================================
// ERRORS - Taxonomía de errores del shell
// ============================================================================
// Dentro del crate todo devuelve Result<T, AppError>; la conversión a JsValue
// solo ocurre en la frontera WASM (lib.rs).
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// El elemento de montaje no existe en el documento (fatal al arrancar)
    #[error("mount target #{0} not found in host document")]
    MountTargetMissing(String),

    /// assemble() solo puede ejecutarse una vez por proceso
    #[error("application already assembled")]
    AlreadyAssembled,

    /// Error de configuración de la tabla de rutas
    #[error("invalid route table: {0}")]
    InvalidRouteTable(String),

    #[error("capability '{0}' is already registered")]
    DuplicateCapability(String),

    #[error("component '{0}' is already registered")]
    DuplicateComponent(String),

    #[error("capability '{0}' is not registered")]
    MissingCapability(String),

    #[error("component '{0}' is not registered")]
    UnknownComponent(String),

    /// Fallo en la carga diferida de una vista
    #[error("failed to load view for {path}: {message}")]
    ViewLoad { path: String, message: String },

    #[error("chart error: {0}")]
    Chart(String),

    #[error("dom error: {0}")]
    Dom(String),

    #[error("config error: {0}")]
    Config(String),
}

impl AppError {
    /// Los errores de arranque no tienen recuperación
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::MountTargetMissing(_)
                | AppError::AlreadyAssembled
                | AppError::InvalidRouteTable(_)
                | AppError::DuplicateCapability(_)
                | AppError::DuplicateComponent(_)
                | AppError::Config(_)
        )
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Convierte errores de web_sys (JsValue) en AppError::Dom
#[cfg(target_arch = "wasm32")]
pub fn dom_error(value: JsValue) -> AppError {
    AppError::Dom(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_errors_are_fatal() {
        assert!(AppError::MountTargetMissing("app".into()).is_fatal());
        assert!(AppError::InvalidRouteTable("dup".into()).is_fatal());
        assert!(!AppError::ViewLoad { path: "/x".into(), message: "boom".into() }.is_fatal());
        assert!(!AppError::UnknownComponent("Foo".into()).is_fatal());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AppError::MountTargetMissing("app".into()).to_string(),
            "mount target #app not found in host document"
        );
        assert_eq!(
            AppError::ViewLoad { path: "/roadbed-calculation".into(), message: "timeout".into() }.to_string(),
            "failed to load view for /roadbed-calculation: timeout"
        );
    }
}
