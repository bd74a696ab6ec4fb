use serde::{Deserialize, Serialize};

use crate::error::AppResult;

pub const DEFAULT_BASE_URL: &str = "/";
pub const DEFAULT_MOUNT_ID: &str = "app";
pub const DEFAULT_CHART_GLOBAL: &str = "echarts";
pub const DEFAULT_UI_STYLESHEET: &str = "assets/ui-kit.css";

/// Id del <script type="application/json"> con overrides de despliegue
pub const CONFIG_SCRIPT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefijo base de todas las rutas (equivalente a BASE_URL del build)
    pub base_url: String,
    /// Id del elemento host donde se monta la app
    pub mount_id: String,
    pub log_level: String,
    pub ui_stylesheet: String,
    /// Nombre global de la librería de gráficos en `window`
    pub chart_global: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            log_level: "info".to_string(),
            ui_stylesheet: DEFAULT_UI_STYLESHEET.to_string(),
            chart_global: DEFAULT_CHART_GLOBAL.to_string(),
        }
    }
}

/// Overrides parciales leídos en tiempo de despliegue
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigOverrides {
    base_url: Option<String>,
    mount_id: Option<String>,
    log_level: Option<String>,
    ui_stylesheet: Option<String>,
    chart_global: Option<String>,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            base_url: option_env!("APP_BASE_URL")
                .unwrap_or(DEFAULT_BASE_URL).to_string(),
            mount_id: option_env!("APP_MOUNT_ID")
                .unwrap_or(DEFAULT_MOUNT_ID).to_string(),
            log_level: option_env!("APP_LOG_LEVEL")
                .unwrap_or("info").to_string(),
            ui_stylesheet: option_env!("APP_UI_STYLESHEET")
                .unwrap_or(DEFAULT_UI_STYLESHEET).to_string(),
            chart_global: option_env!("APP_CHART_GLOBAL")
                .unwrap_or(DEFAULT_CHART_GLOBAL).to_string(),
        }
    }

    /// Aplica overrides JSON (p.ej. `{"baseUrl": "/reports/"}`) sobre la config actual
    pub fn with_overrides(mut self, json: &str) -> AppResult<Self> {
        let overrides: ConfigOverrides = serde_json::from_str(json)?;
        if let Some(v) = overrides.base_url {
            self.base_url = v;
        }
        if let Some(v) = overrides.mount_id {
            self.mount_id = v;
        }
        if let Some(v) = overrides.log_level {
            self.log_level = v;
        }
        if let Some(v) = overrides.ui_stylesheet {
            self.ui_stylesheet = v;
        }
        if let Some(v) = overrides.chart_global {
            self.chart_global = v;
        }
        Ok(self)
    }

    /// Nivel de log para wasm_logger (por defecto Info)
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_only_touch_given_fields() {
        let config = AppConfig::default()
            .with_overrides(r#"{"baseUrl": "/reports/", "logLevel": "debug"}"#)
            .unwrap();
        assert_eq!(config.base_url, "/reports/");
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.mount_id, DEFAULT_MOUNT_ID);
        assert_eq!(config.chart_global, DEFAULT_CHART_GLOBAL);
    }

    #[test]
    fn test_invalid_overrides() {
        let err = AppConfig::default().with_overrides("{not json").unwrap_err();
        assert!(matches!(err, crate::error::AppError::Config(_)));
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = AppConfig { log_level: "verbose".into(), ..AppConfig::default() };
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
