// ============================================================================
// BRIDGE SAFETY - SHELL DE ARRANQUE Y NAVEGACIÓN (RUST + WASM)
// ============================================================================
// - App: ensamblado (capacidades, componentes) + montaje en #app
// - Router: tabla de rutas con vistas diferidas y base configurable
// - Registry: capacidades y componentes write-once
// - Views / Components: páginas de informe y cabecera/pie PDF
// - Dom: árbol de render + hosts (navegador / memoria)
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod registry;
pub mod router;
pub mod services;
pub mod views;

pub use app::{assemble, MountedApplication, NavigationState, Platform};
pub use config::AppConfig;
pub use error::{AppError, AppResult};

#[cfg(target_arch = "wasm32")]
pub use browser::*;

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::app::{assemble, MountedApplication, NavigationState, Platform};
    use crate::config::{AppConfig, CONFIG_SCRIPT_ID};
    use crate::dom::events::{on_popstate, on_route_link_click};
    use crate::dom::web::element_text;
    use crate::error::{AppError, AppResult};
    use crate::router::app_routes;

    // Instancia única de la app montada
    thread_local! {
        static APP: RefCell<Option<Rc<MountedApplication>>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        // Inicializar panic hook para mejor debugging
        console_error_panic_hook::set_once();

        let config = load_config()?;
        wasm_logger::init(wasm_logger::Config::new(config.log_level()));
        log::info!("🚀 Bridge Safety - Rust + WASM");
        log::debug!("⚙️ Config: {}", serde_json::to_string(&config).unwrap_or_default());

        if APP.with(|cell| cell.borrow().is_some()) {
            return Err(AppError::AlreadyAssembled.into());
        }

        let app = Rc::new(assemble(&config, app_routes()?, Platform::browser(&config))?);
        APP.with(|cell| {
            *cell.borrow_mut() = Some(app.clone());
        });

        // Listeners globales: se registran una única vez aquí
        on_popstate(|| with_app(|app| app.handle_popstate()))?;
        on_route_link_click(|path| with_app(|app| app.navigate(&path)))?;

        let state = app.start()?;
        drive(app, state);
        Ok(())
    }

    /// Config de build + overrides del <script id="app-config"> si existe
    fn load_config() -> AppResult<AppConfig> {
        let config = AppConfig::from_env();
        match element_text(CONFIG_SCRIPT_ID) {
            Some(json) if !json.trim().is_empty() => config.with_overrides(&json),
            _ => Ok(config),
        }
    }

    fn with_app<F>(f: F)
    where
        F: FnOnce(&MountedApplication) -> AppResult<NavigationState>,
    {
        let Some(app) = APP.with(|cell| cell.borrow().clone()) else {
            log::warn!("⚠️ App no está inicializada");
            return;
        };
        match f(&app) {
            Ok(state) => drive(app, state),
            Err(e) => log::error!("❌ Error de navegación: {}", e),
        }
    }

    /// Completar en segundo plano la carga diferida de una navegación
    fn drive(app: Rc<MountedApplication>, state: NavigationState) {
        if let NavigationState::Pending(load) = state {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = app.settle(load).await {
                    log::error!("❌ {}", e);
                }
            });
        }
    }

    /// Navegación programática desde JavaScript
    #[wasm_bindgen]
    pub fn navigate_wasm(path: &str) {
        with_app(|app| app.navigate(path));
    }
}
