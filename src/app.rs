// ============================================================================
// APP - Ensamblado de la aplicación y montaje en el host
// ============================================================================
// assemble():
//   1. raíz vacía
//   2. navegación (router sobre la tabla de rutas)
//   3. librería UI
//   4. servicio de gráficos (nombre bien conocido "echarts")
//   5. componentes PdfReportHeader / PdfReportFooter
//   6. montaje en #app (fatal si no existe)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::components::register_report_components;
use crate::config::AppConfig;
use crate::dom::{Host, Node};
use crate::error::{AppError, AppResult};
use crate::registry::{
    CapabilityRegistry, CapabilityRegistryBuilder, ComponentRegistry, ComponentRegistryBuilder,
    CHARTS, NAVIGATION, UI_LIBRARY,
};
use crate::router::{
    BasePath, History, MemoryHistory, Navigation, NavigationOutcome, PendingLoad,
    RouteTable, Router,
};
use crate::services::{AlertKind, ChartBackend, ChartService, HeadlessCharts, UiLibrary};
use crate::views::{View, ViewContext};

/// Dependencias de plataforma (navegador o headless)
pub struct Platform {
    pub host: Rc<dyn Host>,
    pub history: Box<dyn History>,
    pub charts: Box<dyn ChartBackend>,
}

impl Platform {
    /// Plataforma sin navegador (tests, prerender)
    pub fn headless(host: Rc<dyn Host>, location: &str) -> Self {
        Self {
            host,
            history: Box::new(MemoryHistory::new(location)),
            charts: Box::new(HeadlessCharts),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn browser(config: &AppConfig) -> Self {
        use crate::dom::web::WebHost;
        use crate::router::BrowserHistory;
        use crate::services::WebCharts;

        Self {
            host: Rc::new(WebHost),
            history: Box::new(BrowserHistory),
            charts: Box::new(WebCharts::new(&config.chart_global)),
        }
    }
}

/// Contenido actual del router-view
#[derive(Clone)]
enum Outlet {
    Empty,
    Pending { path: String },
    View(Rc<dyn View>),
    Unmatched { path: String },
    Failed { message: String },
}

impl Outlet {
    fn state(&self) -> &'static str {
        match self {
            Outlet::Empty => "empty",
            Outlet::Pending { .. } => "pending",
            Outlet::View(_) => "ready",
            Outlet::Unmatched { .. } => "unmatched",
            Outlet::Failed { .. } => "failed",
        }
    }
}

/// Resultado de una navegación desde el punto de vista de la app
pub enum NavigationState {
    /// La vista ya está renderizada
    Rendered,
    /// La vista se está cargando; hay que llamar a `settle`
    Pending(PendingLoad),
    Unmatched,
}

pub struct MountedApplication {
    mount_id: String,
    host: Rc<dyn Host>,
    router: Rc<Router>,
    capabilities: Rc<CapabilityRegistry>,
    components: Rc<ComponentRegistry>,
    outlet: RefCell<Outlet>,
}

/// Ensamblar y montar la aplicación
pub fn assemble(config: &AppConfig, routes: RouteTable, platform: Platform) -> AppResult<MountedApplication> {
    log::info!("🚀 [APP] Ensamblando aplicación ({} rutas, base {})", routes.len(), config.base_url);
    let Platform { host, history, charts } = platform;

    // Sin destino de montaje no se toca el documento
    if !host.has_element(&config.mount_id) {
        log::error!("❌ [APP] No existe el elemento #{}", config.mount_id);
        return Err(AppError::MountTargetMissing(config.mount_id.clone()));
    }

    let mut capabilities = CapabilityRegistryBuilder::new();

    let router = Rc::new(Router::new(routes, BasePath::new(&config.base_url), history));
    capabilities.register(NAVIGATION, router.clone())?;

    let ui = Rc::new(UiLibrary::new(&config.ui_stylesheet));
    ui.install(host.as_ref())?;
    capabilities.register(UI_LIBRARY, ui)?;

    capabilities.register(CHARTS, Rc::new(ChartService::new(&config.chart_global, charts)))?;

    let mut components = ComponentRegistryBuilder::new();
    register_report_components(&mut components)?;

    let app = MountedApplication {
        mount_id: config.mount_id.clone(),
        host,
        router,
        capabilities: Rc::new(capabilities.freeze()),
        components: Rc::new(components.freeze()),
        outlet: RefCell::new(Outlet::Empty),
    };
    app.render()?;
    log::info!("✅ [APP] Aplicación montada en #{}", app.mount_id);
    Ok(app)
}

impl MountedApplication {
    pub fn router(&self) -> &Rc<Router> {
        &self.router
    }

    pub fn capabilities(&self) -> &CapabilityRegistry {
        &self.capabilities
    }

    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    /// Contexto que reciben las vistas en el render actual
    pub fn view_context(&self) -> ViewContext {
        ViewContext::new(
            self.capabilities.clone(),
            self.components.clone(),
            self.router.current(),
        )
    }

    /// Nombre de la vista renderizada (None si no hay vista)
    pub fn current_view_name(&self) -> Option<String> {
        match &*self.outlet.borrow() {
            Outlet::View(view) => Some(view.name().to_string()),
            _ => None,
        }
    }

    /// Navegación inicial según la location del historial
    pub fn start(&self) -> AppResult<NavigationState> {
        let navigation = self.router.sync_with_history()?;
        self.apply(navigation)
    }

    /// Atrás/adelante del navegador
    pub fn handle_popstate(&self) -> AppResult<NavigationState> {
        self.start()
    }

    /// Navegar a un path de ruta (añade entrada al historial)
    pub fn navigate(&self, path: &str) -> AppResult<NavigationState> {
        let navigation = self.router.push(path)?;
        self.apply(navigation)
    }

    fn apply(&self, navigation: Navigation) -> AppResult<NavigationState> {
        let route = navigation.route;
        let (outlet, state) = match navigation.outcome {
            NavigationOutcome::Ready(view) => (Outlet::View(view), NavigationState::Rendered),
            NavigationOutcome::Pending(load) => (
                Outlet::Pending { path: route.path.clone() },
                NavigationState::Pending(load),
            ),
            NavigationOutcome::Unmatched => (
                Outlet::Unmatched { path: route.requested.clone() },
                NavigationState::Unmatched,
            ),
        };
        *self.outlet.borrow_mut() = outlet;
        self.render()?;
        Ok(state)
    }

    /// Esperar una carga diferida y renderizarla si sigue siendo la navegación activa.
    /// Devuelve false si el resultado se descartó por obsoleto.
    pub async fn settle(&self, load: PendingLoad) -> AppResult<bool> {
        let generation = load.generation;
        let path = load.path.clone();
        let result = load.wait().await;

        if !self.router.is_current(generation) {
            log::debug!("🗑️ [APP] Carga de {} descartada (navegación posterior)", path);
            return Ok(false);
        }

        match result {
            Ok(view) => {
                *self.outlet.borrow_mut() = Outlet::View(view);
                self.render()?;
                Ok(true)
            }
            Err(e) => {
                *self.outlet.borrow_mut() = Outlet::Failed { message: e.to_string() };
                self.render()?;
                Err(e)
            }
        }
    }

    /// Re-render completo del árbol en el host
    pub fn render(&self) -> AppResult<()> {
        let outlet = self.outlet.borrow().clone();
        let ctx = self.view_context();
        let content = self.render_outlet(&outlet, &ctx)?;

        let mut router_view = Node::element("main")
            .class("router-view")
            .attr("data-state", outlet.state());
        if let Some(content) = content {
            router_view = router_view.child(content);
        }
        let root = Node::element("div")
            .class("app-root")
            .child(router_view)
            .build();

        self.host.render_into(&self.mount_id, &root)?;

        if let Outlet::View(view) = &outlet {
            if let Err(e) = view.mounted(&ctx) {
                log::warn!("⚠️ [APP] mounted() de {} falló: {}", view.name(), e);
            }
        }
        Ok(())
    }

    fn render_outlet(&self, outlet: &Outlet, ctx: &ViewContext) -> AppResult<Option<Node>> {
        let node = match outlet {
            Outlet::Empty => None,
            Outlet::Pending { path } => Some(
                Node::element("div")
                    .class("router-view__pending")
                    .attr("aria-busy", "true")
                    .attr("data-path", path)
                    .build(),
            ),
            Outlet::View(view) => Some(view.render(ctx)?),
            Outlet::Unmatched { path } => {
                Some(ctx.ui()?.empty(&format!("No page found for {}", path)))
            }
            Outlet::Failed { message } => Some(ctx.ui()?.alert(AlertKind::Error, message)),
        };
        Ok(node)
    }
}
