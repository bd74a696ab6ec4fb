// ============================================================================
// VIEWS - Vistas de página + contexto inyectado
// ============================================================================
// Las vistas no acceden a nada global: todo lo que necesitan (router, UI,
// gráficos, componentes) les llega en el `ViewContext` de cada render.
// ============================================================================

pub mod home;
pub mod report_page;
pub mod bridge_settlement;
pub mod roadbed_calculation;
pub mod foundation_stability;

pub use home::HomeView;
pub use report_page::ReportPage;
pub use bridge_settlement::BridgeSettlementView;
pub use roadbed_calculation::RoadbedCalculationView;
pub use foundation_stability::FoundationStabilityView;

use std::rc::Rc;

use crate::dom::Node;
use crate::error::{AppError, AppResult};
use crate::registry::{CapabilityRegistry, ComponentRegistry, Props, CHARTS, NAVIGATION, UI_LIBRARY};
use crate::router::{CurrentRoute, Router};
use crate::services::{ChartService, UiLibrary};

/// Vista de página asociada a una ruta
pub trait View {
    fn name(&self) -> &str;

    fn render(&self, ctx: &ViewContext) -> AppResult<Node>;

    /// Llamado tras materializar el render en el host
    fn mounted(&self, _ctx: &ViewContext) -> AppResult<()> {
        Ok(())
    }
}

/// Contexto explícito que recibe cada vista y componente
#[derive(Clone)]
pub struct ViewContext {
    capabilities: Rc<CapabilityRegistry>,
    components: Rc<ComponentRegistry>,
    route: Option<CurrentRoute>,
}

impl ViewContext {
    pub fn new(
        capabilities: Rc<CapabilityRegistry>,
        components: Rc<ComponentRegistry>,
        route: Option<CurrentRoute>,
    ) -> Self {
        Self {
            capabilities,
            components,
            route,
        }
    }

    pub fn capabilities(&self) -> &CapabilityRegistry {
        &self.capabilities
    }

    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    pub fn route(&self) -> Option<&CurrentRoute> {
        self.route.as_ref()
    }

    fn capability<T: 'static>(&self, name: &str) -> AppResult<Rc<T>> {
        self.capabilities
            .get::<T>(name)
            .ok_or_else(|| AppError::MissingCapability(name.to_string()))
    }

    pub fn router(&self) -> AppResult<Rc<Router>> {
        self.capability(NAVIGATION)
    }

    pub fn ui(&self) -> AppResult<Rc<UiLibrary>> {
        self.capability(UI_LIBRARY)
    }

    pub fn charts(&self) -> AppResult<Rc<ChartService>> {
        self.capability(CHARTS)
    }

    /// Renderizar un componente registrado por nombre
    pub fn component(&self, name: &str, props: &Props) -> AppResult<Node> {
        self.components.render(name, props, self)
    }

    /// Enlace interno hacia `path` (href con base + data-route)
    pub fn link(&self, label: &str, path: &str) -> AppResult<Node> {
        let href = self.router()?.url_for(path);
        Ok(self.ui()?.link_button(label, path, &href))
    }
}
