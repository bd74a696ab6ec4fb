// ============================================================================
// ROUTES - Tabla de rutas de la aplicación
// ============================================================================

use std::rc::Rc;

use crate::error::AppResult;
use crate::router::{LoadableView, RouteEntry, RouteTable};
use crate::views::{
    BridgeSettlementView, FoundationStabilityView, HomeView, RoadbedCalculationView, View,
};

pub const HOME_PATH: &str = "/";
pub const BRIDGE_SETTLEMENT_PATH: &str = "/bridge-settlement";
pub const ROADBED_CALCULATION_PATH: &str = "/roadbed-calculation";
pub const FOUNDATION_STABILITY_PATH: &str = "/foundation-stability";

/// `/` redirige a `/bridge-settlement`; las tres páginas de informe se cargan
/// de forma diferida en la primera navegación.
pub fn app_routes() -> AppResult<RouteTable> {
    RouteTable::new(vec![
        RouteEntry::new(HOME_PATH, "home", LoadableView::eager(HomeView::new()))
            .redirect_to(BRIDGE_SETTLEMENT_PATH),
        RouteEntry::new(
            BRIDGE_SETTLEMENT_PATH,
            "bridge-settlement",
            LoadableView::lazy(|| async {
                Ok(Rc::new(BridgeSettlementView::new()) as Rc<dyn View>)
            }),
        ),
        RouteEntry::new(
            ROADBED_CALCULATION_PATH,
            "roadbed-calculation",
            LoadableView::lazy(|| async {
                Ok(Rc::new(RoadbedCalculationView::new()) as Rc<dyn View>)
            }),
        ),
        RouteEntry::new(
            FOUNDATION_STABILITY_PATH,
            "foundation-stability",
            LoadableView::lazy(|| async {
                Ok(Rc::new(FoundationStabilityView::new()) as Rc<dyn View>)
            }),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_and_names_are_unique() {
        let table = app_routes().unwrap();
        let paths: HashSet<_> = table.entries().iter().map(|e| e.path.as_str()).collect();
        let names: HashSet<_> = table.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(paths.len(), table.len());
        assert_eq!(names.len(), table.len());
    }

    #[test]
    fn test_home_redirects_to_bridge_settlement() {
        let table = app_routes().unwrap();
        let home = table.find(HOME_PATH).unwrap();
        assert_eq!(home.redirect.as_deref(), Some(BRIDGE_SETTLEMENT_PATH));

        let target = table.find(BRIDGE_SETTLEMENT_PATH).unwrap();
        assert!(target.redirect.is_none());
    }

    #[test]
    fn test_report_pages_are_lazy() {
        let table = app_routes().unwrap();
        let lazy: Vec<&str> = table
            .entries()
            .iter()
            .filter(|e| e.component.is_lazy())
            .map(|e| e.path.as_str())
            .collect();
        assert_eq!(
            lazy,
            vec![BRIDGE_SETTLEMENT_PATH, ROADBED_CALCULATION_PATH, FOUNDATION_STABILITY_PATH]
        );
        assert!(table.entries().iter().all(|e| e.component.load_count() == 0));
    }
}
