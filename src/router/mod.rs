// ============================================================================
// ROUTER - Capacidad de navegación sobre la tabla de rutas
// ============================================================================
// Cada navegación recibe un número de generación; una carga diferida que
// termina cuando su generación ya no es la actual se descarta.
// ============================================================================

pub mod base;
pub mod history;
pub mod loadable;
pub mod routes;
pub mod table;

pub use base::*;
pub use history::*;
pub use loadable::*;
pub use routes::*;
pub use table::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::AppResult;
use crate::views::View;

/// Ruta activa tras una navegación
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentRoute {
    /// Path solicitado (ya sin base)
    pub requested: String,
    /// Path final tras aplicar la redirección
    pub path: String,
    /// None cuando no hubo match
    pub name: Option<String>,
    pub redirected_from: Option<String>,
    pub generation: u64,
}

impl CurrentRoute {
    pub fn is_matched(&self) -> bool {
        self.name.is_some()
    }
}

/// Carga diferida pendiente de una navegación concreta
pub struct PendingLoad {
    pub generation: u64,
    pub path: String,
    view: PendingView,
}

impl PendingLoad {
    /// Esperar a que la vista termine de cargar
    pub async fn wait(self) -> AppResult<Rc<dyn View>> {
        self.view.await
    }
}

pub enum NavigationOutcome {
    Ready(Rc<dyn View>),
    Pending(PendingLoad),
    Unmatched,
}

pub struct Navigation {
    pub route: CurrentRoute,
    pub outcome: NavigationOutcome,
}

pub struct Router {
    table: RouteTable,
    base: BasePath,
    history: Box<dyn History>,
    current: RefCell<Option<CurrentRoute>>,
    generation: Cell<u64>,
}

impl Router {
    pub fn new(table: RouteTable, base: BasePath, history: Box<dyn History>) -> Self {
        Self {
            table,
            base,
            history,
            current: RefCell::new(None),
            generation: Cell::new(0),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    pub fn current(&self) -> Option<CurrentRoute> {
        self.current.borrow().clone()
    }

    /// ¿Sigue siendo `generation` la navegación activa?
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    /// URL completa (con base) de un path de ruta
    pub fn url_for(&self, path: &str) -> String {
        self.base.join(path)
    }

    /// Navegar a una location del navegador (incluye la base). No toca el historial.
    pub fn navigate(&self, location: &str) -> Navigation {
        match self.base.strip(location) {
            Some(path) => self.resolve(&path),
            None => {
                log::warn!("⚠️ [ROUTER] {} está fuera de la base {}", location, self.base.as_str());
                self.unmatched(location)
            }
        }
    }

    /// Sincronizar con la location actual del historial (arranque, popstate).
    /// Si la ruta redirige, la entrada actual se sustituye por la URL de destino.
    pub fn sync_with_history(&self) -> AppResult<Navigation> {
        let location = self.history.location();
        let navigation = self.navigate(&location);
        if navigation.route.redirected_from.is_some() {
            let (_, suffix) = split_suffix(&location);
            let url = format!("{}{}", self.base.join(&navigation.route.path), suffix);
            self.history.replace(&url)?;
        }
        Ok(navigation)
    }

    /// Navegar a un path de ruta y añadir la URL resultante al historial
    pub fn push(&self, path: &str) -> AppResult<Navigation> {
        let (route_path, suffix) = split_suffix(path);
        let navigation = self.resolve(route_path);
        let url = format!("{}{}", self.base.join(&navigation.route.path), suffix);
        self.history.push(&url)?;
        Ok(navigation)
    }

    /// Resolver un path de ruta (sin base)
    pub fn resolve(&self, path: &str) -> Navigation {
        let (path, _) = split_suffix(path);
        let generation = self.next_generation();

        let navigation = match self.table.match_path(path) {
            RouteMatch::Unmatched => {
                log::warn!("⚠️ [ROUTER] Sin ruta para {}", path);
                Navigation {
                    route: CurrentRoute {
                        requested: path.to_string(),
                        path: path.to_string(),
                        name: None,
                        redirected_from: None,
                        generation,
                    },
                    outcome: NavigationOutcome::Unmatched,
                }
            }
            RouteMatch::Matched { entry, redirected_from } => {
                if let Some(from) = redirected_from {
                    log::info!("↪️ [ROUTER] {} -> {}", from.path, entry.path);
                }
                let route = CurrentRoute {
                    requested: path.to_string(),
                    path: entry.path.clone(),
                    name: Some(entry.name.clone()),
                    redirected_from: redirected_from.map(|e| e.path.clone()),
                    generation,
                };
                let outcome = match entry.component.resolve(&entry.path) {
                    ViewResolution::Ready(view) => NavigationOutcome::Ready(view),
                    ViewResolution::Pending(view) => NavigationOutcome::Pending(PendingLoad {
                        generation,
                        path: entry.path.clone(),
                        view,
                    }),
                };
                Navigation { route, outcome }
            }
        };

        *self.current.borrow_mut() = Some(navigation.route.clone());
        navigation
    }

    fn unmatched(&self, location: &str) -> Navigation {
        let generation = self.next_generation();
        let route = CurrentRoute {
            requested: location.to_string(),
            path: location.to_string(),
            name: None,
            redirected_from: None,
            generation,
        };
        *self.current.borrow_mut() = Some(route.clone());
        Navigation { route, outcome: NavigationOutcome::Unmatched }
    }

    fn next_generation(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }
}

/// Separa "/path?q#h" en ("/path", "?q#h")
fn split_suffix(path: &str) -> (&str, &str) {
    match path.find(['?', '#']) {
        Some(idx) => path.split_at(idx),
        None => (path, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn router(base: &str, initial: &str) -> (Rc<Router>, Rc<MemoryHistory>) {
        let history = Rc::new(MemoryHistory::new(initial));
        let router = Router::new(
            app_routes().unwrap(),
            BasePath::new(base),
            Box::new(SharedHistory(history.clone())),
        );
        (Rc::new(router), history)
    }

    /// Permite inspeccionar el historial desde el test
    struct SharedHistory(Rc<MemoryHistory>);

    impl History for SharedHistory {
        fn location(&self) -> String {
            self.0.location()
        }

        fn push(&self, url: &str) -> AppResult<()> {
            self.0.push(url)
        }

        fn replace(&self, url: &str) -> AppResult<()> {
            self.0.replace(url)
        }
    }

    #[test]
    fn test_root_redirect_resolves_eagerly_to_target() {
        let (router, _) = router("/", "/");
        let nav = router.sync_with_history().unwrap();
        assert_eq!(nav.route.path, "/bridge-settlement");
        assert_eq!(nav.route.redirected_from.as_deref(), Some("/"));
        assert_eq!(nav.route.name.as_deref(), Some("bridge-settlement"));
        // El home eager nunca se resuelve por la redirección
        assert!(matches!(nav.outcome, NavigationOutcome::Pending(_)));
    }

    #[test]
    fn test_unmatched_path() {
        let (router, _) = router("/", "/");
        let nav = router.navigate("/unknown-path");
        assert!(matches!(nav.outcome, NavigationOutcome::Unmatched));
        assert!(!nav.route.is_matched());
        assert_eq!(router.current().unwrap().path, "/unknown-path");
    }

    #[test]
    fn test_location_outside_base_is_unmatched() {
        let (router, _) = router("/reports/", "/reports/");
        assert!(matches!(router.navigate("/elsewhere").outcome, NavigationOutcome::Unmatched));
        let nav = router.navigate("/reports/roadbed-calculation");
        assert_eq!(nav.route.name.as_deref(), Some("roadbed-calculation"));
    }

    #[test]
    fn test_push_records_resolved_url_under_base() {
        let (router, history) = router("/reports", "/reports/");
        router.push("/").unwrap();
        router.push("/foundation-stability?print=1").unwrap();
        assert_eq!(
            history.entries(),
            vec![
                "/reports/".to_string(),
                "/reports/bridge-settlement".to_string(),
                "/reports/foundation-stability?print=1".to_string(),
            ]
        );
    }

    #[test]
    fn test_initial_redirect_replaces_browser_url() {
        let (router, history) = router("/reports", "/reports/?print=1");
        let nav = router.sync_with_history().unwrap();
        assert_eq!(nav.route.path, "/bridge-settlement");
        assert_eq!(history.location(), "/reports/bridge-settlement?print=1");
        // Se sustituye la entrada, no se añade otra
        assert_eq!(history.entries().len(), 1);
    }

    #[test]
    fn test_sync_without_redirect_leaves_url_untouched() {
        let (router, history) = router("/", "/roadbed-calculation");
        router.sync_with_history().unwrap();
        assert_eq!(history.entries(), vec!["/roadbed-calculation".to_string()]);
    }

    #[test]
    fn test_generation_tracks_latest_navigation() {
        let (router, _) = router("/", "/");
        let first = router.navigate("/roadbed-calculation");
        let pending = match first.outcome {
            NavigationOutcome::Pending(p) => p,
            _ => panic!("roadbed view is lazy"),
        };
        assert!(router.is_current(pending.generation));

        router.navigate("/foundation-stability");
        assert!(!router.is_current(pending.generation));

        // La carga sigue completándose y queda cacheada
        let view = block_on(pending.wait()).unwrap();
        assert_eq!(view.name(), "RoadbedCalculationView");
        assert!(matches!(
            router.navigate("/roadbed-calculation").outcome,
            NavigationOutcome::Ready(_)
        ));
    }

    #[test]
    fn test_split_suffix() {
        assert_eq!(split_suffix("/a?b#c"), ("/a", "?b#c"));
        assert_eq!(split_suffix("/a#c"), ("/a", "#c"));
        assert_eq!(split_suffix("/a"), ("/a", ""));
    }
}
