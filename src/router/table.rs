// ============================================================================
// ROUTE TABLE - Declaración ordenada path -> vista
// ============================================================================

use std::collections::HashSet;

use crate::error::{AppError, AppResult};
use crate::router::LoadableView;

#[derive(Debug)]
pub struct RouteEntry {
    pub path: String,
    pub name: String,
    pub component: LoadableView,
    pub redirect: Option<String>,
}

impl RouteEntry {
    pub fn new(path: &str, name: &str, component: LoadableView) -> Self {
        Self {
            path: path.to_string(),
            name: name.to_string(),
            component,
            redirect: None,
        }
    }

    /// Redirección hacia `target` (se aplica antes de resolver `component`)
    pub fn redirect_to(mut self, target: &str) -> Self {
        self.redirect = Some(target.to_string());
        self
    }
}

/// Resultado del matching de un path
#[derive(Debug)]
pub enum RouteMatch<'a> {
    Matched {
        entry: &'a RouteEntry,
        redirected_from: Option<&'a RouteEntry>,
    },
    Unmatched,
}

/// Tabla de rutas, solo lectura tras la construcción
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Construir y validar la tabla
    ///
    /// Rechaza paths/nombres duplicados, paths no absolutos, más de una
    /// redirección y redirecciones hacia destinos inexistentes o que a su vez
    /// redirigen (lo que también excluye ciclos).
    pub fn new(entries: Vec<RouteEntry>) -> AppResult<Self> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();

        for entry in &entries {
            if !entry.path.starts_with('/') {
                return Err(AppError::InvalidRouteTable(format!(
                    "path '{}' must start with '/'",
                    entry.path
                )));
            }
            if !paths.insert(entry.path.as_str()) {
                return Err(AppError::InvalidRouteTable(format!(
                    "duplicate path '{}'",
                    entry.path
                )));
            }
            if !names.insert(entry.name.as_str()) {
                return Err(AppError::InvalidRouteTable(format!(
                    "duplicate name '{}'",
                    entry.name
                )));
            }
        }

        let redirects: Vec<&RouteEntry> = entries.iter().filter(|e| e.redirect.is_some()).collect();
        if redirects.len() > 1 {
            return Err(AppError::InvalidRouteTable(format!(
                "at most one redirect is allowed, found {}",
                redirects.len()
            )));
        }

        for entry in &redirects {
            let target = entry.redirect.as_deref().unwrap_or_default();
            match entries.iter().find(|e| e.path == target) {
                None => {
                    return Err(AppError::InvalidRouteTable(format!(
                        "redirect from '{}' targets unknown path '{}'",
                        entry.path, target
                    )))
                }
                Some(t) if t.redirect.is_some() => {
                    return Err(AppError::InvalidRouteTable(format!(
                        "redirect from '{}' targets '{}', which redirects again",
                        entry.path, target
                    )))
                }
                Some(_) => {}
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Primera entrada cuyo path coincide exactamente
    pub fn find(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// Búsqueda por nombre (diagnóstico / navegación programática)
    pub fn find_by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Matching con redirección de un solo nivel
    pub fn match_path(&self, path: &str) -> RouteMatch<'_> {
        let Some(entry) = self.find(path) else {
            return RouteMatch::Unmatched;
        };
        match entry.redirect.as_deref() {
            None => RouteMatch::Matched { entry, redirected_from: None },
            // La validación garantiza que el destino existe y no redirige
            Some(target) => match self.find(target) {
                Some(dest) => RouteMatch::Matched { entry: dest, redirected_from: Some(entry) },
                None => RouteMatch::Unmatched,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::HomeView;

    fn entry(path: &str, name: &str) -> RouteEntry {
        RouteEntry::new(path, name, LoadableView::eager(HomeView::new()))
    }

    fn err_message(result: AppResult<RouteTable>) -> String {
        match result {
            Err(AppError::InvalidRouteTable(msg)) => msg,
            other => panic!("expected InvalidRouteTable, got {:?}", other.map(|t| t.len())),
        }
    }

    #[test]
    fn test_rejects_duplicate_path() {
        let msg = err_message(RouteTable::new(vec![entry("/a", "a"), entry("/a", "b")]));
        assert!(msg.contains("duplicate path"));
    }

    #[test]
    fn test_rejects_duplicate_name() {
        let msg = err_message(RouteTable::new(vec![entry("/a", "a"), entry("/b", "a")]));
        assert!(msg.contains("duplicate name"));
    }

    #[test]
    fn test_rejects_relative_path() {
        let msg = err_message(RouteTable::new(vec![entry("a", "a")]));
        assert!(msg.contains("must start with"));
    }

    #[test]
    fn test_rejects_dangling_redirect() {
        let msg = err_message(RouteTable::new(vec![entry("/", "home").redirect_to("/nowhere")]));
        assert!(msg.contains("unknown path"));
    }

    #[test]
    fn test_rejects_redirect_cycle() {
        let msg = err_message(RouteTable::new(vec![
            entry("/", "home").redirect_to("/"),
            entry("/a", "a"),
        ]));
        assert!(msg.contains("redirects again"));
    }

    #[test]
    fn test_rejects_second_redirect() {
        let msg = err_message(RouteTable::new(vec![
            entry("/", "home").redirect_to("/a"),
            entry("/a", "a"),
            entry("/b", "b").redirect_to("/a"),
        ]));
        assert!(msg.contains("at most one redirect"));
    }

    #[test]
    fn test_match_follows_redirect() {
        let table = RouteTable::new(vec![
            entry("/", "home").redirect_to("/a"),
            entry("/a", "a"),
        ])
        .unwrap();

        match table.match_path("/") {
            RouteMatch::Matched { entry, redirected_from } => {
                assert_eq!(entry.path, "/a");
                assert_eq!(redirected_from.map(|e| e.name.as_str()), Some("home"));
            }
            RouteMatch::Unmatched => panic!("'/' must match"),
        }
        assert!(matches!(table.match_path("/a/"), RouteMatch::Unmatched));
        assert_eq!(table.find_by_name("a").map(|e| e.path.as_str()), Some("/a"));
    }
}
