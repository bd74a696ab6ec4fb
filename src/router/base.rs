// ============================================================================
// BASE PATH - Prefijo de despliegue (BASE_URL)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath {
    /// Sin barra final; "" equivale a la raíz
    prefix: String,
}

impl BasePath {
    /// Normaliza "/", "", "reports", "/reports/" -> "" | "/reports"
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        let prefix = if trimmed.is_empty() {
            String::new()
        } else if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        };
        Self { prefix }
    }

    pub fn as_str(&self) -> &str {
        if self.prefix.is_empty() {
            "/"
        } else {
            &self.prefix
        }
    }

    /// Path de ruta a partir de una location del navegador.
    /// Descarta query y hash; None si la location queda fuera de la base.
    pub fn strip(&self, location: &str) -> Option<String> {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let rest = path.strip_prefix(self.prefix.as_str())?;
        if rest.is_empty() {
            Some("/".to_string())
        } else if rest.starts_with('/') {
            Some(rest.to_string())
        } else {
            // "/reportsX" no pertenece a la base "/reports"
            None
        }
    }

    /// URL completa para un path de ruta
    pub fn join(&self, path: &str) -> String {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        if self.prefix.is_empty() {
            path
        } else if path == "/" {
            format!("{}/", self.prefix)
        } else {
            format!("{}{}", self.prefix, path)
        }
    }
}

impl Default for BasePath {
    fn default() -> Self {
        Self::new("/")
    }
}
