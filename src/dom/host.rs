// ============================================================================
// HOST - Documento donde se monta el árbol
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;

use crate::dom::Node;
use crate::error::{AppError, AppResult};

/// Trait común para documentos host (navegador o memoria)
pub trait Host {
    /// Verificar si existe un elemento con ese id
    fn has_element(&self, id: &str) -> bool;

    /// Reemplazar el contenido del elemento `id` por `node`
    fn render_into(&self, id: &str, node: &Node) -> AppResult<()>;

    /// Añadir una hoja de estilos al documento
    fn add_stylesheet(&self, href: &str) -> AppResult<()>;
}

/// Host en memoria, usado en tests y en entornos sin DOM
#[derive(Default)]
pub struct MemoryHost {
    elements: RefCell<HashMap<String, Option<Node>>>,
    stylesheets: RefCell<Vec<String>>,
    renders: RefCell<usize>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documento con un único elemento vacío `id`
    pub fn with_element(id: &str) -> Self {
        let host = Self::new();
        host.elements.borrow_mut().insert(id.to_string(), None);
        host
    }

    /// Contenido actual del elemento (None si no existe o está vacío)
    pub fn content(&self, id: &str) -> Option<Node> {
        self.elements.borrow().get(id).cloned().flatten()
    }

    pub fn stylesheets(&self) -> Vec<String> {
        self.stylesheets.borrow().clone()
    }

    pub fn render_count(&self) -> usize {
        *self.renders.borrow()
    }
}

impl Host for MemoryHost {
    fn has_element(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    fn render_into(&self, id: &str, node: &Node) -> AppResult<()> {
        let mut elements = self.elements.borrow_mut();
        let slot = elements
            .get_mut(id)
            .ok_or_else(|| AppError::MountTargetMissing(id.to_string()))?;
        *slot = Some(node.clone());
        *self.renders.borrow_mut() += 1;
        Ok(())
    }

    fn add_stylesheet(&self, href: &str) -> AppResult<()> {
        let mut sheets = self.stylesheets.borrow_mut();
        if !sheets.iter().any(|s| s == href) {
            sheets.push(href.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_into_missing_element_fails() {
        let host = MemoryHost::new();
        let err = host.render_into("app", &Node::text("x")).unwrap_err();
        assert_eq!(err, AppError::MountTargetMissing("app".into()));
    }

    #[test]
    fn test_render_replaces_content() {
        let host = MemoryHost::with_element("app");
        host.render_into("app", &Node::text("a")).unwrap();
        host.render_into("app", &Node::text("b")).unwrap();
        assert_eq!(host.content("app"), Some(Node::text("b")));
        assert_eq!(host.render_count(), 2);
    }
}
