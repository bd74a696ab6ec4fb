// ============================================================================
// WEB HOST - Materializa `Node` en el DOM real con web_sys
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::dom::{Host, Node};
use crate::error::{dom_error, AppError, AppResult};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Contenido de texto de un elemento (p.ej. el <script> de configuración)
pub fn element_text(id: &str) -> Option<String> {
    get_element_by_id(id)?.text_content()
}

fn require_document() -> AppResult<Document> {
    document().ok_or_else(|| AppError::Dom("No document".to_string()))
}

/// Crear el nodo DOM equivalente (recursivo)
fn materialize(doc: &Document, node: &Node) -> AppResult<web_sys::Node> {
    match node {
        Node::Text(text) => Ok(doc.create_text_node(text).unchecked_into()),
        Node::Element(el) => {
            let element = doc.create_element(&el.tag).map_err(dom_error)?;
            for (name, value) in &el.attrs {
                element.set_attribute(name, value).map_err(dom_error)?;
            }
            for child in &el.children {
                let child = materialize(doc, child)?;
                element.append_child(&child).map_err(dom_error)?;
            }
            Ok(element.unchecked_into())
        }
    }
}

/// Host del navegador
pub struct WebHost;

impl Host for WebHost {
    fn has_element(&self, id: &str) -> bool {
        get_element_by_id(id).is_some()
    }

    fn render_into(&self, id: &str, node: &Node) -> AppResult<()> {
        let doc = require_document()?;
        let target = doc
            .get_element_by_id(id)
            .ok_or_else(|| AppError::MountTargetMissing(id.to_string()))?;

        // Limpiar contenido anterior
        target.set_inner_html("");
        let child = materialize(&doc, node)?;
        target.append_child(&child).map_err(dom_error)?;
        Ok(())
    }

    fn add_stylesheet(&self, href: &str) -> AppResult<()> {
        let doc = require_document()?;
        let selector = format!("link[rel=\"stylesheet\"][href=\"{}\"]", href);
        if doc.query_selector(&selector).map_err(dom_error)?.is_some() {
            return Ok(());
        }
        let head = doc
            .head()
            .ok_or_else(|| AppError::Dom("No <head> element".to_string()))?;
        let link = doc.create_element("link").map_err(dom_error)?;
        link.set_attribute("rel", "stylesheet").map_err(dom_error)?;
        link.set_attribute("href", href).map_err(dom_error)?;
        head.append_child(&link).map_err(dom_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_mount_target() {
        let err = WebHost.render_into("no-such-element", &Node::text("x")).unwrap_err();
        assert_eq!(err, AppError::MountTargetMissing("no-such-element".into()));
    }

    #[wasm_bindgen_test]
    fn test_materializes_tree() {
        let doc = document().unwrap();
        let target = doc.create_element("div").unwrap();
        target.set_id("web-host-test");
        doc.body().unwrap().append_child(&target).unwrap();

        let node = Node::element("p").class("greeting").text("hola").build();
        WebHost.render_into("web-host-test", &node).unwrap();
        assert_eq!(target.inner_html(), "<p class=\"greeting\">hola</p>");
    }
}
