// ============================================================================
// UI LIBRARY - Widgets prefabricados + hoja de estilos
// ============================================================================

use crate::dom::{Host, Node};
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Warning,
    Error,
}

impl AlertKind {
    fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Info => "info",
            AlertKind::Warning => "warning",
            AlertKind::Error => "error",
        }
    }
}

pub struct UiLibrary {
    stylesheet: String,
}

impl UiLibrary {
    pub fn new(stylesheet: &str) -> Self {
        Self {
            stylesheet: stylesheet.to_string(),
        }
    }

    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    /// Instalar estilos en el documento host
    pub fn install(&self, host: &dyn Host) -> AppResult<()> {
        if self.stylesheet.is_empty() {
            return Ok(());
        }
        host.add_stylesheet(&self.stylesheet)
    }

    pub fn card(&self, title: &str, body: Vec<Node>) -> Node {
        Node::element("div")
            .class("ui-card")
            .child(Node::element("div").class("ui-card__header").text(title))
            .child(Node::element("div").class("ui-card__body").children(body))
            .build()
    }

    /// Botón de navegación interna (`href` es la URL con base)
    pub fn link_button(&self, label: &str, route: &str, href: &str) -> Node {
        Node::element("a")
            .class("ui-button")
            .attr("href", href)
            .attr("data-route", route)
            .text(label)
            .build()
    }

    pub fn alert(&self, kind: AlertKind, message: &str) -> Node {
        Node::element("div")
            .class("ui-alert")
            .add_class(&format!("ui-alert--{}", kind.as_str()))
            .attr("role", "alert")
            .text(message)
            .build()
    }

    pub fn empty(&self, description: &str) -> Node {
        Node::element("div")
            .class("ui-empty")
            .child(Node::element("p").class("ui-empty__description").text(description))
            .build()
    }

    pub fn tag(&self, text: &str) -> Node {
        Node::element("span").class("ui-tag").text(text).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryHost;

    #[test]
    fn test_install_adds_stylesheet_once() {
        let host = MemoryHost::new();
        let ui = UiLibrary::new("assets/ui-kit.css");
        ui.install(&host).unwrap();
        ui.install(&host).unwrap();
        assert_eq!(host.stylesheets(), vec!["assets/ui-kit.css".to_string()]);
    }

    #[test]
    fn test_link_button_carries_route() {
        let ui = UiLibrary::new("");
        let button = ui.link_button("Roadbed", "/roadbed-calculation", "/reports/roadbed-calculation");
        let el = button.as_element().unwrap();
        assert_eq!(el.attr("data-route"), Some("/roadbed-calculation"));
        assert_eq!(el.attr("href"), Some("/reports/roadbed-calculation"));
        assert!(el.has_class("ui-button"));
    }

    #[test]
    fn test_alert_kind_class() {
        let ui = UiLibrary::new("");
        let alert = ui.alert(AlertKind::Error, "boom");
        assert!(alert.as_element().unwrap().has_class("ui-alert--error"));
        assert_eq!(alert.text_content(), "boom");
    }
}
