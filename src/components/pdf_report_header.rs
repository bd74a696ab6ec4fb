use chrono::Local;

use crate::dom::Node;
use crate::error::AppResult;
use crate::registry::{Component, Props};
use crate::views::ViewContext;

/// Cabecera de informe PDF
///
/// Props: `title`, `project` (opcional), `date` (por defecto, hoy).
pub struct PdfReportHeader;

impl Component for PdfReportHeader {
    fn render(&self, props: &Props, _ctx: &ViewContext) -> AppResult<Node> {
        let title = props.get("title").map(String::as_str).unwrap_or("Report");
        let date = props
            .get("date")
            .cloned()
            .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());

        let mut header = Node::element("header")
            .class("pdf-report-header")
            .child(Node::element("h1").class("pdf-report-header__title").text(title));
        if let Some(project) = props.get("project") {
            header = header.child(
                Node::element("div")
                    .class("pdf-report-header__project")
                    .text(project),
            );
        }
        Ok(header
            .child(Node::element("time").class("pdf-report-header__date").text(&date))
            .build())
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::registry::{props, CapabilityRegistryBuilder, ComponentRegistryBuilder};

    fn ctx() -> ViewContext {
        ViewContext::new(
            Rc::new(CapabilityRegistryBuilder::new().freeze()),
            Rc::new(ComponentRegistryBuilder::new().freeze()),
            None,
        )
    }

    fn text_of(node: &Node, class: &str) -> Option<String> {
        node.find_by_class(class)
            .map(|el| el.children.iter().map(Node::text_content).collect())
    }

    #[test]
    fn test_header_uses_given_props() {
        let node = PdfReportHeader
            .render(
                &props(&[("title", "Bridge Settlement"), ("project", "K12+300"), ("date", "2024-05-01")]),
                &ctx(),
            )
            .unwrap();
        assert!(node.as_element().unwrap().has_class("pdf-report-header"));
        assert_eq!(text_of(&node, "pdf-report-header__title").as_deref(), Some("Bridge Settlement"));
        assert_eq!(text_of(&node, "pdf-report-header__project").as_deref(), Some("K12+300"));
        assert_eq!(text_of(&node, "pdf-report-header__date").as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn test_header_defaults_to_today_without_project() {
        let before = Local::now().format("%Y-%m-%d").to_string();
        let node = PdfReportHeader.render(&Props::new(), &ctx()).unwrap();
        let after = Local::now().format("%Y-%m-%d").to_string();

        assert_eq!(text_of(&node, "pdf-report-header__title").as_deref(), Some("Report"));
        assert!(node.find_by_class("pdf-report-header__project").is_none());
        let date = text_of(&node, "pdf-report-header__date").unwrap();
        // Tolera el cambio de día entre las dos lecturas
        assert!(date == before || date == after);
    }
}
