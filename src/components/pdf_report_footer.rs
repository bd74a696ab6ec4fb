use crate::dom::Node;
use crate::error::AppResult;
use crate::registry::{Component, Props};
use crate::views::ViewContext;

/// Pie de informe PDF (`page`, `total`, `organization`)
pub struct PdfReportFooter;

impl Component for PdfReportFooter {
    fn render(&self, props: &Props, _ctx: &ViewContext) -> AppResult<Node> {
        let page = props.get("page").map(String::as_str).unwrap_or("1");
        let total = props.get("total").map(String::as_str).unwrap_or(page);

        let mut footer = Node::element("footer").class("pdf-report-footer");
        if let Some(org) = props.get("organization") {
            footer = footer.child(
                Node::element("span")
                    .class("pdf-report-footer__organization")
                    .text(org),
            );
        }
        Ok(footer
            .child(
                Node::element("span")
                    .class("pdf-report-footer__page")
                    .text(&format!("Page {} of {}", page, total)),
            )
            .build())
    }
}
