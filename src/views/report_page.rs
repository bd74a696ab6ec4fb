// ============================================================================
// REPORT PAGE - Esqueleto común de las páginas de informe
// ============================================================================
// Cabecera PDF + navegación + tarjeta con contenedor de gráfico + pie PDF.
// El cálculo y las opciones del gráfico no pertenecen a este shell.
// ============================================================================

use crate::components::{PDF_REPORT_FOOTER, PDF_REPORT_HEADER};
use crate::dom::Node;
use crate::error::AppResult;
use crate::registry::props;
use crate::router::{BRIDGE_SETTLEMENT_PATH, FOUNDATION_STABILITY_PATH, ROADBED_CALCULATION_PATH};
use crate::views::ViewContext;

/// Páginas de informe navegables (label, path)
pub const REPORT_PAGES: [(&str, &str); 3] = [
    ("Bridge Settlement", BRIDGE_SETTLEMENT_PATH),
    ("Roadbed Calculation", ROADBED_CALCULATION_PATH),
    ("Foundation Stability", FOUNDATION_STABILITY_PATH),
];

pub const ORGANIZATION: &str = "Bridge Safety Assessment";

pub struct ReportPage {
    pub view_name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub chart_id: &'static str,
}

impl ReportPage {
    /// Barra de navegación entre páginas de informe
    pub fn nav(ctx: &ViewContext, active: Option<&str>) -> AppResult<Node> {
        let mut nav = Node::element("nav").class("report-nav");
        for (label, path) in REPORT_PAGES {
            let link = ctx.link(label, path)?;
            nav = if Some(path) == active {
                nav.child(
                    Node::element("span")
                        .class("report-nav__item report-nav__item--active")
                        .child(link),
                )
            } else {
                nav.child(Node::element("span").class("report-nav__item").child(link))
            };
        }
        Ok(nav.build())
    }

    pub fn render(&self, ctx: &ViewContext, path: &str) -> AppResult<Node> {
        let ui = ctx.ui()?;

        let header = ctx.component(
            PDF_REPORT_HEADER,
            &props(&[("title", self.title), ("project", ORGANIZATION)]),
        )?;
        let footer = ctx.component(
            PDF_REPORT_FOOTER,
            &props(&[("page", "1"), ("total", "1"), ("organization", ORGANIZATION)]),
        )?;

        let body = vec![
            Node::element("p").class("report-page__description").text(self.description).build(),
            Node::element("div")
                .id(self.chart_id)
                .class("report-chart")
                .build(),
        ];

        Ok(Node::element("section")
            .class("report-page")
            .attr("data-view", self.view_name)
            .child(header)
            .child(Self::nav(ctx, Some(path))?)
            .child(ui.card(self.title, body))
            .child(footer)
            .build())
    }

    /// Crear la instancia de gráfico sobre el contenedor ya montado
    pub fn mounted(&self, ctx: &ViewContext) -> AppResult<()> {
        ctx.charts()?.init(self.chart_id)?;
        Ok(())
    }
}
