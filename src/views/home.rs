// Vista eager de `/`. En la práctica nunca se renderiza: la redirección hacia
// /bridge-settlement se aplica antes de resolver el componente.

use crate::dom::Node;
use crate::error::AppResult;
use crate::views::{ReportPage, View, ViewContext};

pub struct HomeView;

impl HomeView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HomeView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for HomeView {
    fn name(&self) -> &str {
        "HomeView"
    }

    fn render(&self, ctx: &ViewContext) -> AppResult<Node> {
        let ui = ctx.ui()?;
        Ok(Node::element("section")
            .class("home")
            .attr("data-view", "HomeView")
            .child(ui.card(
                "Engineering Reports",
                vec![ReportPage::nav(ctx, None)?],
            ))
            .build())
    }
}
