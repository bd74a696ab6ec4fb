use crate::dom::Node;
use crate::error::AppResult;
use crate::router::FOUNDATION_STABILITY_PATH;
use crate::views::{ReportPage, View, ViewContext};

const PAGE: ReportPage = ReportPage {
    view_name: "FoundationStabilityView",
    title: "Foundation Stability",
    description: "Stability check of tower foundations near the excavation.",
    chart_id: "foundation-stability-chart",
};

pub struct FoundationStabilityView;

impl FoundationStabilityView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FoundationStabilityView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for FoundationStabilityView {
    fn name(&self) -> &str {
        PAGE.view_name
    }

    fn render(&self, ctx: &ViewContext) -> AppResult<Node> {
        PAGE.render(ctx, FOUNDATION_STABILITY_PATH)
    }

    fn mounted(&self, ctx: &ViewContext) -> AppResult<()> {
        PAGE.mounted(ctx)
    }
}
