use crate::dom::Node;
use crate::error::AppResult;
use crate::router::ROADBED_CALCULATION_PATH;
use crate::views::{ReportPage, View, ViewContext};

const PAGE: ReportPage = ReportPage {
    view_name: "RoadbedCalculationView",
    title: "Roadbed Calculation",
    description: "Roadbed deformation caused by pipe jacking beneath the embankment.",
    chart_id: "roadbed-calculation-chart",
};

pub struct RoadbedCalculationView;

impl RoadbedCalculationView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RoadbedCalculationView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for RoadbedCalculationView {
    fn name(&self) -> &str {
        PAGE.view_name
    }

    fn render(&self, ctx: &ViewContext) -> AppResult<Node> {
        PAGE.render(ctx, ROADBED_CALCULATION_PATH)
    }

    fn mounted(&self, ctx: &ViewContext) -> AppResult<()> {
        PAGE.mounted(ctx)
    }
}
