use crate::dom::Node;
use crate::error::AppResult;
use crate::router::BRIDGE_SETTLEMENT_PATH;
use crate::views::{ReportPage, View, ViewContext};

const PAGE: ReportPage = ReportPage {
    view_name: "BridgeSettlementView",
    title: "Bridge Settlement",
    description: "Settlement of bridge piers induced by adjacent construction.",
    chart_id: "bridge-settlement-chart",
};

/// Página de aterrizaje (destino de la redirección de `/`)
pub struct BridgeSettlementView;

impl BridgeSettlementView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BridgeSettlementView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for BridgeSettlementView {
    fn name(&self) -> &str {
        PAGE.view_name
    }

    fn render(&self, ctx: &ViewContext) -> AppResult<Node> {
        PAGE.render(ctx, BRIDGE_SETTLEMENT_PATH)
    }

    fn mounted(&self, ctx: &ViewContext) -> AppResult<()> {
        PAGE.mounted(ctx)
    }
}
