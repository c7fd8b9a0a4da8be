use funnel_core::{FunnelResult, calculations::common::format_amount, diagram::mermaid};
use gpui::{
    App, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, px,
};
use gpui_component::{ActiveTheme, v_flex};

use crate::components::make_value_row;

/// Totals, headline and diagram source for a calculated funnel.
#[derive(IntoElement)]
pub struct ResultsPanel {
    result: FunnelResult,
}

impl ResultsPanel {
    pub fn new(result: FunnelResult) -> Self {
        Self { result }
    }
}

impl RenderOnce for ResultsPanel {
    fn render(
        self,
        _window: &mut Window,
        cx: &mut App,
    ) -> impl IntoElement {
        let rows = self
            .result
            .totals
            .entries()
            .into_iter()
            .map(|(label, value)| make_value_row(format!("{label}:"), format_amount(value)));

        let headline = make_value_row(
            "Average Premium per Initial Contact:",
            format!("${}", format_amount(self.result.average_per_contact)),
        )
        .font_weight(gpui::FontWeight::BOLD);

        let warning = self.result.is_degenerate().then(|| {
            div()
                .text_color(cx.theme().danger)
                .child("A zero input made some values undefined. Go back and check the inputs.")
        });

        let diagram_lines = mermaid::render(&self.result.diagram)
            .lines()
            .map(|line| SharedString::from(line.to_string()))
            .collect::<Vec<_>>();

        v_flex()
            .gap_2()
            .w_full()
            .children(rows)
            .child(headline)
            .children(warning)
            .child(div().pt_2().child("Funnel diagram (Mermaid):"))
            .child(
                v_flex()
                    .id("mermaid-source")
                    .h(px(200.))
                    .overflow_y_scroll()
                    .p_2()
                    .rounded_md()
                    .border_1()
                    .font_family("monospace")
                    .text_sm()
                    .children(diagram_lines),
            )
    }
}
