pub mod results_panel;
pub mod wizard_view;

use gpui::{App, ClickEvent, Div, Entity, ParentElement, SharedString, Styled, TextAlign, Window};
use gpui::{Pixels, Size, div, px};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::{Input, InputState};
use gpui_component::{Sizable, h_flex};

pub use results_panel::ResultsPanel;
pub use wizard_view::FunnelWizardView;

use crate::config::WindowConfig;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        (&WindowConfig::default()).into()
    }
}

impl WindowPreferences {
    pub fn new(
        width: impl Into<Pixels>,
        height: impl Into<Pixels>,
    ) -> Self {
        Self {
            size: Size {
                width: width.into(),
                height: height.into(),
            },
        }
    }
}

impl From<&WindowConfig> for WindowPreferences {
    fn from(config: &WindowConfig) -> Self {
        Self::new(px(config.width), px(config.height))
    }
}

/// Creates a button with a fixed width and a custom click handler.
/// `primary` picks the accent style for the main action.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    primary: bool,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    let button = Button::new(id.into());
    let button = if primary { button.primary() } else { button };
    button
        .large()
        .w(px(140.))
        .label(label.into())
        .on_click(on_click)
}

/// A labeled row holding the input bound to `state`.
pub fn make_input_row(
    state: &Entity<InputState>,
    input_label: impl Into<SharedString>,
) -> Div {
    make_labeled_row(input_label).child(Input::new(state).flex_grow())
}

/// A labeled row showing a read-only value, aligned with input rows.
pub fn make_value_row(
    label: impl Into<SharedString>,
    value: impl Into<SharedString>,
) -> Div {
    make_labeled_row(label).child(
        div()
            .flex_grow()
            .text_align(TextAlign::Right)
            .pr(px(8.))
            .child(value.into()),
    )
}

/// Common outer container and label for input and value rows.
pub fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex()
        .items_center()
        .gap_5()
        .p(px(2.))
        .rounded_md()
        .border_1()
        .child(
            div()
                .min_w(px(240.))
                .text_align(TextAlign::Right)
                .child(label.into()),
        )
}
