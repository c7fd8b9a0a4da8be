use funnel_core::{NumericPolicy, Wizard, WizardState};
use gpui::{
    App, AppContext, ClickEvent, Context, Div, Entity, FontWeight, IntoElement, ParentElement,
    Render, Styled, Subscription, Window, div,
};
use gpui_component::{
    h_flex,
    input::{InputEvent, InputState, MaskPattern},
    v_flex,
};
use tracing::{debug, info};

use crate::{
    components::{ResultsPanel, make_button, make_input_row},
    utils::format_input_value,
};
#[cfg(not(target_os = "linux"))]
use crate::{Quit, quit};

/// The single window view: one input per step, then the results.
pub struct FunnelWizardView {
    wizard: Wizard,
    input: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl FunnelWizardView {
    pub fn new(
        policy: NumericPolicy,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let input = cx.new(|input_cx| {
            InputState::new(window, input_cx)
                .mask_pattern(MaskPattern::Number {
                    separator: Some(','),
                    fraction: Some(4),
                })
                .placeholder("Enter a value")
        });

        let subscriptions = vec![
            cx.subscribe_in(&input, window, Self::on_input_event),
            cx.on_window_closed(|_cx: &mut App| {
                info!("Window closed callback");
                #[cfg(not(target_os = "linux"))]
                quit(&Quit, _cx);
            }),
        ];

        let mut view = Self {
            wizard: Wizard::with_policy(policy),
            input,
            _subscriptions: subscriptions,
        };
        view.sync_input(window, cx);
        info!(?policy, "wizard view constructed");
        view
    }

    fn on_input_event(
        &mut self,
        _state: &Entity<InputState>,
        event: &InputEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        // Field text is committed on navigation only, not per keystroke.
        if let InputEvent::PressEnter { .. } = event {
            self.go_next(window, cx);
        }
    }

    /// Stores the field text for the active step. Called when leaving a step.
    fn commit_input(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        if let Some(step) = self.wizard.active_step() {
            let text = self.input.read(cx).value();
            self.wizard.edit(step.id, text.as_str());
        }
    }

    /// Puts the active step's stored value into the field.
    fn sync_input(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let Some(step) = self.wizard.active_step() {
            let text = format_input_value(self.wizard.current_value(step.id));
            self.input
                .update(cx, |state, input_cx| state.set_value(text, window, input_cx));
        }
    }

    fn go_next(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.commit_input(cx);
        let state = self.wizard.next();
        debug!(?state, "next pressed");
        self.sync_input(window, cx);
        cx.notify();
    }

    fn go_prev(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.wizard.state() != WizardState::Results {
            self.commit_input(cx);
        }
        let state = self.wizard.prev();
        debug!(?state, "previous pressed");
        self.sync_input(window, cx);
        cx.notify();
    }

    fn start_over(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.wizard.restart();
        self.sync_input(window, cx);
        cx.notify();
    }

    fn render_controls(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        let mut controls = h_flex().gap_4().items_center().justify_center();

        if self.wizard.can_go_back() {
            controls = controls.child(make_button(
                "previous",
                "Previous",
                false,
                cx.listener(|this, _: &ClickEvent, window, cx| this.go_prev(window, cx)),
            ));
        }
        if let Some(label) = self.wizard.next_action_label() {
            controls = controls.child(make_button(
                "next",
                label,
                true,
                cx.listener(|this, _: &ClickEvent, window, cx| this.go_next(window, cx)),
            ));
        }
        if self.wizard.state() == WizardState::Results {
            controls = controls.child(make_button(
                "start-over",
                "Start over",
                true,
                cx.listener(|this, _: &ClickEvent, window, cx| this.start_over(window, cx)),
            ));
        }

        controls
    }
}

impl Render for FunnelWizardView {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let (step_number, step_count) = self.wizard.progress();

        let mut body = v_flex().size_full().p_5().gap_4().child(
            div()
                .text_2xl()
                .font_weight(FontWeight::BOLD)
                .child("Sales Calculator"),
        );

        match self.wizard.active_step() {
            Some(step) => {
                body = body
                    .child(format!("Step {step_number} of {step_count}"))
                    .child(make_input_row(&self.input, format!("{}:", step.label)));
            }
            None => {
                if let Some(result) = self.wizard.result() {
                    body = body.child(ResultsPanel::new(result.clone()));
                }
            }
        }

        body.child(self.render_controls(cx))
    }
}
