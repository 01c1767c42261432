// SPDX-License-Identifier: MPL-2.0
//! Pan sub-component: drag, snap-back, and release decisions.

use super::Context;
use crate::ui::preview::policy::{self, PageTurn, ReleaseContext};
use crate::ui::preview::state::Field;
use iced::Vector;

/// Pan sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    active: bool,
    /// Last finite cumulative translation, used when the end event carries none.
    last_translation: Vector,
}

/// Messages for the pan sub-component. Translations are cumulative.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Began,
    Updated(Vector),
    Ended(Vector),
}

/// Effects produced by pan operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The live translation changed.
    Moved,
    /// The drag was released; the orchestrator applies these transitions.
    Released {
        page_turn: Option<PageTurn>,
        dismiss: bool,
    },
}

fn is_finite(translation: Vector) -> bool {
    translation.x.is_finite() && translation.y.is_finite()
}

impl State {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Handle a pan message.
    pub fn handle(&mut self, msg: Message, ctx: &mut Context<'_>) -> Effect {
        match msg {
            Message::Began => {
                self.active = true;
                self.last_translation = Vector::ZERO;
                // Whatever is still animating yields to the finger.
                ctx.animator.cancel(Field::PosX);
                ctx.animator.cancel(Field::PosY);
                ctx.transform.commit_position();
                Effect::None
            }
            Message::Updated(translation) => {
                if !self.active || !is_finite(translation) {
                    return Effect::None;
                }
                self.last_translation = translation;
                Self::apply(translation, ctx);
                Effect::Moved
            }
            Message::Ended(translation) => {
                if !std::mem::take(&mut self.active) {
                    return Effect::None;
                }
                let translation = if is_finite(translation) {
                    translation
                } else {
                    self.last_translation
                };
                Self::release(translation, ctx)
            }
        }
    }

    fn apply(translation: Vector, ctx: &mut Context<'_>) {
        let band = policy::horizontal_band(ctx.settings.max_x_offset, ctx.transform.scale);
        let x = ctx.transform.saved_pos_x + translation.x;
        if policy::within_band(x, band) {
            ctx.write(Field::PosX, x);
        }
        let y = ctx.transform.saved_pos_y + translation.y;
        ctx.write(Field::PosY, y);
    }

    fn release(translation: Vector, ctx: &mut Context<'_>) -> Effect {
        // A zoom still animating is judged by where it lands.
        let scale = ctx
            .animator
            .target(Field::Scale)
            .unwrap_or(ctx.transform.scale);
        let decision = policy::decide_release(
            translation,
            &ReleaseContext {
                scale,
                has_previous: ctx.has_previous,
                has_next: ctx.has_next,
                max_x_offset: ctx.settings.max_x_offset,
                dismiss_threshold: ctx.settings.dismiss_threshold,
            },
        );

        if decision.snap_back {
            ctx.recenter(ctx.settings.snap_back.as_duration());
        } else {
            ctx.transform.commit_position();
        }

        Effect::Released {
            page_turn: decision.page_turn,
            dismiss: decision.dismiss,
        }
    }
}
