// SPDX-License-Identifier: MPL-2.0
//! Pinch sub-component: continuous zoom capped at the ceiling, floored at
//! neutral on release.

use super::Context;
use crate::config::NEUTRAL_ZOOM;
use crate::domain::ui::PinchRatio;
use crate::ui::preview::policy;
use crate::ui::preview::state::Field;

#[derive(Debug, Clone, Default)]
pub struct State {
    active: bool,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Began,
    /// Cumulative ratio since the pinch started.
    Updated(f32),
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    Scaled(f32),
    /// The pinch was released at `scale`; `floored` when it went below neutral
    /// and was forced back.
    Settled { scale: f32, floored: bool },
}

impl State {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn handle(&mut self, msg: Message, ctx: &mut Context<'_>) -> Effect {
        match msg {
            Message::Began => {
                self.active = true;
                ctx.animator.cancel(Field::Scale);
                ctx.transform.saved_scale = ctx.transform.scale;
                Effect::None
            }
            Message::Updated(ratio) => {
                let Some(ratio) = PinchRatio::new(ratio).filter(|_| self.active) else {
                    return Effect::None;
                };
                let scale = policy::pinch_scale(
                    ctx.transform.saved_scale,
                    ratio.value(),
                    ctx.settings.zoom,
                );
                ctx.write(Field::Scale, scale);
                Effect::Scaled(scale)
            }
            Message::Ended => {
                if !std::mem::take(&mut self.active) {
                    return Effect::None;
                }
                let scale = ctx.transform.scale;
                if policy::pinch_needs_floor(scale) {
                    ctx.write(Field::Scale, NEUTRAL_ZOOM);
                    ctx.transform.saved_scale = NEUTRAL_ZOOM;
                    ctx.recenter(ctx.settings.snap_back.as_duration());
                    return Effect::Settled {
                        scale: NEUTRAL_ZOOM,
                        floored: true,
                    };
                }
                ctx.transform.saved_scale = scale;
                if ctx.transform.is_neutral()
                    && (ctx.transform.pos_x != 0.0 || ctx.transform.pos_y != 0.0)
                {
                    ctx.recenter(ctx.settings.snap_back.as_duration());
                }
                Effect::Settled {
                    scale,
                    floored: false,
                }
            }
        }
    }
}
