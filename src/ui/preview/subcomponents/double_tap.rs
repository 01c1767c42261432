// SPDX-License-Identifier: MPL-2.0
//! Double-tap sub-component toggling between neutral and double-tap zoom.

use super::Context;
use crate::config::NEUTRAL_ZOOM;
use crate::ui::preview::policy;
use crate::ui::preview::state::Field;

#[derive(Debug, Clone, Default)]
pub struct State;

#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// A double tap was recognised. The tap location is not used.
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Zoom is animating towards `target`.
    Toggled { target: f32 },
}

impl State {
    #[allow(clippy::unused_self)]
    pub fn handle(&mut self, msg: Message, ctx: &mut Context<'_>) -> Effect {
        match msg {
            Message::Toggle => {
                // Decide on where the zoom is going, not where it is mid-flight,
                // so rapid double taps alternate.
                let heading = ctx
                    .animator
                    .target(Field::Scale)
                    .unwrap_or(ctx.transform.scale);
                let target = policy::double_tap_target(heading, ctx.settings.zoom);
                let duration = ctx.settings.timing.as_duration();

                if target == NEUTRAL_ZOOM {
                    ctx.animate(Field::Scale, NEUTRAL_ZOOM, duration);
                    ctx.recenter(duration);
                } else {
                    ctx.animate(Field::Scale, target, duration);
                }
                ctx.transform.saved_scale = target;
                Effect::Toggled { target }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::preview::subcomponents::test_support::Harness;

    fn toggle(harness: &mut Harness) -> Effect {
        State.handle(Message::Toggle, &mut harness.context())
    }

    #[test]
    fn toggles_in_and_out() {
        let mut harness = Harness::default();

        assert_eq!(toggle(&mut harness), Effect::Toggled { target: 2.0 });
        assert_eq!(harness.transform.saved_scale, 2.0);
        harness.settle();
        assert_eq!(harness.transform.scale, 2.0);

        assert_eq!(toggle(&mut harness), Effect::Toggled { target: 1.0 });
        assert_eq!(harness.transform.saved_scale, 1.0);
        harness.settle();
        assert_eq!(harness.transform.scale, 1.0);
    }

    #[test]
    fn zooming_out_recenters_position() {
        let mut harness = Harness::default();
        harness.transform.scale = 2.0;
        harness.transform.saved_scale = 2.0;
        harness.transform.pos_x = 80.0;
        harness.transform.pos_y = -25.0;
        harness.transform.commit_position();

        toggle(&mut harness);
        assert_eq!(harness.transform.saved_pos_x, 0.0);
        assert_eq!(harness.transform.saved_pos_y, 0.0);

        harness.settle();
        assert_eq!(harness.transform.pos_x, 0.0);
        assert_eq!(harness.transform.pos_y, 0.0);
        assert_eq!(harness.transform.scale, 1.0);
    }

    #[test]
    fn rapid_taps_alternate_before_animations_finish() {
        let mut harness = Harness::default();
        assert_eq!(toggle(&mut harness), Effect::Toggled { target: 2.0 });
        harness.now += std::time::Duration::from_millis(20);
        harness.animator.tick(&mut harness.transform, harness.now);
        assert_eq!(toggle(&mut harness), Effect::Toggled { target: 1.0 });
        assert_eq!(toggle(&mut harness), Effect::Toggled { target: 2.0 });
    }

    #[test]
    fn zooming_in_keeps_position() {
        let mut harness = Harness::default();
        harness.transform.pos_y = 12.0;
        toggle(&mut harness);
        assert!(!harness.animator.is_animating(Field::PosY));
        harness.settle();
        assert_eq!(harness.transform.pos_y, 12.0);
    }
}
