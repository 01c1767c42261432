// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! While the preview is open a full-window canvas draws the backdrop, the
//! transformed image card and the page indicators from the controller's
//! [`RenderFrame`]. Once dismissed, a button offers to open it again.

use super::Message;
use crate::ui::preview::{PreviewController, RenderFrame};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Text};
use iced::widget::{button, column, container, text};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

/// Share of the shorter window side covered by the card at neutral zoom.
const CARD_FILL: f32 = 0.7;
const CARD_ASPECT: f32 = 4.0 / 3.0;
const CARD_COLOR: Color = Color {
    r: 0.82,
    g: 0.84,
    b: 0.88,
    a: 1.0,
};
const LABEL_SIZE: f32 = 18.0;
const CHEVRON_SIZE: f32 = 56.0;
const EDGE_MARGIN: f32 = 24.0;

/// Renders the preview overlay or the reopen prompt.
pub fn view(controller: &PreviewController) -> Element<'_, Message> {
    if controller.is_open() {
        Canvas::new(PreviewCanvas { controller })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        let content = column![
            text("Preview dismissed"),
            button(text("Show preview")).on_press(Message::Reopen),
        ]
        .spacing(12);
        container(content).center(Length::Fill).into()
    }
}

struct PreviewCanvas<'a> {
    controller: &'a PreviewController,
}

impl PreviewCanvas<'_> {
    fn draw_card(&self, frame: &mut Frame, bounds: Rectangle, render: &RenderFrame) {
        let base_width = bounds.width.min(bounds.height * CARD_ASPECT) * CARD_FILL;
        let size = Size::new(base_width * render.scale, base_width / CARD_ASPECT * render.scale);
        let center = Point::new(
            bounds.width / 2.0 + render.translation.x,
            bounds.height / 2.0 + render.translation.y,
        );
        let top_left = Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0);

        frame.fill_rectangle(
            top_left,
            size,
            Color {
                a: render.opacity,
                ..CARD_COLOR
            },
        );

        let label = self.controller.current_locator().unwrap_or_default();
        frame.fill_text(Text {
            content: label.to_string(),
            position: Point::new(top_left.x + EDGE_MARGIN, center.y - LABEL_SIZE / 2.0),
            color: Color {
                a: render.opacity,
                ..Color::BLACK
            },
            size: (LABEL_SIZE * render.scale).into(),
            ..Text::default()
        });
    }

    fn draw_indicators(frame: &mut Frame, bounds: Rectangle, render: &RenderFrame) {
        let y = bounds.height / 2.0 - CHEVRON_SIZE / 2.0;
        let chevrons = [
            ("‹", EDGE_MARGIN, render.previous_indicator),
            ("›", bounds.width - EDGE_MARGIN - CHEVRON_SIZE / 2.0, render.next_indicator),
        ];
        for (glyph, x, alpha) in chevrons {
            if alpha <= 0.0 {
                continue;
            }
            frame.fill_text(Text {
                content: glyph.to_string(),
                position: Point::new(x, y),
                color: Color {
                    a: alpha,
                    ..Color::WHITE
                },
                size: CHEVRON_SIZE.into(),
                ..Text::default()
            });
        }
    }

    fn draw_counter(&self, frame: &mut Frame, bounds: Rectangle, render: &RenderFrame) {
        let count = self.controller.images().len();
        if count < 2 {
            return;
        }
        frame.fill_text(Text {
            content: format!("{} / {count}", render.image_index + 1),
            position: Point::new(EDGE_MARGIN, bounds.height - EDGE_MARGIN - LABEL_SIZE),
            color: Color {
                a: render.opacity,
                ..Color::WHITE
            },
            size: LABEL_SIZE.into(),
            ..Text::default()
        });
    }
}

impl canvas::Program<Message> for PreviewCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let render = self.controller.frame(bounds.height);
        let mut frame = Frame::new(renderer, bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), render.backdrop);
        self.draw_card(&mut frame, bounds, &render);
        Self::draw_indicators(&mut frame, bounds, &render);
        self.draw_counter(&mut frame, bounds, &render);

        vec![frame.into_geometry()]
    }
}
