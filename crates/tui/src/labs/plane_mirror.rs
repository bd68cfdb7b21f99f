//! Plane mirror lab: virtual image formation behind a flat mirror.

use optiklab_config::Theme;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use super::{LabModule, Step};
use crate::ui::theme::ThemeExt;

const STEPS: &[Step] = &[
    Step {
        text: "An object sits in front of a flat mirror. Light rays leave \
               every point of the object in all directions.",
        concept: Some("Reflection"),
    },
    Step {
        text: "Rays that hit the mirror bounce off with the angle of \
               reflection equal to the angle of incidence.",
        concept: Some("Law of reflection"),
    },
    Step {
        text: "Extend the reflected rays backwards: they meet behind the \
               mirror. Your eye places the image there.",
        concept: Some("Virtual image"),
    },
    Step {
        text: "The image sits as far behind the mirror as the object sits \
               in front of it, and it is the same size.",
        concept: None,
    },
];

/// Flat-mirror ray diagram.
pub struct PlaneMirrorLab {
    /// Object distance from the mirror plane, in canvas units.
    object_distance: f64,
    object_height: f64,
    dark: bool,
    area: (u16, u16),
}

impl PlaneMirrorLab {
    pub fn new() -> Self {
        Self {
            object_distance: 30.0,
            object_height: 15.0,
            dark: false,
            area: (0, 0),
        }
    }
}

impl Default for PlaneMirrorLab {
    fn default() -> Self {
        Self::new()
    }
}

impl LabModule for PlaneMirrorLab {
    fn id(&self) -> &'static str {
        "plane-mirror"
    }

    fn display_name(&self) -> &'static str {
        "Plane mirror"
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.area = (width, height);
    }

    fn set_dark_mode(&mut self, dark: bool) {
        self.dark = dark;
    }

    fn guided_steps(&self) -> &'static [Step] {
        STEPS
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let d = self.object_distance;
        let h = self.object_height;

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style())
                    .title("Plane mirror"),
            )
            .marker(Marker::Braille)
            .x_bounds([-60.0, 60.0])
            .y_bounds([-30.0, 30.0])
            .paint(|ctx| {
                // Mirror plane at x = 0.
                ctx.draw(&Line {
                    x1: 0.0,
                    y1: -25.0,
                    x2: 0.0,
                    y2: 25.0,
                    color: theme.canvas_axis,
                });
                // Object arrow.
                ctx.draw(&Line {
                    x1: -d,
                    y1: 0.0,
                    x2: -d,
                    y2: h,
                    color: theme.canvas_object,
                });
                // Incident and reflected ray through the mirror midpoint.
                ctx.draw(&Line {
                    x1: -d,
                    y1: h,
                    x2: 0.0,
                    y2: h / 2.0,
                    color: theme.canvas_ray,
                });
                ctx.draw(&Line {
                    x1: 0.0,
                    y1: h / 2.0,
                    x2: -d,
                    y2: 0.0,
                    color: theme.canvas_ray,
                });
                // Virtual image, mirrored behind the plane.
                ctx.draw(&Line {
                    x1: d,
                    y1: 0.0,
                    x2: d,
                    y2: h,
                    color: theme.disabled,
                });
            });

        frame.render_widget(canvas, area);
    }
}
