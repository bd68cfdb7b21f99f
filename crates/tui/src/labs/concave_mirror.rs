//! Concave mirror lab: focal point and real image formation.

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
        text: "A concave mirror curves inward. Rays arriving parallel to \
               the optical axis all reflect through one point.",
        concept: Some("Focal point"),
    },
    Step {
        text: "That point is the focal point F. Its distance from the \
               mirror is the focal length, half the radius of curvature.",
        concept: Some("Focal length"),
    },
    Step {
        text: "Place an object beyond F and the reflected rays cross on \
               the object's side: a real, inverted image forms there.",
        concept: Some("Real image"),
    },
    Step {
        text: "Move the object inside F and the rays diverge instead. The \
               image becomes virtual, upright and magnified.",
        concept: None,
    },
];

pub struct ConcaveMirrorLab {
    focal_length: f64,
    object_distance: f64,
    dark: bool,
    area: (u16, u16),
}

impl ConcaveMirrorLab {
    pub fn new() -> Self {
        Self {
            focal_length: 20.0,
            object_distance: 45.0,
            dark: false,
            area: (0, 0),
        }
    }

    /// Image distance from the mirror formula `1/f = 1/d_o + 1/d_i`.
    fn image_distance(&self) -> f64 {
        let f = self.focal_length;
        let d_o = self.object_distance;
        (f * d_o) / (d_o - f)
    }
}

impl Default for ConcaveMirrorLab {
    fn default() -> Self {
        Self::new()
    }
}

impl LabModule for ConcaveMirrorLab {
    fn id(&self) -> &'static str {
        "concave-mirror"
    }

    fn display_name(&self) -> &'static str {
        "Concave mirror"
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
        let f = self.focal_length;
        let d_o = self.object_distance;
        let d_i = self.image_distance();
        let h = 12.0;
        let h_i = -h * d_i / d_o;

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style())
                    .title("Concave mirror"),
            )
            .marker(Marker::Braille)
            .x_bounds([-70.0, 20.0])
            .y_bounds([-30.0, 30.0])
            .paint(|ctx| {
                // Optical axis and mirror (approximated by its vertex line).
                ctx.draw(&Line {
                    x1: -70.0,
                    y1: 0.0,
                    x2: 10.0,
                    y2: 0.0,
                    color: theme.canvas_axis,
                });
                ctx.draw(&Line {
                    x1: 0.0,
                    y1: -22.0,
                    x2: 0.0,
                    y2: 22.0,
                    color: theme.canvas_axis,
                });
                // Object and focal point marker.
                ctx.draw(&Line {
                    x1: -d_o,
                    y1: 0.0,
                    x2: -d_o,
                    y2: h,
                    color: theme.canvas_object,
                });
                ctx.draw(&Line {
                    x1: -f,
                    y1: -1.5,
                    x2: -f,
                    y2: 1.5,
                    color: theme.accent,
                });
                // Parallel ray: in parallel to the axis, out through F.
                ctx.draw(&Line {
                    x1: -d_o,
                    y1: h,
                    x2: 0.0,
                    y2: h,
                    color: theme.canvas_ray,
                });
                ctx.draw(&Line {
                    x1: 0.0,
                    y1: h,
                    x2: -d_i,
                    y2: h_i,
                    color: theme.canvas_ray,
                });
                // Focal ray: in through F, out parallel.
                ctx.draw(&Line {
                    x1: -d_o,
                    y1: h,
                    x2: 0.0,
                    y2: h_i,
                    color: theme.canvas_ray,
                });
                ctx.draw(&Line {
                    x1: 0.0,
                    y1: h_i,
                    x2: -d_i,
                    y2: h_i,
                    color: theme.canvas_ray,
                });
                // Inverted real image.
                ctx.draw(&Line {
                    x1: -d_i,
                    y1: 0.0,
                    x2: -d_i,
                    y2: h_i,
                    color: theme.success,
                });
            });

        frame.render_widget(canvas, area);
    }
}
