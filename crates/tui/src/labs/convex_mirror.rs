//! Convex mirror lab: diverging reflection and diminished virtual images.

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
        text: "A convex mirror curves outward. Parallel rays spread apart \
               after reflection instead of converging.",
        concept: Some("Diverging mirror"),
    },
    Step {
        text: "Traced backwards, the reflected rays appear to come from a \
               focal point behind the mirror.",
        concept: Some("Virtual focal point"),
    },
    Step {
        text: "The image is always virtual, upright and smaller than the \
               object. That wide view is why car mirrors are convex.",
        concept: None,
    },
];

pub struct ConvexMirrorLab {
    focal_length: f64,
    object_distance: f64,
    dark: bool,
    area: (u16, u16),
}

impl ConvexMirrorLab {
    pub fn new() -> Self {
        Self {
            focal_length: 20.0,
            object_distance: 35.0,
            dark: false,
            area: (0, 0),
        }
    }
}

impl Default for ConvexMirrorLab {
    fn default() -> Self {
        Self::new()
    }
}

impl LabModule for ConvexMirrorLab {
    fn id(&self) -> &'static str {
        "convex-mirror"
    }

    fn display_name(&self) -> &'static str {
        "Convex mirror"
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
        // Convex mirror: negative focal length in the mirror formula.
        let d_i = (-f * d_o) / (d_o + f);
        let h = 12.0;
        let h_i = -h * d_i / d_o;

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style())
                    .title("Convex mirror"),
            )
            .marker(Marker::Braille)
            .x_bounds([-60.0, 40.0])
            .y_bounds([-30.0, 30.0])
            .paint(|ctx| {
                ctx.draw(&Line {
                    x1: -60.0,
                    y1: 0.0,
                    x2: 40.0,
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
                ctx.draw(&Line {
                    x1: -d_o,
                    y1: 0.0,
                    x2: -d_o,
                    y2: h,
                    color: theme.canvas_object,
                });
                // Parallel ray reflects as if from F behind the mirror.
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
                    x2: -25.0,
                    y2: h + 25.0 * h / f,
                    color: theme.canvas_ray,
                });
                // Backward extension to the virtual focal point.
                ctx.draw(&Line {
                    x1: 0.0,
                    y1: h,
                    x2: f,
                    y2: 0.0,
                    color: theme.disabled,
                });
                // Diminished upright virtual image behind the mirror.
                ctx.draw(&Line {
                    x1: -d_i,
                    y1: 0.0,
                    x2: -d_i,
                    y2: h_i,
                    color: theme.disabled,
                });
            });

        frame.render_widget(canvas, area);
    }
}
