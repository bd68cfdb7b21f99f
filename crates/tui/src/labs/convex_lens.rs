//! Convex lens lab: converging refraction and the thin-lens formula.

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
        text: "A convex lens is thicker in the middle. Light bends toward \
               the axis when passing through it.",
        concept: Some("Converging lens"),
    },
    Step {
        text: "Rays parallel to the axis converge at the focal point on \
               the far side of the lens.",
        concept: Some("Focal point"),
    },
    Step {
        text: "The thin-lens formula 1/f = 1/a + 1/b relates the focal \
               length f to the object and image distances a and b.",
        concept: Some("Thin-lens formula"),
    },
    Step {
        text: "With the object beyond the focal point a real, inverted \
               image forms on the other side. This is how a camera works.",
        concept: None,
    },
    Step {
        text: "Bring the object inside the focal point and the lens acts \
               as a magnifying glass: the image turns virtual and upright.",
        concept: Some("Magnifier"),
    },
];

pub struct ConvexLensLab {
    focal_length: f64,
    object_distance: f64,
    dark: bool,
    area: (u16, u16),
}

impl ConvexLensLab {
    pub fn new() -> Self {
        Self {
            focal_length: 18.0,
            object_distance: 40.0,
            dark: false,
            area: (0, 0),
        }
    }

    fn image_distance(&self) -> f64 {
        let f = self.focal_length;
        let a = self.object_distance;
        (f * a) / (a - f)
    }
}

impl Default for ConvexLensLab {
    fn default() -> Self {
        Self::new()
    }
}

impl LabModule for ConvexLensLab {
    fn id(&self) -> &'static str {
        "convex-lens"
    }

    fn display_name(&self) -> &'static str {
        "Convex lens"
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
        let a = self.object_distance;
        let b = self.image_distance();
        let h = 12.0;
        let h_i = -h * b / a;

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style())
                    .title("Convex lens"),
            )
            .marker(Marker::Braille)
            .x_bounds([-60.0, 60.0])
            .y_bounds([-30.0, 30.0])
            .paint(|ctx| {
                ctx.draw(&Line {
                    x1: -60.0,
                    y1: 0.0,
                    x2: 60.0,
                    y2: 0.0,
                    color: theme.canvas_axis,
                });
                // Lens plane.
                ctx.draw(&Line {
                    x1: 0.0,
                    y1: -20.0,
                    x2: 0.0,
                    y2: 20.0,
                    color: theme.canvas_axis,
                });
                // Focal points on both sides.
                for fx in [-f, f] {
                    ctx.draw(&Line {
                        x1: fx,
                        y1: -1.5,
                        x2: fx,
                        y2: 1.5,
                        color: theme.accent,
                    });
                }
                ctx.draw(&Line {
                    x1: -a,
                    y1: 0.0,
                    x2: -a,
                    y2: h,
                    color: theme.canvas_object,
                });
                // Parallel ray, refracted through far focal point.
                ctx.draw(&Line {
                    x1: -a,
                    y1: h,
                    x2: 0.0,
                    y2: h,
                    color: theme.canvas_ray,
                });
                ctx.draw(&Line {
                    x1: 0.0,
                    y1: h,
                    x2: b,
                    y2: h_i,
                    color: theme.canvas_ray,
                });
                // Central ray, straight through the lens center.
                ctx.draw(&Line {
                    x1: -a,
                    y1: h,
                    x2: b,
                    y2: h_i,
                    color: theme.canvas_ray,
                });
                ctx.draw(&Line {
                    x1: b,
                    y1: 0.0,
                    x2: b,
                    y2: h_i,
                    color: theme.success,
                });
            });

        frame.render_widget(canvas, area);
    }
}
