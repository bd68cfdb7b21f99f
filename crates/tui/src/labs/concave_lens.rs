//! Concave lens lab: diverging refraction.

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
        text: "A concave lens is thinner in the middle. Light bends away \
               from the axis when passing through it.",
        concept: Some("Diverging lens"),
    },
    Step {
        text: "Parallel rays spread out as if they came from a focal \
               point on the incoming side of the lens.",
        concept: Some("Virtual focal point"),
    },
    Step {
        text: "The image is always virtual, upright and smaller than the \
               object. Glasses for nearsightedness use this lens shape.",
        concept: None,
    },
];

pub struct ConcaveLensLab {
    focal_length: f64,
    object_distance: f64,
    dark: bool,
    area: (u16, u16),
}

impl ConcaveLensLab {
    pub fn new() -> Self {
        Self {
            focal_length: 18.0,
            object_distance: 35.0,
            dark: false,
            area: (0, 0),
        }
    }
}

impl Default for ConcaveLensLab {
    fn default() -> Self {
        Self::new()
    }
}

impl LabModule for ConcaveLensLab {
    fn id(&self) -> &'static str {
        "concave-lens"
    }

    fn display_name(&self) -> &'static str {
        "Concave lens"
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
        // Diverging lens: negative focal length, virtual image.
        let b = (-f * a) / (a + f);
        let h = 12.0;
        let h_i = -h * b / a;

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style())
                    .title("Concave lens"),
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
                ctx.draw(&Line {
                    x1: 0.0,
                    y1: -20.0,
                    x2: 0.0,
                    y2: 20.0,
                    color: theme.canvas_axis,
                });
                ctx.draw(&Line {
                    x1: -a,
                    y1: 0.0,
                    x2: -a,
                    y2: h,
                    color: theme.canvas_object,
                });
                // Parallel ray diverges away from the axis after the lens.
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
                    x2: 40.0,
                    y2: h + 40.0 * h / f,
                    color: theme.canvas_ray,
                });
                // Backward extension through the near focal point.
                ctx.draw(&Line {
                    x1: 0.0,
                    y1: h,
                    x2: -f,
                    y2: 0.0,
                    color: theme.disabled,
                });
                // Upright diminished virtual image on the object side.
                ctx.draw(&Line {
                    x1: b,
                    y1: 0.0,
                    x2: b,
                    y2: h_i,
                    color: theme.disabled,
                });
            });

        frame.render_widget(canvas, area);
    }
}
