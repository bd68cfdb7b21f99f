//! Refraction lab: Snell's law at an air-to-glass boundary.

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
        text: "Light slows down when it enters a denser medium. The ratio \
               of the speeds is the refractive index n.",
        concept: Some("Refractive index"),
    },
    Step {
        text: "A ray crossing the boundary bends toward the normal when \
               entering glass, following n1 sin(v1) = n2 sin(v2).",
        concept: Some("Snell's law"),
    },
    Step {
        text: "Going the other way, from glass to air, the ray bends away \
               from the normal instead.",
        concept: None,
    },
    Step {
        text: "Past a critical angle no refracted ray escapes at all: the \
               light reflects back completely. Optical fibers rely on this.",
        concept: Some("Total internal reflection"),
    },
];

pub struct RefractionLab {
    /// Angle of incidence in degrees, measured from the normal.
    incidence_deg: f64,
    /// Refractive index of the lower medium (air above is 1.0).
    index: f64,
    dark: bool,
    area: (u16, u16),
}

impl RefractionLab {
    pub fn new() -> Self {
        Self {
            incidence_deg: 40.0,
            index: 1.5,
            dark: false,
            area: (0, 0),
        }
    }

    fn refraction_deg(&self) -> f64 {
        let v1 = self.incidence_deg.to_radians();
        (v1.sin() / self.index).asin().to_degrees()
    }
}

impl Default for RefractionLab {
    fn default() -> Self {
        Self::new()
    }
}

impl LabModule for RefractionLab {
    fn id(&self) -> &'static str {
        "refraction"
    }

    fn display_name(&self) -> &'static str {
        "Refraction"
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
        let len = 25.0;
        let v1 = self.incidence_deg.to_radians();
        let v2 = self.refraction_deg().to_radians();

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style())
                    .title("Refraction"),
            )
            .marker(Marker::Braille)
            .x_bounds([-40.0, 40.0])
            .y_bounds([-30.0, 30.0])
            .paint(|ctx| {
                // Boundary between the media, with the normal dashed up.
                ctx.draw(&Line {
                    x1: -40.0,
                    y1: 0.0,
                    x2: 40.0,
                    y2: 0.0,
                    color: theme.canvas_axis,
                });
                ctx.draw(&Line {
                    x1: 0.0,
                    y1: -28.0,
                    x2: 0.0,
                    y2: 28.0,
                    color: theme.disabled,
                });
                // Incident ray from the upper left toward the origin.
                ctx.draw(&Line {
                    x1: -len * v1.sin(),
                    y1: len * v1.cos(),
                    x2: 0.0,
                    y2: 0.0,
                    color: theme.canvas_ray,
                });
                // Refracted ray continuing into the glass, bent toward
                // the normal.
                ctx.draw(&Line {
                    x1: 0.0,
                    y1: 0.0,
                    x2: len * v2.sin(),
                    y2: -len * v2.cos(),
                    color: theme.canvas_ray,
                });
                // Partial reflection at the boundary.
                ctx.draw(&Line {
                    x1: 0.0,
                    y1: 0.0,
                    x2: len * v1.sin(),
                    y2: len * v1.cos(),
                    color: theme.canvas_object,
                });
            });

        frame.render_widget(canvas, area);
    }
}
