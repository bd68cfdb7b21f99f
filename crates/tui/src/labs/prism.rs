//! Prism lab: dispersion of white light into a spectrum.

use optiklab_config::Theme;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use super::{LabModule, Step};
use crate::ui::theme::ThemeExt;

const STEPS: &[Step] = &[
    Step {
        text: "White light is a mixture of all visible colors. A prism \
               refracts the beam twice, once at each surface.",
        concept: Some("Dispersion"),
    },
    Step {
        text: "The refractive index of glass is slightly higher for blue \
               light than for red, so blue bends more.",
        concept: Some("Wavelength dependence"),
    },
    Step {
        text: "The colors therefore leave the prism at different angles \
               and fan out into a spectrum, red on top, violet below.",
        concept: Some("Spectrum"),
    },
    Step {
        text: "A rainbow is the same effect: raindrops act as tiny prisms \
               splitting sunlight.",
        concept: None,
    },
];

const SPECTRUM: &[Color] = &[
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

/// Stateless lab: the schematic has no adjustable parameters, so the
/// default lifecycle hooks suffice.
pub struct PrismLab;

impl PrismLab {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PrismLab {
    fn default() -> Self {
        Self::new()
    }
}

impl LabModule for PrismLab {
    fn id(&self) -> &'static str {
        "prism"
    }

    fn display_name(&self) -> &'static str {
        "Prism"
    }

    fn guided_steps(&self) -> &'static [Step] {
        STEPS
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style())
                    .title("Prism"),
            )
            .marker(Marker::Braille)
            .x_bounds([-50.0, 50.0])
            .y_bounds([-30.0, 30.0])
            .paint(|ctx| {
                // Triangular prism centered on the origin.
                ctx.draw(&Line {
                    x1: -12.0,
                    y1: -12.0,
                    x2: 0.0,
                    y2: 14.0,
                    color: theme.canvas_axis,
                });
                ctx.draw(&Line {
                    x1: 0.0,
                    y1: 14.0,
                    x2: 12.0,
                    y2: -12.0,
                    color: theme.canvas_axis,
                });
                ctx.draw(&Line {
                    x1: -12.0,
                    y1: -12.0,
                    x2: 12.0,
                    y2: -12.0,
                    color: theme.canvas_axis,
                });
                // Incoming white beam.
                ctx.draw(&Line {
                    x1: -48.0,
                    y1: 8.0,
                    x2: -6.0,
                    y2: 1.0,
                    color: theme.canvas_ray,
                });
                // Fan of refracted colors, blue deflected the most.
                for (i, &color) in SPECTRUM.iter().enumerate() {
                    let drop = 2.0 + 2.5 * i as f64;
                    ctx.draw(&Line {
                        x1: 6.0,
                        y1: 0.0,
                        x2: 48.0,
                        y2: -drop,
                        color,
                    });
                }
            });

        frame.render_widget(canvas, area);
    }
}
