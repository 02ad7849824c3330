use crate::core::data::{colour::Colour, complex_rect::ComplexRect};
use crate::core::market::MarketSeries;
use crate::core::mode::Mode;

/// Everything the renderer needs to draw one screen.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub mode: Mode,
    pub backlight: bool,
    pub frame: Frame,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Clear,
    Fill {
        colour: Colour,
    },
    Fractal {
        /// Region of the complex plane to draw.
        extent: ComplexRect,
        max_iterations: u32,
    },
    SysStats(StatsFrame),
    Market {
        series: Vec<MarketSeries>,
    },
}

impl Frame {
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Fill { .. } => "fill",
            Self::Fractal { .. } => "fractal",
            Self::SysStats(_) => "stats",
            Self::Market { .. } => "market",
        }
    }
}

/// Stats window flattened into plot-ready series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatsFrame {
    /// Seconds relative to the newest sample.
    pub time_offsets: Vec<f64>,
    pub cpu_percent_by_core: Vec<Vec<f32>>,
    pub mem_percent: Vec<f32>,
    pub cpu_temp_celsius: Vec<Option<f32>>,
}
