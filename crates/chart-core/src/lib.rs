// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; chart projection, indicator tooltip, rendering, sample data and stock catalog.

pub mod error;
pub mod types;
pub mod projection;
pub mod nearest;
pub mod grid;
pub mod axis;
pub mod geometry;
pub mod indicator;
pub mod theme;
pub mod text;
pub mod chart;
pub mod sample;
pub mod stocks;
pub mod nav;

pub use error::{ChartError, ChartResult};
pub use types::{Dataset, Point, Rgba, Series, Viewport};
pub use projection::{compute_ranges, pixel_to_timestamp, project, project_with_progress, Projection, Ranges};
pub use nearest::nearest_point;
pub use indicator::{Indicator, Tooltip, TooltipEntry};
pub use chart::{LineChart, RenderOptions};
pub use theme::Theme;
pub use text::TextShaper;
pub use nav::{Navigator, Route};
pub use stocks::Stock;
