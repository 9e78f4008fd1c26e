pub mod polar_plot;

use crate::config::PlotStyle;
use crate::error::Result;
use crate::physics::polarisation::IntensityCurve;

pub use polar_plot::PolarPlotter;

/// Consumer of computed intensity curves. Implementations decide how (and
/// whether) they are drawn; the curves arrive in active-tensor order.
pub trait IntensityVisualizer {
    fn render(&self, curves: &[IntensityCurve], style: &PlotStyle) -> Result<()>;
}
