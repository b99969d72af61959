pub mod metric;
pub mod observation;
pub mod projection;
pub mod scale;
pub mod ticks;
pub mod transition;
pub mod types;

pub use metric::{XMetric, YMetric};
pub use observation::Observation;
pub use projection::{ABBR_BASELINE_NUDGE_PX, PointPlacement, project_observations};
pub use scale::{LinearScale, XDomainTuning, YDomainTuning};
pub use transition::{
    CoordinateTween, DEFAULT_TRANSITION_DURATION, EasingFn, TransitionClock, ease_cubic_in_out,
    ease_linear,
};
pub use types::{Margins, PlotArea, Viewport};
