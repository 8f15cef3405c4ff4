mod component;
mod data;
mod plan;
mod render;
mod selection;
mod state;
mod theme;
mod types;

pub use component::CampusMapCanvas;
pub use data::campus;
pub use plan::{DrawPlan, LegendEntry, Primitive, build_plan, legend, subtitle};
pub use selection::Selection;
pub use state::CampusMapState;
pub use theme::MapTheme;
pub use types::{CampusMap, ConfigurationError, CurrentPosition, Edge, Location, LocationIcon};
