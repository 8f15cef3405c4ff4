/// Explicit, immutable styling for the map. Passed into plan building and
/// painting; nothing reads theme values from ambient/global state.
#[derive(Clone, Debug, PartialEq)]
pub struct MapTheme {
	pub background: &'static str,
	pub grid_line: &'static str,
	pub path: &'static str,
	pub path_highlight: &'static str,
	pub marker_fill: &'static str,
	pub marker_fill_active: &'static str,
	pub marker_outline: &'static str,
	pub position_fill: &'static str,
	pub label_text: &'static str,

	pub grid_spacing: f64,
	pub path_width: f64,
	pub path_width_highlight: f64,
	pub marker_radius: f64,
	pub marker_radius_active: f64,
	pub position_radius: f64,
	/// Tap hit-region radius around a marker centre, in pixels.
	pub hit_radius: f64,
	/// Entrance fade for the current-position marker, in seconds.
	pub fade_duration: f64,
}

impl Default for MapTheme {
	fn default() -> Self {
		// Campus Pulse palette: deep purple ground, lavender neutrals,
		// vivid orange accent.
		Self {
			background: "#1a0033",
			grid_line: "rgba(179, 157, 219, 0.1)",
			path: "rgba(179, 157, 219, 0.5)",
			path_highlight: "#ff6d00",
			marker_fill: "rgba(209, 196, 233, 0.8)",
			marker_fill_active: "#ff6d00",
			marker_outline: "rgba(255, 255, 255, 0.5)",
			position_fill: "rgba(255, 224, 178, 0.9)",
			label_text: "rgba(255, 255, 255, 0.85)",

			grid_spacing: 40.0,
			path_width: 4.0,
			path_width_highlight: 6.0,
			marker_radius: 24.0,
			marker_radius_active: 28.0,
			position_radius: 24.0,
			hit_radius: 24.0,
			fade_duration: 1.0,
		}
	}
}
