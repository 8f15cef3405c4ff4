use super::plan::{self, DrawPlan, LegendEntry};
use super::selection::Selection;
use super::theme::MapTheme;
use super::types::CampusMap;

/// Owns the one piece of mutable state (the selection) plus the entrance
/// fade clock and viewport size. Mutated only by tap events and the
/// animation tick, on the UI thread.
pub struct CampusMapState {
	map: CampusMap,
	theme: MapTheme,
	selection: Selection,
	fade_t: f64,
	width: f64,
	height: f64,
}

impl CampusMapState {
	pub fn new(map: CampusMap, theme: MapTheme, width: f64, height: f64) -> Self {
		Self {
			map,
			theme,
			selection: Selection::default(),
			fade_t: 0.0,
			width,
			height,
		}
	}

	/// Dispatch a tap at viewport coordinates. A tap on a marker's
	/// hit-region selects it, a tap on the background clears the
	/// selection, and taps outside the viewport are ignored.
	pub fn tap(&mut self, x: f64, y: f64) {
		if x < 0.0 || y < 0.0 || x > self.width || y > self.height {
			return;
		}
		match self.marker_at(x, y) {
			Some(id) => self.selection.select(id),
			None => self.selection.clear(),
		}
	}

	/// Hit-test the marker under (x, y), if any.
	pub fn marker_at(&self, x: f64, y: f64) -> Option<u32> {
		let mut found = None;
		for loc in self.map.locations() {
			let (dx, dy) = (loc.x * self.width - x, loc.y * self.height - y);
			if (dx * dx + dy * dy).sqrt() < self.theme.hit_radius {
				found = Some(loc.id);
			}
		}
		found
	}

	/// Advance the entrance fade. Fire-and-forget; saturates at 1.
	pub fn tick(&mut self, dt: f64) {
		self.fade_t = (self.fade_t + dt).min(self.theme.fade_duration);
	}

	pub fn fade_done(&self) -> bool {
		self.fade_t >= self.theme.fade_duration
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn selection(&self) -> Selection {
		self.selection
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn theme(&self) -> &MapTheme {
		&self.theme
	}

	pub fn subtitle(&self) -> String {
		plan::subtitle(&self.map, self.selection)
	}

	pub fn legend(&self) -> Vec<LegendEntry> {
		plan::legend(&self.map)
	}

	/// Build the draw plan for the current frame.
	pub fn plan(&self) -> DrawPlan {
		plan::build_plan(
			&self.map,
			self.selection,
			self.fade_t / self.theme.fade_duration,
			self.width,
			self.height,
			&self.theme,
		)
	}
}
