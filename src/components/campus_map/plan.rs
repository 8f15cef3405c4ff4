//! Pure draw-plan construction. Everything here is a total function of its
//! arguments so a render pass can be compared and tested without a canvas.

use super::selection::Selection;
use super::theme::MapTheme;
use super::types::CampusMap;

pub fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// One visual primitive, in paint order. Coordinates are absolute pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
	GridLine {
		x1: f64,
		y1: f64,
		x2: f64,
		y2: f64,
	},
	Path {
		x1: f64,
		y1: f64,
		x2: f64,
		y2: f64,
		highlighted: bool,
	},
	Marker {
		id: u32,
		x: f64,
		y: f64,
		active: bool,
		glyph: &'static str,
		label: &'static str,
	},
	/// Always last; `alpha` is the entrance-fade progress in [0, 1].
	Position {
		x: f64,
		y: f64,
		alpha: f64,
		glyph: &'static str,
		label: &'static str,
	},
}

/// The complete, order-sensitive output of one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawPlan {
	pub primitives: Vec<Primitive>,
}

/// Build the draw plan for one frame: grid, paths, markers, then the
/// current-position marker on top.
pub fn build_plan(
	map: &CampusMap,
	selection: Selection,
	fade_alpha: f64,
	width: f64,
	height: f64,
	theme: &MapTheme,
) -> DrawPlan {
	let mut primitives = Vec::new();

	// Subtle blueprint grid, vertical lines then horizontal.
	let spacing = theme.grid_spacing;
	for x in 0..=(width / spacing) as u32 {
		let px = f64::from(x) * spacing;
		primitives.push(Primitive::GridLine {
			x1: px,
			y1: 0.0,
			x2: px,
			y2: height,
		});
	}
	for y in 0..=(height / spacing) as u32 {
		let py = f64::from(y) * spacing;
		primitives.push(Primitive::GridLine {
			x1: 0.0,
			y1: py,
			x2: width,
			y2: py,
		});
	}

	for edge in map.edges() {
		// Endpoints are guaranteed by CampusMap::new.
		let (Some(a), Some(b)) = (map.get(edge.a), map.get(edge.b)) else {
			continue;
		};
		let highlighted = selection
			.selected_id()
			.is_some_and(|id| edge.touches(id));
		primitives.push(Primitive::Path {
			x1: a.x * width,
			y1: a.y * height,
			x2: b.x * width,
			y2: b.y * height,
			highlighted,
		});
	}

	for loc in map.locations() {
		primitives.push(Primitive::Marker {
			id: loc.id,
			x: loc.x * width,
			y: loc.y * height,
			active: selection.is_selected(loc.id),
			glyph: loc.icon.glyph(),
			label: loc.name,
		});
	}

	let pos = map.position();
	primitives.push(Primitive::Position {
		x: pos.x * width,
		y: pos.y * height,
		alpha: ease_out_cubic(fade_alpha.clamp(0.0, 1.0)),
		glyph: pos.icon.glyph(),
		label: pos.label,
	});

	DrawPlan { primitives }
}

/// One row of the legend below the map.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
	pub glyph: &'static str,
	pub name: &'static str,
	pub is_position: bool,
}

/// Derived display list: all locations plus the current-position marker.
pub fn legend(map: &CampusMap) -> Vec<LegendEntry> {
	let mut entries: Vec<LegendEntry> = map
		.locations()
		.iter()
		.map(|loc| LegendEntry {
			glyph: loc.icon.glyph(),
			name: loc.name,
			is_position: false,
		})
		.collect();
	entries.push(LegendEntry {
		glyph: map.position().icon.glyph(),
		name: map.position().label,
		is_position: true,
	});
	entries
}

/// Subtitle line under the screen heading, derived from the selection.
pub fn subtitle(map: &CampusMap, selection: Selection) -> String {
	match selection.selected_id().and_then(|id| map.get(id)) {
		Some(loc) => format!("Showing paths for {}", loc.name),
		None => "Tap a building to see connections".to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::campus_map::types::{
		CurrentPosition, Edge, Location, LocationIcon,
	};

	fn sample_map() -> CampusMap {
		CampusMap::new(
			vec![
				Location {
					id: 0,
					name: "Library",
					icon: LocationIcon::Library,
					x: 0.15,
					y: 0.4,
				},
				Location {
					id: 1,
					name: "Canteen",
					icon: LocationIcon::Canteen,
					x: 0.3,
					y: 0.7,
				},
			],
			vec![Edge { a: 0, b: 1 }],
			CurrentPosition {
				label: "You are here",
				icon: LocationIcon::CurrentPosition,
				x: 0.4,
				y: 0.88,
			},
		)
		.unwrap()
	}

	fn paths(plan: &DrawPlan) -> Vec<&Primitive> {
		plan.primitives
			.iter()
			.filter(|p| matches!(p, Primitive::Path { .. }))
			.collect()
	}

	fn marker(plan: &DrawPlan, want: u32) -> &Primitive {
		plan.primitives
			.iter()
			.find(|p| matches!(p, Primitive::Marker { id, .. } if *id == want))
			.unwrap()
	}

	#[test]
	fn plan_is_a_pure_function_of_its_inputs() {
		let map = sample_map();
		let theme = MapTheme::default();
		let a = build_plan(&map, Selection::Selected(0), 0.5, 800.0, 600.0, &theme);
		let b = build_plan(&map, Selection::Selected(0), 0.5, 800.0, 600.0, &theme);
		assert_eq!(a, b);
	}

	#[test]
	fn primitives_are_ordered_grid_paths_markers_position() {
		let map = sample_map();
		let plan = build_plan(
			&map,
			Selection::Unselected,
			1.0,
			800.0,
			600.0,
			&MapTheme::default(),
		);
		let order: Vec<u8> = plan
			.primitives
			.iter()
			.map(|p| match p {
				Primitive::GridLine { .. } => 0,
				Primitive::Path { .. } => 1,
				Primitive::Marker { .. } => 2,
				Primitive::Position { .. } => 3,
			})
			.collect();
		let mut sorted = order.clone();
		sorted.sort_unstable();
		assert_eq!(order, sorted);
		assert!(matches!(
			plan.primitives.last(),
			Some(Primitive::Position { .. })
		));
	}

	#[test]
	fn selection_scenario_highlights_and_reverts() {
		let map = sample_map();
		let theme = MapTheme::default();

		// Unselected: edge neutral, both markers default.
		let plan = build_plan(&map, Selection::Unselected, 1.0, 800.0, 600.0, &theme);
		assert!(matches!(
			paths(&plan)[0],
			Primitive::Path {
				highlighted: false,
				..
			}
		));
		assert!(matches!(marker(&plan, 0), Primitive::Marker { active: false, .. }));

		// Tap marker 0: edge highlighted, marker 0 active, marker 1 unchanged.
		let plan = build_plan(&map, Selection::Selected(0), 1.0, 800.0, 600.0, &theme);
		assert!(matches!(
			paths(&plan)[0],
			Primitive::Path {
				highlighted: true,
				..
			}
		));
		assert!(matches!(marker(&plan, 0), Primitive::Marker { active: true, .. }));
		assert!(matches!(marker(&plan, 1), Primitive::Marker { active: false, .. }));

		// Background tap: everything reverts.
		let plan = build_plan(&map, Selection::Unselected, 1.0, 800.0, 600.0, &theme);
		assert!(matches!(
			paths(&plan)[0],
			Primitive::Path {
				highlighted: false,
				..
			}
		));
	}

	#[test]
	fn corner_locations_map_to_exact_corner_pixels() {
		let map = CampusMap::new(
			vec![
				Location {
					id: 0,
					name: "Origin",
					icon: LocationIcon::Gate,
					x: 0.0,
					y: 0.0,
				},
				Location {
					id: 1,
					name: "Far",
					icon: LocationIcon::Sports,
					x: 1.0,
					y: 1.0,
				},
			],
			vec![],
			CurrentPosition {
				label: "You are here",
				icon: LocationIcon::CurrentPosition,
				x: 0.5,
				y: 0.5,
			},
		)
		.unwrap();
		let plan = build_plan(
			&map,
			Selection::Unselected,
			1.0,
			800.0,
			600.0,
			&MapTheme::default(),
		);
		match marker(&plan, 0) {
			Primitive::Marker { x, y, .. } => assert_eq!((*x, *y), (0.0, 0.0)),
			_ => unreachable!(),
		}
		match marker(&plan, 1) {
			Primitive::Marker { x, y, .. } => assert_eq!((*x, *y), (800.0, 600.0)),
			_ => unreachable!(),
		}
	}

	#[test]
	fn fade_alpha_is_clamped_and_eased() {
		let map = sample_map();
		let theme = MapTheme::default();
		for (input, want) in [(-1.0, 0.0), (0.0, 0.0), (1.0, 1.0), (2.5, 1.0)] {
			let plan = build_plan(&map, Selection::Unselected, input, 800.0, 600.0, &theme);
			match plan.primitives.last().unwrap() {
				Primitive::Position { alpha, .. } => assert_eq!(*alpha, want),
				_ => unreachable!(),
			}
		}
	}

	#[test]
	fn legend_lists_locations_then_position() {
		let map = sample_map();
		let entries = legend(&map);
		assert_eq!(entries.len(), 3);
		assert_eq!(entries[0].name, "Library");
		assert_eq!(entries[1].name, "Canteen");
		assert!(entries[2].is_position);
		assert_eq!(entries[2].name, "You are here");
	}

	#[test]
	fn subtitle_follows_selection() {
		let map = sample_map();
		assert_eq!(
			subtitle(&map, Selection::Unselected),
			"Tap a building to see connections"
		);
		assert_eq!(
			subtitle(&map, Selection::Selected(1)),
			"Showing paths for Canteen"
		);
	}
}
