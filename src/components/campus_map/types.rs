use std::collections::HashMap;

use thiserror::Error;

/// Raised when the static map data is inconsistent. Indicates a
/// data-authoring bug; aborts component init, never surfaces at render time.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigurationError {
	#[error("duplicate location id {0}")]
	DuplicateId(u32),
	#[error("location {id} ({name}) has out-of-range coordinate ({x}, {y})")]
	CoordinateOutOfRange {
		id: u32,
		name: &'static str,
		x: f64,
		y: f64,
	},
	#[error("edge ({a}, {b}) references unknown location id {missing}")]
	UnknownEdgeEndpoint { a: u32, b: u32, missing: u32 },
}

/// Symbolic icon reference, resolved to a glyph by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationIcon {
	Academics,
	Library,
	Admin,
	Canteen,
	Hostel,
	Parking,
	Sports,
	Auditorium,
	Gate,
	Placement,
	Workshop,
	Seminar,
	CurrentPosition,
}

impl LocationIcon {
	pub fn glyph(self) -> &'static str {
		match self {
			Self::Academics => "\u{1F393}",
			Self::Library => "\u{1F4D6}",
			Self::Admin => "\u{1F3E2}",
			Self::Canteen => "\u{1F374}",
			Self::Hostel => "\u{1F6CF}",
			Self::Parking => "\u{1F17F}",
			Self::Sports => "\u{26BD}",
			Self::Auditorium => "\u{1F3AD}",
			Self::Gate => "\u{1F6AA}",
			Self::Placement => "\u{1F4BC}",
			Self::Workshop => "\u{1F527}",
			Self::Seminar => "\u{1F465}",
			Self::CurrentPosition => "\u{1F4CD}",
		}
	}
}

/// A fixed point of interest. Coordinates are fractions of the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
	pub id: u32,
	pub name: &'static str,
	pub icon: LocationIcon,
	pub x: f64,
	pub y: f64,
}

/// Undirected, purely visual connection between two locations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	pub a: u32,
	pub b: u32,
}

impl Edge {
	pub fn touches(&self, id: u32) -> bool {
		self.a == id || self.b == id
	}
}

/// The fixed "you are here" point. Shaped like a location but excluded
/// from the adjacency table and styled separately.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentPosition {
	pub label: &'static str,
	pub icon: LocationIcon,
	pub x: f64,
	pub y: f64,
}

/// Immutable location registry plus adjacency table, validated eagerly
/// at construction. No mutation after `new` succeeds.
#[derive(Clone, Debug, PartialEq)]
pub struct CampusMap {
	locations: Vec<Location>,
	edges: Vec<Edge>,
	position: CurrentPosition,
	by_id: HashMap<u32, usize>,
}

impl CampusMap {
	pub fn new(
		locations: Vec<Location>,
		edges: Vec<Edge>,
		position: CurrentPosition,
	) -> Result<Self, ConfigurationError> {
		let mut by_id = HashMap::with_capacity(locations.len());
		for (i, loc) in locations.iter().enumerate() {
			if by_id.insert(loc.id, i).is_some() {
				return Err(ConfigurationError::DuplicateId(loc.id));
			}
			if !in_unit_range(loc.x) || !in_unit_range(loc.y) {
				return Err(ConfigurationError::CoordinateOutOfRange {
					id: loc.id,
					name: loc.name,
					x: loc.x,
					y: loc.y,
				});
			}
		}
		for edge in &edges {
			for endpoint in [edge.a, edge.b] {
				if !by_id.contains_key(&endpoint) {
					return Err(ConfigurationError::UnknownEdgeEndpoint {
						a: edge.a,
						b: edge.b,
						missing: endpoint,
					});
				}
			}
		}
		Ok(Self {
			locations,
			edges,
			position,
			by_id,
		})
	}

	pub fn locations(&self) -> &[Location] {
		&self.locations
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn position(&self) -> &CurrentPosition {
		&self.position
	}

	pub fn get(&self, id: u32) -> Option<&Location> {
		self.by_id.get(&id).map(|&i| &self.locations[i])
	}
}

fn in_unit_range(v: f64) -> bool {
	v.is_finite() && (0.0..=1.0).contains(&v)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn loc(id: u32, name: &'static str, x: f64, y: f64) -> Location {
		Location {
			id,
			name,
			icon: LocationIcon::Academics,
			x,
			y,
		}
	}

	fn here() -> CurrentPosition {
		CurrentPosition {
			label: "You are here",
			icon: LocationIcon::CurrentPosition,
			x: 0.4,
			y: 0.88,
		}
	}

	#[test]
	fn validates_edge_endpoints() {
		let err = CampusMap::new(
			vec![loc(0, "Library", 0.15, 0.4)],
			vec![Edge { a: 0, b: 7 }],
			here(),
		)
		.unwrap_err();
		assert_eq!(
			err,
			ConfigurationError::UnknownEdgeEndpoint {
				a: 0,
				b: 7,
				missing: 7
			}
		);
	}

	#[test]
	fn rejects_duplicate_ids() {
		let err = CampusMap::new(
			vec![loc(3, "Canteen", 0.3, 0.7), loc(3, "Hostel", 0.1, 0.85)],
			vec![],
			here(),
		)
		.unwrap_err();
		assert_eq!(err, ConfigurationError::DuplicateId(3));
	}

	#[test]
	fn rejects_out_of_range_coordinates() {
		for (x, y) in [(-0.1, 0.5), (0.5, 1.2), (f64::NAN, 0.5)] {
			assert!(matches!(
				CampusMap::new(vec![loc(0, "Library", x, y)], vec![], here()),
				Err(ConfigurationError::CoordinateOutOfRange { id: 0, .. })
			));
		}
	}

	#[test]
	fn corner_coordinates_are_valid() {
		let map = CampusMap::new(
			vec![loc(0, "Gate", 0.0, 0.0), loc(1, "Sports", 1.0, 1.0)],
			vec![Edge { a: 0, b: 1 }],
			here(),
		)
		.unwrap();
		assert_eq!(map.locations().len(), 2);
	}

	#[test]
	fn lookup_by_id() {
		let map = CampusMap::new(
			vec![loc(0, "Library", 0.15, 0.4), loc(1, "Canteen", 0.3, 0.7)],
			vec![Edge { a: 0, b: 1 }],
			here(),
		)
		.unwrap();
		assert_eq!(map.get(1).unwrap().name, "Canteen");
		assert!(map.get(9).is_none());
	}

	#[test]
	fn edge_touches_either_endpoint() {
		let e = Edge { a: 2, b: 7 };
		assert!(e.touches(2));
		assert!(e.touches(7));
		assert!(!e.touches(5));
	}

	#[test]
	fn configuration_errors_are_descriptive() {
		let err = ConfigurationError::UnknownEdgeEndpoint {
			a: 2,
			b: 11,
			missing: 11,
		};
		assert_eq!(
			err.to_string(),
			"edge (2, 11) references unknown location id 11"
		);
	}
}
