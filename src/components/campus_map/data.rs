//! The static campus dataset. Authored by hand; validated by
//! [`CampusMap::new`] so an inconsistent edit fails at startup.

use super::types::{CampusMap, ConfigurationError, CurrentPosition, Edge, Location, LocationIcon};

const BUILDINGS: &[(u32, &str, LocationIcon, f64, f64)] = &[
	(0, "Academic Block", LocationIcon::Academics, 0.5, 0.12),
	(1, "Library", LocationIcon::Library, 0.15, 0.4),
	(2, "Admin Block", LocationIcon::Admin, 0.85, 0.4),
	(3, "Canteen", LocationIcon::Canteen, 0.3, 0.7),
	(4, "Hostel", LocationIcon::Hostel, 0.1, 0.85),
	(5, "Parking", LocationIcon::Parking, 0.85, 0.12),
	(6, "Sports Ground", LocationIcon::Sports, 0.9, 0.8),
	(7, "Auditorium", LocationIcon::Auditorium, 0.5, 0.45),
	(8, "Main Gate", LocationIcon::Gate, 0.5, 0.92),
	(9, "Placement Cell", LocationIcon::Placement, 0.75, 0.28),
	(10, "Workshop", LocationIcon::Workshop, 0.25, 0.28),
	(11, "Seminar Hall", LocationIcon::Seminar, 0.7, 0.6),
];

const PATHS: &[(u32, u32)] = &[
	(8, 3),
	(3, 4),
	(8, 6),
	(6, 2),
	(4, 1),
	(1, 7),
	(2, 7),
	(3, 7),
	(7, 0),
	(0, 5),
	(2, 5),
	(1, 10),
	(10, 0),
	(0, 9),
	(9, 2),
	(2, 11),
	(11, 6),
	(7, 11),
];

/// Build and validate the campus map.
pub fn campus() -> Result<CampusMap, ConfigurationError> {
	let locations = BUILDINGS
		.iter()
		.map(|&(id, name, icon, x, y)| Location { id, name, icon, x, y })
		.collect();
	let edges = PATHS.iter().map(|&(a, b)| Edge { a, b }).collect();
	let position = CurrentPosition {
		label: "You are here",
		icon: LocationIcon::CurrentPosition,
		x: 0.4,
		y: 0.88,
	};
	CampusMap::new(locations, edges, position)
}
