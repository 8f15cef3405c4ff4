/// Two-state selection machine: at most one location selected at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
	#[default]
	Unselected,
	Selected(u32),
}

impl Selection {
	/// Tap on a marker. Selecting the already-selected marker is a no-op
	/// re-entry of the same state.
	pub fn select(&mut self, id: u32) {
		*self = Self::Selected(id);
	}

	/// Tap on the background.
	pub fn clear(&mut self) {
		*self = Self::Unselected;
	}

	pub fn selected_id(&self) -> Option<u32> {
		match *self {
			Self::Selected(id) => Some(id),
			Self::Unselected => None,
		}
	}

	pub fn is_selected(&self, id: u32) -> bool {
		*self == Self::Selected(id)
	}
}
