//! Type selection for display and clear operations

use crate::kind::FlashType;

/// Which message types a display or clear operation visits, and in what order
///
/// Conversions from strings use [`FlashType::lookup`]: only the first
/// character matters, case-insensitively, and names that match no type are
/// skipped rather than replaced with the default type.
///
/// # Examples
///
/// ```
/// use reinhardt_flash_core::{FlashType, TypeSelection};
///
/// let all = TypeSelection::from(None::<FlashType>);
/// assert_eq!(all, TypeSelection::All);
///
/// let ordered = TypeSelection::from(["warning", "i"]);
/// assert_eq!(
///     ordered.resolve(&FlashType::DISPLAY_ORDER),
///     vec![FlashType::Warning, FlashType::Info]
/// );
///
/// // An empty list means every type
/// let empty: Vec<&str> = Vec::new();
/// assert_eq!(TypeSelection::from(empty), TypeSelection::All);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeSelection {
	/// Every type, in the configured display order
	#[default]
	All,
	/// A single type
	Only(FlashType),
	/// Exactly these types, in this order (may be empty)
	Ordered(Vec<FlashType>),
}

impl TypeSelection {
	/// Build a selection from type names
	///
	/// An empty input selects every type; a non-empty input whose names all
	/// fail to resolve selects nothing.
	pub fn from_names<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut seen_any = false;
		let kinds: Vec<FlashType> = names
			.into_iter()
			.inspect(|_| seen_any = true)
			.filter_map(|name| FlashType::lookup(name.as_ref()))
			.collect();
		if seen_any {
			Self::Ordered(kinds)
		} else {
			Self::All
		}
	}

	/// The types to visit, in order
	pub fn resolve(&self, display_order: &[FlashType]) -> Vec<FlashType> {
		match self {
			Self::All => display_order.to_vec(),
			Self::Only(kind) => vec![*kind],
			Self::Ordered(kinds) => kinds.clone(),
		}
	}

	pub fn is_all(&self) -> bool {
		matches!(self, Self::All)
	}
}

impl From<FlashType> for TypeSelection {
	fn from(kind: FlashType) -> Self {
		Self::Only(kind)
	}
}

impl From<Option<FlashType>> for TypeSelection {
	fn from(kind: Option<FlashType>) -> Self {
		kind.map_or(Self::All, Self::Only)
	}
}

impl From<&str> for TypeSelection {
	fn from(name: &str) -> Self {
		if name.is_empty() {
			return Self::All;
		}
		match FlashType::lookup(name) {
			Some(kind) => Self::Only(kind),
			None => Self::Ordered(Vec::new()),
		}
	}
}

impl From<Vec<FlashType>> for TypeSelection {
	fn from(kinds: Vec<FlashType>) -> Self {
		if kinds.is_empty() {
			Self::All
		} else {
			Self::Ordered(kinds)
		}
	}
}

impl From<&[FlashType]> for TypeSelection {
	fn from(kinds: &[FlashType]) -> Self {
		Self::from(kinds.to_vec())
	}
}

impl<const N: usize> From<[FlashType; N]> for TypeSelection {
	fn from(kinds: [FlashType; N]) -> Self {
		Self::from(kinds.to_vec())
	}
}

impl From<Vec<&str>> for TypeSelection {
	fn from(names: Vec<&str>) -> Self {
		Self::from_names(names)
	}
}

impl From<&[&str]> for TypeSelection {
	fn from(names: &[&str]) -> Self {
		Self::from_names(names)
	}
}

impl<const N: usize> From<[&str; N]> for TypeSelection {
	fn from(names: [&str; N]) -> Self {
		Self::from_names(names)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_all_uses_display_order() {
		let order = [FlashType::Info, FlashType::Error];
		assert_eq!(TypeSelection::All.resolve(&order), order.to_vec());
	}

	#[rstest]
	#[case("w", TypeSelection::Only(FlashType::Warning))]
	#[case("Warning", TypeSelection::Only(FlashType::Warning))]
	#[case("ERROR", TypeSelection::Only(FlashType::Error))]
	#[case("", TypeSelection::All)]
	#[case("x", TypeSelection::Ordered(Vec::new()))]
	fn test_from_single_name(#[case] name: &str, #[case] expected: TypeSelection) {
		assert_eq!(TypeSelection::from(name), expected);
	}

	#[rstest]
	fn test_names_keep_given_order() {
		let selection = TypeSelection::from(vec!["info", "success", "error"]);
		assert_eq!(
			selection.resolve(&FlashType::DISPLAY_ORDER),
			vec![FlashType::Info, FlashType::Success, FlashType::Error]
		);
	}

	#[rstest]
	fn test_unknown_names_are_skipped() {
		let selection = TypeSelection::from(["x", "w", ""]);
		assert_eq!(selection, TypeSelection::Ordered(vec![FlashType::Warning]));
	}

	#[rstest]
	fn test_only_unknown_names_select_nothing() {
		let selection = TypeSelection::from(["x", "z"]);
		assert!(selection.resolve(&FlashType::DISPLAY_ORDER).is_empty());
	}

	#[rstest]
	fn test_empty_type_list_selects_all() {
		assert!(TypeSelection::from(Vec::<FlashType>::new()).is_all());
		assert!(TypeSelection::from(Option::<FlashType>::None).is_all());
	}
}
