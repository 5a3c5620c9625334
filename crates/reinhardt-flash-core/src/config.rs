//! Presentation settings for rendered flash messages
//!
//! Configuration is an immutable [`FlashConfig`] value, built with
//! [`FlashConfigBuilder`] or loaded from a settings file. It is never stored
//! in the session.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_flash_core::{FlashConfig, FlashType};
//!
//! let config = FlashConfig::builder()
//!     .close_button("<button type='button' class='close'>&times;</button>")
//!     .class_for(FlashType::Error, "alert-error")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.class_for(FlashType::Error), "alert-error");
//! assert_eq!(config.class_for(FlashType::Info), "alert-info");
//! ```

use crate::error::{FlashError, FlashResult};
use crate::kind::FlashType;
use crate::template::WrapperTemplate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Rendering configuration
///
/// Deserializable with every field optional, so it can be embedded in a
/// project settings file:
///
/// ```toml
/// wrapper = "<div class='%s' role='alert'>%s</div>\n"
/// close_button = "<button class='close'>&times;</button>"
///
/// [class_map]
/// error = "alert-error"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashConfig {
	wrapper: WrapperTemplate,
	before: String,
	after: String,
	close_button: String,
	sticky_class: String,
	message_class: String,
	#[serde(deserialize_with = "merge_class_map")]
	class_map: BTreeMap<FlashType, String>,
	#[serde(deserialize_with = "priority_order")]
	display_order: Vec<FlashType>,
}

impl FlashConfig {
	/// Start building a configuration from the defaults
	pub fn builder() -> FlashConfigBuilder {
		FlashConfigBuilder::new()
	}

	/// Load a configuration from TOML
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash_core::{FlashConfig, FlashType};
	///
	/// let config = FlashConfig::from_toml_str(r#"
	///     sticky_class = "pinned"
	///
	///     [class_map]
	///     w = "alert-caution"
	/// "#).unwrap();
	///
	/// assert_eq!(config.sticky_class(), "pinned");
	/// assert_eq!(config.class_for(FlashType::Warning), "alert-caution");
	/// assert_eq!(config.class_for(FlashType::Success), "alert-success");
	/// ```
	pub fn from_toml_str(source: &str) -> FlashResult<Self> {
		let config: FlashConfig = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	/// Check invariants that the type system does not enforce
	pub fn validate(&self) -> FlashResult<()> {
		let covers_every_type = self.display_order.len() == FlashType::DISPLAY_ORDER.len()
			&& FlashType::DISPLAY_ORDER
				.iter()
				.all(|kind| self.display_order.contains(kind));
		if !covers_every_type {
			return Err(FlashError::InvalidConfig(format!(
				"display order must list every message type once, got {:?}",
				self.display_order
			)));
		}
		Ok(())
	}

	pub fn wrapper(&self) -> &WrapperTemplate {
		&self.wrapper
	}

	/// Markup placed before each message text, inside the wrapper
	pub fn before(&self) -> &str {
		&self.before
	}

	/// Markup placed after each message text, inside the wrapper
	pub fn after(&self) -> &str {
		&self.after
	}

	/// Close-button markup prepended to non-sticky messages
	pub fn close_button(&self) -> &str {
		&self.close_button
	}

	pub fn sticky_class(&self) -> &str {
		&self.sticky_class
	}

	/// Base CSS class applied to every message
	pub fn message_class(&self) -> &str {
		&self.message_class
	}

	/// Per-type CSS class
	pub fn class_for(&self, kind: FlashType) -> &str {
		self.class_map.get(&kind).map(String::as_str).unwrap_or_default()
	}

	pub fn class_map(&self) -> &BTreeMap<FlashType, String> {
		&self.class_map
	}

	/// Order used when every type is displayed
	///
	/// Always lists all four types exactly once.
	pub fn display_order(&self) -> &[FlashType] {
		&self.display_order
	}
}

impl Default for FlashConfig {
	fn default() -> Self {
		Self {
			wrapper: WrapperTemplate::default(),
			before: String::new(),
			after: String::new(),
			close_button: String::new(),
			sticky_class: "sticky".to_string(),
			message_class: "alert dismissable".to_string(),
			class_map: default_class_map(),
			display_order: FlashType::DISPLAY_ORDER.to_vec(),
		}
	}
}

fn default_class_map() -> BTreeMap<FlashType, String> {
	BTreeMap::from([
		(FlashType::Info, "alert-info".to_string()),
		(FlashType::Success, "alert-success".to_string()),
		(FlashType::Warning, "alert-warning".to_string()),
		(FlashType::Error, "alert-danger".to_string()),
	])
}

// A partial class map in a settings file overrides only the types it names.
fn merge_class_map<'de, D>(deserializer: D) -> Result<BTreeMap<FlashType, String>, D::Error>
where
	D: Deserializer<'de>,
{
	let overrides = BTreeMap::<String, String>::deserialize(deserializer)?;
	let mut map = default_class_map();
	for (key, class) in overrides {
		let kind = FlashType::lookup(&key).ok_or_else(|| {
			serde::de::Error::custom(format!("unknown flash message type `{key}` in class map"))
		})?;
		map.insert(kind, class);
	}
	Ok(map)
}

/// Expand a priority list into a full display order
///
/// Duplicates are dropped and types the list omits follow in canonical order.
///
/// # Examples
///
/// ```
/// use reinhardt_flash_core::FlashType;
/// use reinhardt_flash_core::config::complete_display_order;
///
/// assert_eq!(
///     complete_display_order([FlashType::Info, FlashType::Error, FlashType::Info]),
///     vec![FlashType::Info, FlashType::Error, FlashType::Warning, FlashType::Success]
/// );
/// ```
pub fn complete_display_order(priority: impl IntoIterator<Item = FlashType>) -> Vec<FlashType> {
	let mut order = Vec::with_capacity(FlashType::DISPLAY_ORDER.len());
	for kind in priority.into_iter().chain(FlashType::DISPLAY_ORDER) {
		if !order.contains(&kind) {
			order.push(kind);
		}
	}
	order
}

fn priority_order<'de, D>(deserializer: D) -> Result<Vec<FlashType>, D::Error>
where
	D: Deserializer<'de>,
{
	Vec::<FlashType>::deserialize(deserializer).map(complete_display_order)
}

/// Fluent builder for [`FlashConfig`]
///
/// # Examples
///
/// ```
/// use reinhardt_flash_core::{FlashConfig, FlashType};
///
/// let config = FlashConfig::builder()
///     .wrapper("<li class='%s'>%s</li>")
///     .message_class("flash")
///     .class_map([("success", "flash-ok"), ("error", "flash-bad")])
///     .build()
///     .unwrap();
///
/// assert_eq!(config.message_class(), "flash");
/// assert_eq!(config.class_for(FlashType::Success), "flash-ok");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlashConfigBuilder {
	config: FlashConfig,
	wrapper: Option<String>,
}

impl FlashConfigBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the wrapper template (two `%s` slots: class, then body)
	pub fn wrapper(mut self, wrapper: impl Into<String>) -> Self {
		self.wrapper = Some(wrapper.into());
		self
	}

	pub fn before(mut self, before: impl Into<String>) -> Self {
		self.config.before = before.into();
		self
	}

	pub fn after(mut self, after: impl Into<String>) -> Self {
		self.config.after = after.into();
		self
	}

	pub fn close_button(mut self, close_button: impl Into<String>) -> Self {
		self.config.close_button = close_button.into();
		self
	}

	pub fn sticky_class(mut self, sticky_class: impl Into<String>) -> Self {
		self.config.sticky_class = sticky_class.into();
		self
	}

	pub fn message_class(mut self, message_class: impl Into<String>) -> Self {
		self.config.message_class = message_class.into();
		self
	}

	/// Set the CSS class for a single type
	pub fn class_for(mut self, kind: impl Into<FlashType>, class: impl Into<String>) -> Self {
		self.config.class_map.insert(kind.into(), class.into());
		self
	}

	/// Merge several type/class pairs into the class map
	pub fn class_map<I, K, V>(mut self, entries: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<FlashType>,
		V: Into<String>,
	{
		self.config.class_map.extend(
			entries
				.into_iter()
				.map(|(kind, class)| (kind.into(), class.into())),
		);
		self
	}

	/// Set the priority used when every type is displayed
	///
	/// Types left out are still displayed, after the listed ones.
	pub fn display_order(mut self, order: impl IntoIterator<Item = FlashType>) -> Self {
		self.config.display_order = complete_display_order(order);
		self
	}

	/// Validate and produce the configuration
	pub fn build(self) -> FlashResult<FlashConfig> {
		let mut config = self.config;
		if let Some(wrapper) = self.wrapper {
			config.wrapper = WrapperTemplate::new(wrapper)?;
		}
		config.validate()?;
		Ok(config)
	}
}
