use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Keyword arguments passed through to a plot call.
///
/// Values are arbitrary JSON so a caller can mix numbers, pairs and labels in
/// one mapping, e.g. `json!({"dpi": 300, "cmap": "viridis"})`. Keys iterate in
/// sorted order.
pub type Kwargs = serde_json::Map<String, serde_json::Value>;

/// The recognized option names
///
/// Parsing a kwarg name into an `OptionKey` is the membership check used by
/// both the validating and the updating paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum OptionKey {
    /// Resolution in dots-per-inch
    Dpi,
    /// Figure (width, height)
    Figsize,
    /// X-axis label
    XAxis,
    /// Y-axis label
    YAxis,
    /// Color map name
    Cmap,
    /// Plot title
    Title,
}

/// Every kwarg name a plot call accepts, in declaration order.
///
/// Matches `OptionKey::iter()`.
pub const POSSIBLE_KWARGS: [OptionKey; 6] = [
    OptionKey::Dpi,
    OptionKey::Figsize,
    OptionKey::XAxis,
    OptionKey::YAxis,
    OptionKey::Cmap,
    OptionKey::Title,
];

impl OptionKey {
    /// Whether `name` is one of the recognized kwarg names
    pub fn is_possible_kwarg(name: &str) -> bool {
        name.parse::<OptionKey>().is_ok()
    }
}
