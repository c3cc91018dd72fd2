use crate::error::{PlotError, Result};
use crate::options::kwargs::{Kwargs, OptionKey, POSSIBLE_KWARGS};
use derive_builder::Builder;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Figure size as (width, height)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FigSize(pub f64, pub f64);

impl FigSize {
    pub fn width(&self) -> f64 {
        self.0
    }

    pub fn height(&self) -> f64 {
        self.1
    }

    fn is_positive(&self) -> bool {
        self.0.is_finite() && self.1.is_finite() && self.0 > 0.0 && self.1 > 0.0
    }
}

impl Default for FigSize {
    fn default() -> Self {
        Self(10.0, 8.0)
    }
}

impl From<(f64, f64)> for FigSize {
    fn from((width, height): (f64, f64)) -> Self {
        Self(width, height)
    }
}

/// Base plot options shared by every plotting type
///
/// Holds the figure resolution and size, the axis labels, the title and the
/// color map name. Plot types keep one of these and update it from the
/// kwargs passed to each plot call.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use spike_plots::options::BasePlotOptions;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut base = BasePlotOptions::new()
///     .dpi(300u32)
///     .title("Raster")
///     .build()?;
///
/// let kwargs = json!({"cmap": "viridis"});
/// base.configure(kwargs.as_object().unwrap())?;
/// assert_eq!(base.cmap.as_deref(), Some("viridis"));
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[builder(setter(into, strip_option), default)]
#[serde(default)]
pub struct BasePlotOptions {
    /// Resolution in dots-per-inch
    #[builder(default = "800")]
    pub dpi: u32,

    /// Figure (width, height)
    #[builder(default = "FigSize::default()")]
    pub figsize: FigSize,

    /// X-axis label
    ///
    /// The builder setter only sets a label; use
    /// [`BasePlotOptionsBuilder::without_x_axis`] to build without one.
    #[builder(default = "Some(\"Time (s)\".to_string())")]
    pub x_axis: Option<String>,

    /// Y-axis label
    pub y_axis: Option<String>,

    /// Plot title
    pub title: Option<String>,

    /// Color map name
    pub cmap: Option<String>,
}

impl Default for BasePlotOptions {
    fn default() -> Self {
        Self {
            dpi: 800,
            figsize: FigSize::default(),
            x_axis: Some("Time (s)".to_string()),
            y_axis: None,
            title: None,
            cmap: None,
        }
    }
}

impl BasePlotOptions {
    /// Create a new builder for BasePlotOptions
    pub fn new() -> BasePlotOptionsBuilder {
        BasePlotOptionsBuilder::default()
    }

    /// Check that every kwarg name is a recognized option
    ///
    /// Only the names are checked, never the values. Fails on the first
    /// unrecognized name and leaves the options untouched either way.
    pub fn check_kwargs(&self, kwargs: &Kwargs) -> Result<()> {
        match kwargs.keys().find(|name| !OptionKey::is_possible_kwarg(name)) {
            Some(name) => Err(PlotError::unknown_option(name.as_str())),
            None => Ok(()),
        }
    }

    /// Overwrite the options named in `kwargs`
    ///
    /// Unrecognized names are ignored rather than rejected. A recognized
    /// option whose value does not fit its field is skipped with a warning and
    /// keeps its previous value. `dpi` takes a positive whole number, written
    /// either as an integer or as a whole-valued float such as `300.0`.
    pub fn set_kwargs(&mut self, kwargs: &Kwargs) -> &mut Self {
        for (name, value) in kwargs {
            let Ok(key) = name.parse::<OptionKey>() else {
                debug!(kwarg = %name, "ignoring unrecognized kwarg");
                continue;
            };
            match self.set_option(key, value) {
                Ok(()) => debug!(kwarg = %key, %value, "set plot option"),
                Err(e) => warn!(kwarg = %key, %value, error = %e, "skipping unusable kwarg value"),
            }
        }
        self
    }

    /// Check `kwargs` and, only if every name is recognized, apply them
    pub fn configure(&mut self, kwargs: &Kwargs) -> Result<&mut Self> {
        self.check_kwargs(kwargs)?;
        Ok(self.set_kwargs(kwargs))
    }

    /// Current value of a single option
    pub fn get(&self, key: OptionKey) -> Value {
        let label = |s: &Option<String>| s.clone().map_or(Value::Null, Value::String);
        match key {
            OptionKey::Dpi => Value::from(self.dpi),
            OptionKey::Figsize => Value::from(vec![self.figsize.0, self.figsize.1]),
            OptionKey::XAxis => label(&self.x_axis),
            OptionKey::YAxis => label(&self.y_axis),
            OptionKey::Cmap => label(&self.cmap),
            OptionKey::Title => label(&self.title),
        }
    }

    /// All current values as kwargs, keyed by option name
    pub fn to_kwargs(&self) -> Kwargs {
        POSSIBLE_KWARGS
            .iter()
            .map(|key| (key.to_string(), self.get(*key)))
            .collect()
    }

    fn set_option(&mut self, key: OptionKey, value: &Value) -> serde_json::Result<()> {
        match key {
            OptionKey::Dpi => {
                let dpi = f64::deserialize(value)?;
                if dpi.fract() != 0.0 || dpi < 1.0 || dpi > f64::from(u32::MAX) {
                    return Err(serde_json::Error::custom(
                        "dpi must be a positive whole number",
                    ));
                }
                self.dpi = dpi as u32;
            }
            OptionKey::Figsize => {
                let figsize = FigSize::deserialize(value)?;
                if !figsize.is_positive() {
                    return Err(serde_json::Error::custom(
                        "figsize width and height must be positive",
                    ));
                }
                self.figsize = figsize;
            }
            OptionKey::XAxis => self.x_axis = Option::<String>::deserialize(value)?,
            OptionKey::YAxis => self.y_axis = Option::<String>::deserialize(value)?,
            OptionKey::Cmap => self.cmap = Option::<String>::deserialize(value)?,
            OptionKey::Title => self.title = Option::<String>::deserialize(value)?,
        }
        Ok(())
    }
}

impl BasePlotOptionsBuilder {
    /// Build with no x-axis label instead of the "Time (s)" default
    pub fn without_x_axis(&mut self) -> &mut Self {
        self.x_axis = Some(None);
        self
    }
}
