//! # spike-plots
//!
//! Shared option handling for the spike analysis plotting types.
//!
//! ## Overview
//!
//! Every plot type carries the same small set of display options: figure
//! resolution (`dpi`), figure size (`figsize`), axis labels (`x_axis`,
//! `y_axis`), a `title` and a color map name (`cmap`). This crate stores those
//! options in [`BasePlotOptions`] and updates them from the keyword arguments
//! passed to a plot call.
//!
//! ## Basic Usage
//!
//! ```rust
//! use serde_json::json;
//! use spike_plots::{BasePlotOptions, PlotError};
//!
//! let mut options = BasePlotOptions::default();
//!
//! // Unknown names are rejected by the check...
//! let kwargs = json!({"dpi": 300, "color": "red"});
//! let kwargs = kwargs.as_object().unwrap();
//! assert_eq!(
//!     options.check_kwargs(kwargs),
//!     Err(PlotError::unknown_option("color"))
//! );
//!
//! // ...and skipped by the update.
//! options.set_kwargs(kwargs);
//! assert_eq!(options.dpi, 300);
//! ```
//!
//! ## Architecture
//!
//! - `options`: the option store, the recognized kwarg names and the
//!   `PlotOptions` trait for plot types that embed a store
//! - `error`: `PlotError` for rejected kwargs

pub mod error;
pub mod options;

#[cfg(test)]
mod error_tests;

pub use error::{PlotError, Result as PlotResult};
pub use options::{
    BasePlotOptions, BasePlotOptionsBuilder, FigSize, Kwargs, OptionKey, POSSIBLE_KWARGS,
    PlotOptions,
};
