pub mod base;
pub mod kwargs;

pub use base::{BasePlotOptions, BasePlotOptionsBuilder, FigSize};
pub use kwargs::{Kwargs, OptionKey, POSSIBLE_KWARGS};

use crate::error::Result;

/// Trait for plot options types
///
/// Plotting types that embed a `BasePlotOptions` implement this to get the
/// kwarg handling for free.
pub trait PlotOptions {
    /// Get a reference to the base plot options
    fn base(&self) -> &BasePlotOptions;

    /// Get a mutable reference to the base plot options
    fn base_mut(&mut self) -> &mut BasePlotOptions;

    /// Reject kwargs that name an unrecognized option
    fn check_kwargs(&self, kwargs: &Kwargs) -> Result<()> {
        self.base().check_kwargs(kwargs)
    }

    /// Apply recognized kwargs, ignoring the rest
    fn set_kwargs(&mut self, kwargs: &Kwargs) {
        self.base_mut().set_kwargs(kwargs);
    }

    /// Check, then apply, the kwargs of a plot call
    fn configure(&mut self, kwargs: &Kwargs) -> Result<()> {
        self.base_mut().configure(kwargs).map(|_| ())
    }
}

impl PlotOptions for BasePlotOptions {
    fn base(&self) -> &BasePlotOptions {
        self
    }

    fn base_mut(&mut self) -> &mut BasePlotOptions {
        self
    }
}
