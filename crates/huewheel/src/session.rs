//! The current palette of an interactive front end.
//!
//! A session owns one generator and at most one palette. Each
//! [`regenerate`](PaletteSession::regenerate) either replaces the palette
//! wholesale or, on a [`FormatError`], leaves the previous one in place.

use huewheel_color::FormatError;
use tracing::warn;

use crate::palette::{GenerateOptions, Palette, PaletteGenerator, Strategy};
use crate::random::RandomSource;

pub struct PaletteSession<R> {
    generator: PaletteGenerator<R>,
    current: Option<Palette>,
}

impl<R: RandomSource> PaletteSession<R> {
    pub fn new(generator: PaletteGenerator<R>) -> Self {
        Self {
            generator,
            current: None,
        }
    }

    /// The palette on display, if any generation has succeeded yet.
    pub fn current(&self) -> Option<&Palette> {
        self.current.as_ref()
    }

    /// Generates a new palette and makes it current.
    pub fn regenerate(
        &mut self,
        strategy: Strategy,
        options: &GenerateOptions,
    ) -> Result<&Palette, FormatError> {
        match self.generator.generate(strategy, options) {
            Ok(palette) => Ok(self.current.insert(palette)),
            Err(err) => {
                warn!(%strategy, error = %err, "generation failed, keeping current palette");
                Err(err)
            }
        }
    }
}
