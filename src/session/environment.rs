//! Host environment settings with scoped acquisition
//!
//! The host keeps a global ruler-unit preference. All session coordinate
//! math assumes pixels, so a session switches the preference on entry and
//! must restore the caller's original units on every exit path: success,
//! error, or cancellation. `UnitScope` encodes that contract as a drop
//! guard.

/// Measurement units for the host's rulers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulerUnits {
    /// Pixels, required by all coordinate math in a session
    Pixels,
    /// Inches
    Inches,
    /// Centimeters
    Centimeters,
    /// Points
    Points,
    /// Percent of the document size
    Percent,
}

/// Mutable host-environment state a session may temporarily adjust
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    ruler_units: RulerUnits,
}

impl Environment {
    /// Create an environment with the given ruler units
    pub const fn new(ruler_units: RulerUnits) -> Self {
        Self { ruler_units }
    }

    /// Current ruler units
    pub const fn ruler_units(&self) -> RulerUnits {
        self.ruler_units
    }

    /// Change the ruler units
    pub const fn set_ruler_units(&mut self, units: RulerUnits) {
        self.ruler_units = units;
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(RulerUnits::Pixels)
    }
}

/// Guard that forces pixel units until dropped
///
/// Restoration runs unconditionally when the guard goes out of scope,
/// whatever path the session exits through.
#[derive(Debug)]
pub struct UnitScope<'env> {
    environment: &'env mut Environment,
    original: RulerUnits,
}

impl<'env> UnitScope<'env> {
    /// Record the current units and switch the environment to pixels
    pub fn pixels(environment: &'env mut Environment) -> Self {
        let original = environment.ruler_units();
        environment.set_ruler_units(RulerUnits::Pixels);
        Self {
            environment,
            original,
        }
    }
}

impl Drop for UnitScope<'_> {
    fn drop(&mut self) {
        self.environment.set_ruler_units(self.original);
    }
}
