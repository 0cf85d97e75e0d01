/// Configuration for the unit parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Whether terms separated only by whitespace are multiplied, as in `N m`
    pub space_multiplies: bool,
}

impl Config {
    /// Creates a new configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            space_multiplies: false,
        }
    }

    /// Returns this configuration with implicit multiplication switched on or off.
    #[must_use]
    pub const fn with_space_multiplies(self, space_multiplies: bool) -> Self {
        Self { space_multiplies }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
