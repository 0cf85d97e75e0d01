use metrum_builtins::RegistryOptions;

/// Configuration for a [`Runtime`](crate::Runtime).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Whether whitespace between unit terms multiplies them, as in `N m`
    pub space_multiplies: bool,
    /// Whether `u` is accepted as the micro prefix, as in `us`
    pub ascii_micro: bool,
}

impl Config {
    /// Creates a new configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            space_multiplies: false,
            ascii_micro: false,
        }
    }

    /// The configuration handed to the parser.
    #[must_use]
    pub const fn parser_config(&self) -> metrum_parser::Config {
        metrum_parser::Config::new().with_space_multiplies(self.space_multiplies)
    }

    /// The options used to build the unit registry.
    #[must_use]
    pub const fn registry_options(&self) -> RegistryOptions {
        RegistryOptions {
            ascii_micro: self.ascii_micro,
        }
    }
}
