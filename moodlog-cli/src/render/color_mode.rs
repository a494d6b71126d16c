use clap::ValueEnum;
use std::io::{self, IsTerminal};

/// When to paint output with the theme colours.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Colour a terminal unless `NO_COLOR` is set.
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolves the mode against the environment and stdout.
    pub fn enabled(self) -> bool {
        self.resolve(
            std::env::var_os("NO_COLOR").is_some(),
            io::stdout().is_terminal(),
        )
    }

    fn resolve(self, no_color: bool, is_terminal: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => !no_color && is_terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_ignore_environment() {
        assert!(ColorMode::Always.resolve(true, false));
        assert!(!ColorMode::Never.resolve(false, true));
    }

    #[test]
    fn auto_needs_terminal_and_no_opt_out() {
        assert!(ColorMode::Auto.resolve(false, true));
        assert!(!ColorMode::Auto.resolve(true, true));
        assert!(!ColorMode::Auto.resolve(false, false));
    }
}
