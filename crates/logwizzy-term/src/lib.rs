//! logwizzy terminal output: summary presenter, colour theme and spinner.

pub mod spinner;
pub mod summary;
pub mod theme;

pub use spinner::Spinner;
pub use summary::{Summary, View};
pub use theme::Theme;

/// Whether coloured output should be used: the config switch, the
/// `--no-color` flag and the `NO_COLOR` convention must all allow it.
pub fn color_enabled(config_color: bool, no_color_flag: bool) -> bool {
    config_color && !no_color_flag && std::env::var_os("NO_COLOR").is_none()
}
