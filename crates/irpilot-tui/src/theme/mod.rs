//! Theme: colors and icon sets

pub mod palette;

/// Icons used for signal badges, switchable for terminals without good
/// unicode coverage (`[ui] unicode_symbols = false`).
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    pub signal: &'static str,
    pub no_signal: &'static str,
    pub recording: &'static str,
}

impl IconSet {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                signal: "●",
                no_signal: "○",
                recording: "◉",
            }
        } else {
            Self {
                signal: "*",
                no_signal: "o",
                recording: "@",
            }
        }
    }
}
