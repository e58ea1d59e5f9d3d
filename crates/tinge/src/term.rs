//! Terminal capability detection.
//!
//! This is the single place in the workspace that inspects the process
//! environment. The result is a plain [`TermProfile`] handed to the
//! rendering core, which treats the flags as opaque facts.
//!
//! Detection is cached for the life of the process: capability does not
//! change under a running program, and probing is not free.

use once_cell::sync::Lazy;
use tinge_render::{AnsiCodec, TermProfile};

static PROFILE: Lazy<TermProfile> = Lazy::new(probe);

/// Whether `COLORTERM` advertises 24-bit color, per the convention
/// terminals actually follow. Windows consoles are assumed capable.
fn true_color_advertised() -> bool {
    if cfg!(windows) {
        return true;
    }
    matches!(
        std::env::var("COLORTERM").as_deref(),
        Ok("truecolor") | Ok("24bit")
    )
}

fn probe() -> TermProfile {
    TermProfile {
        colors: console::colors_enabled(),
        true_color: true_color_advertised(),
    }
}

/// The detected capability profile for the current process.
pub fn detect_profile() -> TermProfile {
    *PROFILE
}

/// A codec bound to the detected capability profile.
pub fn codec() -> AnsiCodec {
    AnsiCodec::new(detect_profile())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_is_stable() {
        // Whatever the environment says, repeated probes agree.
        assert_eq!(detect_profile(), detect_profile());
        assert_eq!(codec().profile(), detect_profile());
    }
}
