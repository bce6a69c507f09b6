// SPDX-License-Identifier: MIT OR Apache-2.0

//! Coordination with progress bars.
//!
//! A progress bar repaints its line in place.  If a log line is written in the middle of that,
//! both end up garbled.  The console therefore runs every write inside
//! [RedrawPause::suspend], which hides the bar, lets the write happen, and draws the bar again.
//!
//! With the `indicatif` feature, `indicatif::ProgressBar` and `indicatif::MultiProgress`
//! implement [RedrawPause] directly:
//!
//! ```ignore
//! let bar = Arc::new(indicatif::ProgressBar::new(100));
//! printer.console_mut().set_progress(bar.clone());
//! ```

use std::fmt::Debug;

pub trait RedrawPause: Debug + Send + Sync {
    /// Runs `write` with redraws paused, resuming them before returning.
    fn suspend(&self, write: &mut dyn FnMut());
}

/// Used when no progress bar is attached.  Runs the write directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoRedraw;

impl RedrawPause for NoRedraw {
    fn suspend(&self, write: &mut dyn FnMut()) {
        write()
    }
}

#[cfg(feature = "indicatif")]
impl RedrawPause for indicatif::ProgressBar {
    fn suspend(&self, write: &mut dyn FnMut()) {
        indicatif::ProgressBar::suspend(self, write)
    }
}

#[cfg(feature = "indicatif")]
impl RedrawPause for indicatif::MultiProgress {
    fn suspend(&self, write: &mut dyn FnMut()) {
        indicatif::MultiProgress::suspend(self, write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_redraw_runs_write() {
        let mut ran = 0;
        NoRedraw.suspend(&mut || ran += 1);
        assert_eq!(ran, 1);
    }
}
