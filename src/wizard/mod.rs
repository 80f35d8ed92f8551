use std::time::{Duration, Instant};

use thiserror::Error;

use crate::estimate::Estimate;
use crate::vision::{DecodedImage, UploadedImage};

/// Minimum time the Loading step is shown. Purely cosmetic (analysis is far
/// faster than this), but the pause is part of the interaction design, so it
/// is enforced server-side rather than left to the browser.
pub const MIN_LOADING_PAUSE: Duration = Duration::from_millis(1500);

/// The four wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Upload,
    Preview,
    Loading,
    Result,
}

/// Raised when a caller drives the wizard out of order. The app never shows
/// this to the user; it redirects to the page matching the real state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot move from {from:?} to {to:?}")]
pub struct TransitionError {
    pub from: WizardState,
    pub to: WizardState,
}

/// One user's pass through the wizard.
///
/// Holds the single in-flight upload, its decoded raster, the instant the
/// Loading step was entered, and the estimate computed on entry into Result.
/// Transitions are strictly forward; the only backward edges are the explicit
/// `reset` from Result and the internal-failure `abort`.
#[derive(Debug)]
pub struct Session {
    state: WizardState,
    upload: Option<UploadedImage>,
    photo: Option<DecodedImage>,
    loading_since: Option<Instant>,
    estimate: Option<Estimate>,
}

impl Session {
    pub fn new() -> Session {
        Session {
            state: WizardState::Upload,
            upload: None,
            photo: None,
            loading_since: None,
            estimate: None,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn upload(&self) -> Option<&UploadedImage> {
        self.upload.as_ref()
    }

    pub fn photo(&self) -> Option<&DecodedImage> {
        self.photo.as_ref()
    }

    pub fn estimate(&self) -> Option<&Estimate> {
        self.estimate.as_ref()
    }

    /// Upload → Preview. The pair must come from one successful validation;
    /// `DecodedImage` can only be produced that way, so storing both keeps
    /// the "no decoded raster without a validated upload" invariant.
    pub fn accept_upload(
        &mut self,
        upload: UploadedImage,
        photo: DecodedImage,
    ) -> Result<(), TransitionError> {
        self.expect(WizardState::Upload, WizardState::Preview)?;
        self.upload = Some(upload);
        self.photo = Some(photo);
        self.state = WizardState::Preview;
        Ok(())
    }

    /// Preview → Loading, the explicit "Prediksi" confirmation. Records the
    /// entry instant so the minimum pause can be enforced.
    pub fn confirm(&mut self) -> Result<(), TransitionError> {
        self.expect(WizardState::Preview, WizardState::Loading)?;
        self.loading_since = Some(Instant::now());
        self.state = WizardState::Loading;
        Ok(())
    }

    /// How much of the minimum pause is still owed. Zero once elapsed, and
    /// zero outside the Loading step.
    pub fn remaining_pause(&self) -> Duration {
        match self.loading_since {
            Some(since) => MIN_LOADING_PAUSE.saturating_sub(since.elapsed()),
            None => Duration::ZERO,
        }
    }

    /// Loading → Result. The estimate is computed exactly once, on entry,
    /// and cached here; re-rendering the Result page reads the cache.
    pub fn complete(&mut self, estimate: Estimate) -> Result<(), TransitionError> {
        self.expect(WizardState::Loading, WizardState::Result)?;
        self.estimate = Some(estimate);
        self.loading_since = None;
        self.state = WizardState::Result;
        Ok(())
    }

    /// Result → Upload, the explicit reset. Clears all session data, so the
    /// next pass starts with no stale upload.
    pub fn reset(&mut self) -> Result<(), TransitionError> {
        self.expect(WizardState::Result, WizardState::Upload)?;
        *self = Session::new();
        Ok(())
    }

    /// Internal-failure escape hatch: drops everything and returns to Upload
    /// from any state. Used when classification fails at request time, where
    /// showing a partial result would be worse than starting over.
    pub fn abort(&mut self) {
        *self = Session::new();
    }

    fn expect(&self, from: WizardState, to: WizardState) -> Result<(), TransitionError> {
        if self.state == from {
            Ok(())
        } else {
            Err(TransitionError {
                from: self.state,
                to,
            })
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
