//! Progress tracker for the rating community's guided tour.
//!
//! Only progress is tracked here; highlighting page elements is the UI's
//! job. Progress survives restarts through two storage keys.

use std::sync::Arc;

use crate::storage::{KeyValueStore, StorageError};

pub const TOUR_STEP_KEY: &str = "scoring-tour-step";
pub const TOUR_COMPLETED_KEY: &str = "scoring-tour-completed";

/// Tour stops in order. Codes are persisted, so they must not change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum TourStep {
    #[default]
    HomeCommunityEntry = 1,
    CommunityExplore = 2,
    MinorSectionIntro = 3,
    MinorSectionFeedback = 4,
    MinorSectionClick = 5,
    RatingListIntro = 6,
    RatingListFeedback = 7,
    RatingItemCard = 8,
    RatingItemStars = 9,
    RatingDetailFeedback = 10,
    CommunityHot = 11,
    CommunityRandom = 12,
    CommunityRefresh = 13,
    CommunityCollection = 14,
    CommunityFinal = 15,
    Completed = 100,
}

impl TourStep {
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        let step = match code {
            1 => Self::HomeCommunityEntry,
            2 => Self::CommunityExplore,
            3 => Self::MinorSectionIntro,
            4 => Self::MinorSectionFeedback,
            5 => Self::MinorSectionClick,
            6 => Self::RatingListIntro,
            7 => Self::RatingListFeedback,
            8 => Self::RatingItemCard,
            9 => Self::RatingItemStars,
            10 => Self::RatingDetailFeedback,
            11 => Self::CommunityHot,
            12 => Self::CommunityRandom,
            13 => Self::CommunityRefresh,
            14 => Self::CommunityCollection,
            15 => Self::CommunityFinal,
            100 => Self::Completed,
            _ => return None,
        };
        Some(step)
    }
}

pub struct RatingTour {
    storage: Arc<dyn KeyValueStore>,
    current_step: TourStep,
    completed: bool,
}

impl RatingTour {
    /// A tracker at the first step. Call [`Self::init`] to load saved progress.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage, current_step: TourStep::default(), completed: false }
    }

    /// Restore progress. A completed marker wins over any saved step;
    /// an unreadable step is ignored.
    pub fn init(&mut self) {
        if self.storage.get(TOUR_COMPLETED_KEY).as_deref() == Some("true") {
            self.completed = true;
            return;
        }
        let saved = self
            .storage
            .get(TOUR_STEP_KEY)
            .and_then(|raw| raw.trim().parse::<u8>().ok())
            .and_then(TourStep::from_code);
        if let Some(step) = saved {
            self.current_step = step;
        }
    }

    /// # Errors
    ///
    /// Returns [`StorageError`] if the step could not be persisted.
    pub fn save_step(&mut self, step: TourStep) -> Result<(), StorageError> {
        self.current_step = step;
        self.storage.set(TOUR_STEP_KEY, &step.code().to_string())
    }

    /// # Errors
    ///
    /// Returns [`StorageError`] if the completion could not be persisted.
    pub fn complete(&mut self) -> Result<(), StorageError> {
        self.completed = true;
        self.storage.set(TOUR_COMPLETED_KEY, "true")?;
        self.storage.remove(TOUR_STEP_KEY)
    }

    /// Back to a fresh, never-started tour.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if a key could not be removed.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.completed = false;
        self.current_step = TourStep::default();
        self.storage.remove(TOUR_COMPLETED_KEY)?;
        self.storage.remove(TOUR_STEP_KEY)
    }

    /// Start at `step` even if the tour was completed before.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the new progress could not be persisted.
    pub fn force_start(&mut self, step: TourStep) -> Result<(), StorageError> {
        self.completed = false;
        self.current_step = step;
        self.storage.remove(TOUR_COMPLETED_KEY)?;
        self.storage.set(TOUR_STEP_KEY, &step.code().to_string())
    }

    /// Re-read storage, then report whether the tour still has steps to show.
    pub fn should_start(&mut self) -> bool {
        self.init();
        !self.completed
    }

    #[must_use]
    pub fn current_step(&self) -> TourStep {
        self.current_step
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

#[cfg(test)]
#[path = "tour_test.rs"]
mod tests;
