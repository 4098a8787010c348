use std::sync::Arc;

use super::*;
use crate::storage::MemoryStore;

fn tour() -> (RatingTour, Arc<MemoryStore>) {
    let storage = Arc::new(MemoryStore::new());
    (RatingTour::new(storage.clone()), storage)
}

#[test]
fn codes_round_trip_and_unknown_codes_reject() {
    assert_eq!(TourStep::from_code(9), Some(TourStep::RatingItemStars));
    assert_eq!(TourStep::Completed.code(), 100);
    assert_eq!(TourStep::from_code(0), None);
    assert_eq!(TourStep::from_code(16), None);
}

#[test]
fn fresh_tour_starts_at_first_step() {
    let (mut tour, _) = tour();
    assert!(tour.should_start());
    assert_eq!(tour.current_step(), TourStep::HomeCommunityEntry);
}

#[test]
fn saved_step_is_restored_by_a_new_tracker() {
    let (mut tour, storage) = tour();
    tour.save_step(TourStep::RatingListIntro).unwrap();
    assert_eq!(storage.get(TOUR_STEP_KEY).as_deref(), Some("6"));

    let mut again = RatingTour::new(storage);
    again.init();
    assert_eq!(again.current_step(), TourStep::RatingListIntro);
}

#[test]
fn complete_sets_marker_and_drops_step() {
    let (mut tour, storage) = tour();
    tour.save_step(TourStep::CommunityHot).unwrap();

    tour.complete().unwrap();

    assert!(!tour.should_start());
    assert_eq!(storage.get(TOUR_COMPLETED_KEY).as_deref(), Some("true"));
    assert!(storage.get(TOUR_STEP_KEY).is_none());
}

#[test]
fn garbage_step_is_ignored() {
    let (mut tour, storage) = tour();
    storage.set(TOUR_STEP_KEY, "seven").unwrap();
    tour.init();
    assert_eq!(tour.current_step(), TourStep::HomeCommunityEntry);

    storage.set(TOUR_STEP_KEY, "42").unwrap();
    tour.init();
    assert_eq!(tour.current_step(), TourStep::HomeCommunityEntry);
}

#[test]
fn force_start_overrides_completion() {
    let (mut tour, storage) = tour();
    tour.complete().unwrap();

    tour.force_start(TourStep::CommunityExplore).unwrap();

    assert!(tour.should_start());
    assert_eq!(tour.current_step(), TourStep::CommunityExplore);
    assert!(storage.get(TOUR_COMPLETED_KEY).is_none());
    assert_eq!(storage.get(TOUR_STEP_KEY).as_deref(), Some("2"));
}

#[test]
fn reset_clears_everything() {
    let (mut tour, storage) = tour();
    tour.save_step(TourStep::CommunityFinal).unwrap();
    tour.complete().unwrap();

    tour.reset().unwrap();

    assert!(!tour.is_completed());
    assert_eq!(tour.current_step(), TourStep::HomeCommunityEntry);
    assert!(storage.keys().is_empty());
}
