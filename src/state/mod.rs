/// State management module
///
/// This module handles all interactive application state, including:
/// - The booking request draft and its validation (booking.rs)
/// - Per-room photo slider state (slider.rs)

pub mod booking;
pub mod slider;
