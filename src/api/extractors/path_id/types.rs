/**
 * Responsibility
 *  - One tagged id type per resource addressed by path
 *
 * Everything declared `pub` here is re-exported through ./mod.rs
 */
use super::core::PathId;

// events
pub enum EventTag {}
pub type EventId = PathId<EventTag>;

// activities
pub enum ActivityTag {}
pub type ActivityId = PathId<ActivityTag>;

// students
pub enum StudentTag {}
pub type StudentId = PathId<StudentTag>;
