/*
 * Responsibility
 * - Data-store access, one trait per aggregate (profiles, events, activities, students)
 * - Postgres implementations over a shared PgPool
 */
pub mod activity_repo;
pub mod approval;
pub mod error;
pub mod event_repo;
pub mod profile_repo;
pub mod student_repo;

pub use activity_repo::{ActivityRepo, PgActivityRepo};
pub use event_repo::{EventRepo, PgEventRepo};
pub use profile_repo::{PgProfileRepo, ProfileRepo};
pub use student_repo::{PgStudentRepo, StudentRepo};
