/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 *   - identity: token -> Identity
 *   - profiles / events / activities / students: data-store access
 * - Clone is cheap (Arc handles only, no mutable state)
 */
use std::sync::Arc;

use sqlx::PgPool;

use crate::repos::{
    ActivityRepo, EventRepo, PgActivityRepo, PgEventRepo, PgProfileRepo, PgStudentRepo,
    ProfileRepo, StudentRepo,
};
use crate::services::identity::IdentityProvider;

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
    pub profiles: Arc<dyn ProfileRepo>,
    pub events: Arc<dyn EventRepo>,
    pub activities: Arc<dyn ActivityRepo>,
    pub students: Arc<dyn StudentRepo>,
}

impl AppState {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        profiles: Arc<dyn ProfileRepo>,
        events: Arc<dyn EventRepo>,
        activities: Arc<dyn ActivityRepo>,
        students: Arc<dyn StudentRepo>,
    ) -> Self {
        Self {
            identity,
            profiles,
            events,
            activities,
            students,
        }
    }

    /// Every repo backed by the same Postgres pool.
    pub fn with_postgres(identity: Arc<dyn IdentityProvider>, db: PgPool) -> Self {
        Self::new(
            identity,
            Arc::new(PgProfileRepo::new(db.clone())),
            Arc::new(PgEventRepo::new(db.clone())),
            Arc::new(PgActivityRepo::new(db.clone())),
            Arc::new(PgStudentRepo::new(db)),
        )
    }
}
