/*
 * Responsibility
 * - Faculty profile response DTOs
 * - The faculty join is optional: absent record → null fields / null object
 */
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::repos::profile_repo::{AchievementRow, FacultyProfileRow};

#[derive(Debug, Serialize)]
pub struct FacultyDetailsResponse {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
}

impl From<FacultyProfileRow> for FacultyDetailsResponse {
    fn from(row: FacultyProfileRow) -> Self {
        let faculty = FacultyAssignment::from_row(&row);
        Self {
            full_name: row.full_name,
            email: row.email,
            role: row.role,
            department: faculty.as_ref().and_then(|f| f.department.clone()),
            designation: faculty.and_then(|f| f.designation),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FacultyAssignment {
    pub department: Option<String>,
    pub designation: Option<String>,
}

impl FacultyAssignment {
    fn from_row(row: &FacultyProfileRow) -> Option<Self> {
        row.has_faculty.then(|| Self {
            department: row.department.clone(),
            designation: row.designation.clone(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct FacultyProfile {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub faculty: Option<FacultyAssignment>,
}

impl From<FacultyProfileRow> for FacultyProfile {
    fn from(row: FacultyProfileRow) -> Self {
        let faculty = FacultyAssignment::from_row(&row);
        Self {
            id: row.id,
            full_name: row.full_name,
            email: row.email,
            role: row.role,
            faculty,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AchievementResponse {
    pub faculty_achievement_id: Uuid,
    pub achievements: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<AchievementRow> for AchievementResponse {
    fn from(row: AchievementRow) -> Self {
        Self {
            faculty_achievement_id: row.faculty_achievement_id,
            achievements: row.achievements,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MyFacultyProfileResponse {
    pub profile: FacultyProfile,
    pub achievements: Vec<AchievementResponse>,
}
