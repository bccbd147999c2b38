//! RecommendCourses - Query handler selecting courses for a learner's tier.

use std::sync::Arc;
use tracing::debug;

use crate::application::handlers::profile::ProfileManager;
use crate::domain::catalog::{Course, RecommendationPolicy};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::CourseCatalog;

/// Query for a learner's course recommendations.
#[derive(Debug, Clone)]
pub struct RecommendCoursesQuery {
    pub user_id: UserId,
}

/// Handler for course recommendations.
pub struct RecommendCoursesHandler {
    profiles: Arc<ProfileManager>,
    catalog: Arc<dyn CourseCatalog>,
}

impl RecommendCoursesHandler {
    pub fn new(profiles: Arc<ProfileManager>, catalog: Arc<dyn CourseCatalog>) -> Self {
        Self { profiles, catalog }
    }

    /// Up to five courses at the learner's target difficulty, topped up with
    /// up to three from other difficulties when fewer than three match.
    pub async fn handle(&self, query: RecommendCoursesQuery) -> Result<Vec<Course>, DomainError> {
        let profile = self.profiles.get_or_compute(&query.user_id).await?;
        let target =
            RecommendationPolicy::target_difficulty_for_label(Some(profile.cognitive_level_label()));

        let matched = self
            .catalog
            .list_courses(RecommendationPolicy::matched_filter(target))
            .await?;
        let matched_count = matched.len();

        let courses = if RecommendationPolicy::needs_fill(matched_count) {
            let fill = self
                .catalog
                .list_courses(RecommendationPolicy::fill_filter(target))
                .await?;
            RecommendationPolicy::combine(matched, fill)
        } else {
            matched
        };

        debug!(
            user_id = %query.user_id,
            cognitive_level = profile.cognitive_level_label(),
            target_difficulty = %target,
            matched = matched_count,
            total = courses.len(),
            "Courses recommended"
        );

        Ok(courses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryCourseCatalog, InMemoryProfileRepository, InMemoryResponseStore,
    };
    use crate::domain::assessment::{NewBehavioralResponse, NewTechnicalAttempt};
    use crate::domain::catalog::{Difficulty, NewCourse};
    use crate::domain::foundation::CognitiveProfileId;
    use crate::domain::profile::CognitiveProfile;
    use crate::ports::{ProfileRepository, ResponseStore};
    use chrono::Utc;
    use std::collections::HashSet;

    fn learner() -> UserId {
        UserId::new("learner@example.com").unwrap()
    }

    struct Fixture {
        store: Arc<InMemoryResponseStore>,
        profiles: Arc<InMemoryProfileRepository>,
        catalog: Arc<InMemoryCourseCatalog>,
        handler: RecommendCoursesHandler,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryResponseStore::new());
        let profiles = Arc::new(InMemoryProfileRepository::new());
        let catalog = Arc::new(InMemoryCourseCatalog::new());
        let manager = Arc::new(ProfileManager::new(store.clone(), profiles.clone()));
        Fixture {
            store,
            profiles,
            catalog: catalog.clone(),
            handler: RecommendCoursesHandler::new(manager, catalog),
        }
    }

    async fn seed(catalog: &InMemoryCourseCatalog, difficulty: Difficulty, count: usize) {
        for i in 0..count {
            let course =
                NewCourse::new(format!("{} {}", difficulty, i), "desc", difficulty, "Expert Lead")
                    .unwrap();
            catalog.create_course(course).await.unwrap();
        }
    }

    fn query() -> RecommendCoursesQuery {
        RecommendCoursesQuery { user_id: learner() }
    }

    #[tokio::test]
    async fn basic_learner_gets_beginner_courses_plus_fill() {
        let f = fixture();
        seed(&f.catalog, Difficulty::Beginner, 2).await;
        seed(&f.catalog, Difficulty::Intermediate, 2).await;
        seed(&f.catalog, Difficulty::Advanced, 2).await;

        let courses = f.handler.handle(query()).await.unwrap();

        assert_eq!(courses.len(), 5);
        assert!(courses[..2].iter().all(|c| c.difficulty == Difficulty::Beginner));
        assert!(courses[2..].iter().all(|c| c.difficulty != Difficulty::Beginner));
        let unique: HashSet<_> = courses.iter().map(|c| c.id).collect();
        assert_eq!(unique.len(), courses.len());
    }

    #[tokio::test]
    async fn enough_matches_skips_fill_and_caps_at_five() {
        let f = fixture();
        seed(&f.catalog, Difficulty::Beginner, 7).await;
        seed(&f.catalog, Difficulty::Advanced, 3).await;

        let courses = f.handler.handle(query()).await.unwrap();

        assert_eq!(courses.len(), 5);
        assert!(courses.iter().all(|c| c.difficulty == Difficulty::Beginner));
    }

    #[tokio::test]
    async fn advanced_learner_targets_advanced_courses() {
        let f = fixture();
        seed(&f.catalog, Difficulty::Beginner, 3).await;
        seed(&f.catalog, Difficulty::Advanced, 3).await;
        // final score 85
        f.store
            .record_behavioral(NewBehavioralResponse::new(learner(), 1, "A", 10.0).unwrap())
            .await
            .unwrap();
        f.store
            .record_technical(
                NewTechnicalAttempt::new(learner(), 2, "A", "A", 3.0, true, 1).unwrap(),
            )
            .await
            .unwrap();

        let courses = f.handler.handle(query()).await.unwrap();

        assert_eq!(courses.len(), 3);
        assert!(courses.iter().all(|c| c.difficulty == Difficulty::Advanced));
    }

    #[tokio::test]
    async fn small_catalog_returns_fewer_than_three() {
        let f = fixture();
        seed(&f.catalog, Difficulty::Advanced, 1).await;

        let courses = f.handler.handle(query()).await.unwrap();

        assert_eq!(courses.len(), 1);
    }

    #[tokio::test]
    async fn unrecognised_stored_level_falls_back_to_beginner() {
        let f = fixture();
        seed(&f.catalog, Difficulty::Advanced, 2).await;
        seed(&f.catalog, Difficulty::Beginner, 3).await;
        let legacy = CognitiveProfile::reconstitute(
            CognitiveProfileId::new(),
            learner(),
            95.0,
            95.0,
            "Beginner",
            "General",
            "Explore foundations".to_string(),
            Utc::now(),
        );
        f.profiles.upsert(&legacy).await.unwrap();

        let courses = f.handler.handle(query()).await.unwrap();

        assert_eq!(courses.len(), 3);
        assert!(courses.iter().all(|c| c.difficulty == Difficulty::Beginner));
    }
}
