//! Randomized sample meal planning.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::error::{QueryError, QueryResult};
use crate::types::Recipe;

/// Courses the default plan draws from, in serving order.
pub const DEFAULT_COURSES: [&str; 3] = ["snack", "main course", "dessert"];

/// One suggested dish for a course slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedMeal {
    /// The target course this dish fills.
    pub course: String,
    /// Dish name.
    pub dish: String,
    /// State of origin, for attribution in the rendered plan.
    pub state: String,
}

/// Draw one dish per target course from `recipes`.
///
/// For each course in `courses` (in order), the candidates are the subset's
/// records whose `course` matches case-insensitively; one is picked uniformly
/// at random. Courses with no candidates are omitted from the plan. A plan
/// with no entries at all is [`QueryError::InsufficientPlanData`], so callers
/// can tell "nothing to suggest" apart from an empty success.
///
/// The random source is injected so callers (and tests) can seed it.
pub fn plan_meals<R: Rng + ?Sized>(
    recipes: &[Recipe],
    courses: &[&str],
    rng: &mut R,
) -> QueryResult<Vec<PlannedMeal>> {
    let mut plan = Vec::new();
    for &course in courses {
        let candidates: Vec<&Recipe> = recipes
            .iter()
            .filter(|r| r.course.eq_ignore_ascii_case(course))
            .collect();
        if let Some(pick) = candidates.choose(rng) {
            plan.push(PlannedMeal {
                course: course.to_owned(),
                dish: pick.name.clone(),
                state: pick.state.clone(),
            });
        }
    }

    if plan.is_empty() {
        return Err(QueryError::InsufficientPlanData);
    }
    Ok(plan)
}
