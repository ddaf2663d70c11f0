//! Property-based tests for recommendations, progress tracking and user equality.

use proptest::prelude::*;

use adaptive_learning::{AdaptiveLearningPlatform, LearningStyle, LessonContent, LessonId, User};
use image::RgbImage;

fn arb_style() -> impl Strategy<Value = LearningStyle> {
    prop_oneof![
        Just(LearningStyle::Visual),
        Just(LearningStyle::Auditory),
        Just(LearningStyle::Kinesthetic),
    ]
}

/// Distinct lesson ids in arbitrary order, plus completions drawn from them.
fn arb_lessons_and_completions() -> impl Strategy<Value = (Vec<u32>, Vec<u32>)> {
    prop::collection::hash_set(0u32..200, 0..20)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
        .prop_flat_map(|ids| {
            let picks = if ids.is_empty() {
                Just(Vec::new()).boxed()
            } else {
                prop::collection::vec(prop::sample::select(ids.clone()), 0..30).boxed()
            };
            (Just(ids), picks)
        })
}

proptest! {
    #[test]
    fn recommendations_are_ordered_set_difference(
        (ids, completions) in arb_lessons_and_completions(),
        style in arb_style(),
    ) {
        let mut platform = AdaptiveLearningPlatform::new();
        let user = platform.add_user(User::new("Learner", style)).unwrap();
        for id in &ids {
            platform
                .add_lesson(LessonContent::new(LessonId(*id), format!("Lesson {id}"), RgbImage::new(0, 0), "", ""))
                .unwrap();
        }
        for id in &completions {
            platform.track_progress(user, LessonId(*id)).unwrap();
            let completed = platform.user(user).unwrap().completed_lessons();
            prop_assert_eq!(completed.last(), Some(&LessonId(*id)));
        }

        let expected: Vec<LessonId> = ids
            .iter()
            .filter(|id| !completions.contains(id))
            .map(|id| LessonId(*id))
            .collect();
        let actual: Vec<LessonId> = platform
            .recommend_lessons(user)
            .unwrap()
            .iter()
            .map(|lesson| lesson.id())
            .collect();

        prop_assert_eq!(actual, expected);
        prop_assert_eq!(
            platform.user(user).unwrap().completed_lessons().len(),
            completions.len()
        );
    }

    #[test]
    fn user_equality_ignores_style_and_history(
        name_a in "[A-Za-z]{1,8}",
        name_b in "[A-Za-z]{1,8}",
        style_a in arb_style(),
        style_b in arb_style(),
        history in prop::collection::vec(0u32..50, 0..5),
    ) {
        let mut first = User::new(name_a.clone(), style_a);
        for id in history {
            first.complete_lesson(LessonId(id));
        }
        let same_name = User::new(name_a.clone(), style_b);
        let other = User::new(name_b.clone(), style_b);

        prop_assert!(first == same_name);
        prop_assert_eq!(first == other, name_a == name_b);
    }
}
