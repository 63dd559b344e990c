//! Lesson duration summation for the course duration rollup.

use cms_core::entities::Lesson;

/// Total minutes across `lessons`, `0` for an empty slice.
///
/// Saturates at `u32::MAX` instead of overflowing.
#[must_use]
pub fn total_lesson_minutes(lessons: &[Lesson]) -> u32 {
    lessons.iter().fold(0_u32, |acc, l| acc.saturating_add(l.duration))
}

/// Convert a stored `INTEGER` minute count to a course duration, flooring at
/// zero and saturating at `u32::MAX`.
#[must_use]
pub fn clamp_minutes(total: i64) -> u32 {
    u32::try_from(total.max(0)).unwrap_or(u32::MAX)
}
