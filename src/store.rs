use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::model::{Habit, HabitCategory, HabitSchedule};

/// Fixed denominator per habit in the success-rate statistic. A literal
/// design constant, not a count of elapsed days.
const SUCCESS_RATE_WINDOW: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Habit not found")]
    NotFound,
}

/// The single in-memory habit table, keyed by id.
///
/// Every operation takes the lock exactly once, so each call is atomic with
/// respect to concurrent requests — two simultaneous completes on the same
/// habit cannot lose an increment.
#[derive(Default)]
pub struct HabitStore {
    habits: RwLock<HashMap<String, Habit>>,
}

impl HabitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored habits. Iteration order is unspecified; callers must not
    /// depend on it.
    pub async fn list(&self) -> Vec<Habit> {
        self.habits.read().await.values().cloned().collect()
    }

    pub async fn create(
        &self,
        name: String,
        category: HabitCategory,
        schedule: HabitSchedule,
        reminder_time: Option<String>,
    ) -> Habit {
        let habit = Habit {
            id: Uuid::new_v4().to_string(),
            name,
            category,
            schedule,
            reminder_time,
            streak: 0,
            created_at: Utc::now(),
        };
        self.habits
            .write()
            .await
            .insert(habit.id.clone(), habit.clone());
        habit
    }

    /// Increment the habit's streak by one and return the new value.
    pub async fn complete(&self, id: &str) -> Result<u64, StoreError> {
        let mut habits = self.habits.write().await;
        let habit = habits.get_mut(id).ok_or(StoreError::NotFound)?;
        habit.streak += 1;
        Ok(habit.streak)
    }

    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.habits
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    /// Aggregate success rate: `100 * Σstreak / (30 * n)`, rounded to two
    /// decimals. `None` when the table is empty (the endpoint reports 0).
    pub async fn success_rate(&self) -> Option<f64> {
        let habits = self.habits.read().await;
        if habits.is_empty() {
            return None;
        }
        let total: u64 = habits.values().map(|h| h.streak).sum();
        let possible = habits.len() as u64 * SUCCESS_RATE_WINDOW;
        let pct = total as f64 / possible as f64 * 100.0;
        Some((pct * 100.0).round() / 100.0)
    }

    /// Maximum streak across all habits, 0 when empty. Backs both the
    /// current-streak and longest-streak endpoints — the two are defined
    /// identically today.
    pub async fn max_streak(&self) -> u64 {
        self.habits
            .read()
            .await
            .values()
            .map(|h| h.streak)
            .max()
            .unwrap_or(0)
    }

    /// Reset the table to the fixed startup fixture: two sample habits with
    /// streaks 7 and 12, fresh ids and timestamps. Runs on every boot.
    pub async fn seed_samples(&self) {
        let samples = [
            (
                "Morning Exercise",
                HabitCategory::Health,
                HabitSchedule::Daily,
                "07:00",
                7,
            ),
            (
                "Read 30 minutes",
                HabitCategory::Learning,
                HabitSchedule::Daily,
                "21:00",
                12,
            ),
        ];

        let mut habits = self.habits.write().await;
        habits.clear();
        for (name, category, schedule, reminder, streak) in samples {
            let habit = Habit {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                category,
                schedule,
                reminder_time: Some(reminder.to_string()),
                streak,
                created_at: Utc::now(),
            };
            habits.insert(habit.id.clone(), habit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_starts_at_zero_with_unique_ids() {
        let store = HabitStore::new();
        let a = store
            .create(
                "Stretch".into(),
                HabitCategory::Health,
                HabitSchedule::Daily,
                None,
            )
            .await;
        let b = store
            .create(
                "Stretch".into(),
                HabitCategory::Health,
                HabitSchedule::Daily,
                None,
            )
            .await;
        assert_eq!(a.streak, 0);
        assert_ne!(a.id, b.id);
        assert_eq!(store.list().await.len(), 2);
    }

    #[tokio::test]
    async fn complete_increments_and_reports_new_value() {
        let store = HabitStore::new();
        let habit = store
            .create(
                "Journal".into(),
                HabitCategory::Mindfulness,
                HabitSchedule::Daily,
                None,
            )
            .await;
        assert_eq!(store.complete(&habit.id).await.unwrap(), 1);
        assert_eq!(store.complete(&habit.id).await.unwrap(), 2);
        let listed = store.list().await;
        assert_eq!(listed[0].streak, 2);
    }

    #[tokio::test]
    async fn complete_unknown_id_is_not_found() {
        let store = HabitStore::new();
        assert!(matches!(
            store.complete("no-such-id").await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn delete_removes_and_rejects_unknown() {
        let store = HabitStore::new();
        let habit = store
            .create(
                "Inbox zero".into(),
                HabitCategory::Productivity,
                HabitSchedule::Weekdays,
                None,
            )
            .await;
        store.delete(&habit.id).await.unwrap();
        assert!(store.list().await.is_empty());
        assert!(matches!(
            store.delete(&habit.id).await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn success_rate_empty_is_none() {
        let store = HabitStore::new();
        assert_eq!(store.success_rate().await, None);
    }

    #[tokio::test]
    async fn success_rate_rounds_to_two_decimals() {
        // Seeded streaks 7 and 12: 19 / 60 * 100 = 31.666… → 31.67
        let store = HabitStore::new();
        store.seed_samples().await;
        assert_eq!(store.success_rate().await, Some(31.67));
    }

    #[tokio::test]
    async fn max_streak_is_zero_on_empty_store() {
        let store = HabitStore::new();
        assert_eq!(store.max_streak().await, 0);
    }

    #[tokio::test]
    async fn seed_samples_resets_to_the_fixture() {
        let store = HabitStore::new();
        store
            .create(
                "Leftover".into(),
                HabitCategory::Other,
                HabitSchedule::Weekend,
                None,
            )
            .await;
        store.seed_samples().await;

        let mut streaks: Vec<u64> = store.list().await.iter().map(|h| h.streak).collect();
        streaks.sort_unstable();
        assert_eq!(streaks, vec![7, 12]);
        assert_eq!(store.max_streak().await, 12);
    }
}
