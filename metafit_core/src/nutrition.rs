//! Nutrition logging: the built-in food table, daily consumption log
//! and goal-dependent macro targets.
//!
//! Consumption is persisted per calendar day under its own storage key,
//! separate from the workout program records.

use crate::profile::Goal;
use crate::store::KeyValueStore;
use crate::Result;
use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ============================================================================
// Food Table
// ============================================================================

/// One entry of the built-in food table, per single serving
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub serving: String,
}

static FOOD_TABLE: Lazy<Vec<FoodItem>> = Lazy::new(build_food_table);

/// The built-in food table
pub fn food_table() -> &'static [FoodItem] {
    &FOOD_TABLE
}

/// Case-insensitive name-substring search over the food table
pub fn search_foods(term: &str) -> Vec<&'static FoodItem> {
    let needle = term.to_lowercase();
    FOOD_TABLE
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&needle))
        .collect()
}

/// Look up a food by id
pub fn find_food(id: &str) -> Option<&'static FoodItem> {
    FOOD_TABLE.iter().find(|f| f.id == id)
}

fn food(
    id: &str,
    name: &str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    sugar: f64,
    serving: &str,
) -> FoodItem {
    FoodItem {
        id: id.into(),
        name: name.into(),
        calories,
        protein,
        carbs,
        fat,
        fiber,
        sugar,
        serving: serving.into(),
    }
}

fn build_food_table() -> Vec<FoodItem> {
    vec![
        food("chicken_breast", "Chicken Breast (100g)", 165.0, 31.0, 0.0, 3.6, 0.0, 0.0, "100g"),
        food("brown_rice", "Brown Rice (1 cup cooked)", 216.0, 5.0, 45.0, 1.8, 3.5, 0.7, "1 cup"),
        food("banana", "Banana (1 medium)", 105.0, 1.3, 27.0, 0.3, 3.1, 14.0, "1 medium"),
        food("greek_yogurt", "Greek Yogurt (1 cup)", 130.0, 23.0, 9.0, 0.0, 0.0, 9.0, "1 cup"),
        food("almonds", "Almonds (28g)", 164.0, 6.0, 6.0, 14.0, 3.5, 1.2, "28g (about 23 nuts)"),
        food("broccoli", "Broccoli (1 cup)", 25.0, 3.0, 5.0, 0.3, 2.3, 1.5, "1 cup"),
        food("wheat_bread", "Whole Wheat Bread (1 slice)", 81.0, 4.0, 14.0, 1.1, 2.0, 1.4, "1 slice"),
        food("salmon", "Salmon (100g)", 208.0, 25.0, 0.0, 12.0, 0.0, 0.0, "100g"),
    ]
}

// ============================================================================
// Daily Log
// ============================================================================

/// A food entry in the daily log, with nutrients scaled by quantity at
/// logging time
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoggedFood {
    pub food_id: String,
    pub name: String,
    pub quantity: f64,
    pub logged_at: DateTime<Utc>,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
}

/// Scale a food by quantity into a log entry
pub fn log_food(item: &FoodItem, quantity: f64, logged_at: DateTime<Utc>) -> LoggedFood {
    LoggedFood {
        food_id: item.id.clone(),
        name: item.name.clone(),
        quantity,
        logged_at,
        calories: item.calories * quantity,
        protein: item.protein * quantity,
        carbs: item.carbs * quantity,
        fat: item.fat * quantity,
        fiber: item.fiber * quantity,
        sugar: item.sugar * quantity,
    }
}

/// Nutrient totals for a day
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
}

/// Fold a day's log into totals
pub fn totals(log: &[LoggedFood]) -> NutritionTotals {
    log.iter().fold(NutritionTotals::default(), |acc, f| {
        NutritionTotals {
            calories: acc.calories + f.calories,
            protein: acc.protein + f.protein,
            carbs: acc.carbs + f.carbs,
            fat: acc.fat + f.fat,
            fiber: acc.fiber + f.fiber,
            sugar: acc.sugar + f.sugar,
        }
    })
}

// ============================================================================
// Macro Targets
// ============================================================================

/// Daily macro-nutrient targets in grams
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MacroTargets {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Split the daily calorie target into macro gram targets.
///
/// Ratios shift with the goal: muscle gain leans on protein, weight
/// loss trades carbs for protein. Protein and carbs count 4 kcal/g,
/// fat 9 kcal/g.
pub fn macro_targets(daily_calories: u32, goal: Goal) -> MacroTargets {
    let (protein_ratio, carb_ratio, fat_ratio) = match goal {
        Goal::MuscleGain => (0.30, 0.40, 0.30),
        Goal::WeightLoss => (0.35, 0.35, 0.30),
        Goal::Maintenance | Goal::Strength | Goal::Endurance => (0.25, 0.45, 0.30),
    };

    let calories = f64::from(daily_calories);
    MacroTargets {
        protein_g: calories * protein_ratio / 4.0,
        carbs_g: calories * carb_ratio / 4.0,
        fat_g: calories * fat_ratio / 9.0,
    }
}

// ============================================================================
// Persistence
// ============================================================================

/// Date-scoped nutrition log over the shared key-value storage
pub struct NutritionStore<S: KeyValueStore> {
    store: S,
}

fn day_key(date: NaiveDate) -> String {
    format!("nutrition:{}", date.format("%Y-%m-%d"))
}

impl<S: KeyValueStore> NutritionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load a day's log; absent or unreadable records read as empty
    pub fn load_day(&self, date: NaiveDate) -> Result<Vec<LoggedFood>> {
        let raw = match self.store.get(&day_key(date))? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str(&raw) {
            Ok(log) => Ok(log),
            Err(e) => {
                tracing::warn!(
                    "Nutrition log for {} failed to parse: {}. Treating as empty.",
                    date,
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    pub fn save_day(&mut self, date: NaiveDate, log: &[LoggedFood]) -> Result<()> {
        let raw = serde_json::to_string(log)?;
        self.store.set(&day_key(date), &raw)
    }

    /// Append one entry to a day's log and persist it
    pub fn add(&mut self, date: NaiveDate, entry: LoggedFood) -> Result<Vec<LoggedFood>> {
        let mut log = self.load_day(date)?;
        log.push(entry);
        self.save_day(date, &log)?;
        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_food_table_has_eight_items() {
        assert_eq!(food_table().len(), 8);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let hits = search_foods("bread");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "wheat_bread");

        assert_eq!(search_foods("B").len(), 5); // banana, bread, broccoli, brown rice, chicken breast
        assert!(search_foods("pizza").is_empty());
    }

    #[test]
    fn test_logging_scales_by_quantity() {
        let banana = find_food("banana").unwrap();
        let logged = log_food(banana, 2.0, Utc::now());

        assert_eq!(logged.calories, 210.0);
        assert_eq!(logged.protein, 2.6);
        assert_eq!(logged.sugar, 28.0);
        assert_eq!(logged.quantity, 2.0);
    }

    #[test]
    fn test_totals_fold() {
        let now = Utc::now();
        let log = vec![
            log_food(find_food("chicken_breast").unwrap(), 1.0, now),
            log_food(find_food("brown_rice").unwrap(), 1.0, now),
        ];

        let totals = totals(&log);
        assert_eq!(totals.calories, 165.0 + 216.0);
        assert_eq!(totals.protein, 31.0 + 5.0);
        assert_eq!(totals.carbs, 45.0);
    }

    #[test]
    fn test_macro_targets_by_goal() {
        let maintenance = macro_targets(2000, Goal::Maintenance);
        assert_eq!(maintenance.protein_g, 125.0); // 2000*0.25/4
        assert_eq!(maintenance.carbs_g, 225.0); // 2000*0.45/4
        assert!((maintenance.fat_g - 2000.0 * 0.30 / 9.0).abs() < 1e-9);

        let gain = macro_targets(2000, Goal::MuscleGain);
        assert_eq!(gain.protein_g, 150.0);

        let loss = macro_targets(2000, Goal::WeightLoss);
        assert_eq!(loss.protein_g, 175.0);
        assert_eq!(loss.carbs_g, 175.0);
    }

    #[test]
    fn test_daily_logs_are_scoped_by_date() {
        let mut store = NutritionStore::new(MemoryStore::new());
        let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();

        let banana = log_food(find_food("banana").unwrap(), 1.0, Utc::now());
        store.add(monday, banana).unwrap();

        assert_eq!(store.load_day(monday).unwrap().len(), 1);
        assert!(store.load_day(tuesday).unwrap().is_empty());
    }

    #[test]
    fn test_add_appends_and_persists() {
        let mut store = NutritionStore::new(MemoryStore::new());
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let now = Utc::now();

        store
            .add(date, log_food(find_food("salmon").unwrap(), 1.0, now))
            .unwrap();
        let log = store
            .add(date, log_food(find_food("broccoli").unwrap(), 2.0, now))
            .unwrap();

        assert_eq!(log.len(), 2);
        let reloaded = store.load_day(date).unwrap();
        assert_eq!(reloaded, log);
        assert_eq!(totals(&reloaded).calories, 208.0 + 50.0);
    }
}
