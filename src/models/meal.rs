/// One meal row of the API response.
///
/// Fields hold the raw upstream strings; derived display text and numeric
/// values are computed downstream. Records are built fresh per fetch and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealRecord {
    /// Meal-time label, e.g. 조식/중식/석식.
    pub meal_time: String,

    /// Dish names, `<br/>`-separated, each optionally carrying a
    /// parenthetical allergy code.
    pub dish_text: String,

    /// Free-form calorie string, e.g. "841.9 Kcal".
    pub calorie_text: String,

    /// `name(unit) : value` entries separated by `<br/>`.
    pub nutrient_text: String,
}

/// Summed nutrient values across all of one day's meal records.
///
/// Only the seven tracked nutrients plus calories are accumulated;
/// anything else in the upstream nutrient string is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutrientTotals {
    pub carbohydrate: f64,
    pub protein: f64,
    pub fat: f64,
    pub vitamin_a: f64,
    pub vitamin_c: f64,
    pub calcium: f64,
    pub iron: f64,
    pub calorie: f64,
}

impl NutrientTotals {
    /// Add a parsed nutrient value to the matching accumulator.
    ///
    /// Names outside the tracked set are dropped without effect.
    pub fn add_named(&mut self, name: &str, value: f64) {
        match name {
            "탄수화물" => self.carbohydrate += value,
            "단백질" => self.protein += value,
            "지방" => self.fat += value,
            "비타민A" => self.vitamin_a += value,
            "비타민C" => self.vitamin_c += value,
            "칼슘" => self.calcium += value,
            "철분" => self.iron += value,
            _ => {}
        }
    }
}
