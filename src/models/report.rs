use clap::ValueEnum;

/// Audience whose nutrient thresholds the day's totals are judged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Audience {
    Elementary,
    Adult,
}

impl Audience {
    /// Korean label used in rendered messages.
    pub fn label(self) -> &'static str {
        match self {
            Audience::Elementary => "초등학생",
            Audience::Adult => "성인",
        }
    }
}

/// One suggested dinner menu with the sentence explaining why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationItem {
    pub menu: String,
    pub reason: String,
}

/// Outcome of the dinner recommendation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    /// Every checked threshold was met.
    Balanced { message: String },

    /// One suggestion per deficient nutrient, in the fixed check order.
    Suggestions {
        intro: String,
        items: Vec<RecommendationItem>,
    },
}

/// Display-ready view of one meal record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealSection {
    pub meal_time: String,
    pub calorie_text: String,
    /// Dish names joined with ", ", allergy codes stripped.
    pub menu_display: String,
    /// Parsed (name, value) nutrient pairs in document order.
    pub nutrients: Vec<(String, String)>,
}

/// Render-ready result of the whole pipeline for one date, independent of
/// any display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayReport {
    pub sections: Vec<MealSection>,
    pub recommendation: Recommendation,
}
