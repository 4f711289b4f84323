pub mod meal;
pub mod report;

pub use meal::{MealRecord, NutrientTotals};
pub use report::{Audience, DayReport, MealSection, Recommendation, RecommendationItem};
