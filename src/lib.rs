pub mod advisor;
pub mod cli;
pub mod client;
pub mod error;
pub mod interface;
pub mod models;
pub mod parser;

pub use error::{MealError, Result};
pub use models::{Audience, DayReport, MealRecord, NutrientTotals};
