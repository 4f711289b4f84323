pub mod constants;
pub mod extract;
pub mod recommend;

pub use constants::{Deficiency, ThresholdProfile, candidate_pool, nutrient_emoji, thresholds_for};
pub use extract::{display_menu, parse_calorie, parse_nutrient_lines};
pub use recommend::{aggregate_totals, build_report, find_deficiencies, recommend};
