use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Line-break marker the API embeds in composite strings.
pub const LINE_BREAK: &str = "<br/>";

/// `name(unit) : value`. The unit group is non-greedy so a name keeps any
/// text before its first parenthesis pair.
static NUTRIENT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.+)\((.+?)\)\s*:\s*(.+)").expect("nutrient line pattern"));

/// Parenthetical allergy annotation in a dish name.
static ALLERGY_NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]+\)").expect("allergy note pattern"));

/// Parse a semi-structured nutrient string into (name, value) pairs.
///
/// Splits on the line-break marker, trims, and keeps only lines matching
/// the `name(unit) : value` shape. Anything else is skipped silently,
/// since upstream data quality is inconsistent by nature.
pub fn parse_nutrient_lines(nutrient_text: &str) -> Vec<(String, String)> {
    nutrient_text
        .split(LINE_BREAK)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match NUTRIENT_LINE.captures(line) {
            Some(caps) => Some((caps[1].trim().to_string(), caps[3].trim().to_string())),
            None => {
                debug!(line, "skipping nutrient line without name(unit): value shape");
                None
            }
        })
        .collect()
}

/// Pull a calorie count out of a free-form string like "841.9 Kcal".
///
/// Strips everything that is not a digit or decimal point, then parses.
/// An empty or unparseable remainder is 0.0, never an error.
pub fn parse_calorie(calorie_text: &str) -> f64 {
    let digits: String = calorie_text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().unwrap_or(0.0)
}

/// Dish text for display: line breaks become a comma join and allergy
/// codes are dropped. Not used for any nutrient computation.
pub fn display_menu(dish_text: &str) -> String {
    let joined = dish_text.replace(LINE_BREAK, ", ");
    ALLERGY_NOTE.replace_all(&joined, "").trim().to_string()
}
