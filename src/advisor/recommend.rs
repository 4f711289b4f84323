use rand::Rng;
use tracing::debug;

use crate::advisor::constants::{
    Deficiency, balanced_message, candidate_pool, suggestion_intro, thresholds_for,
};
use crate::advisor::extract::{display_menu, parse_calorie, parse_nutrient_lines};
use crate::models::{
    Audience, DayReport, MealRecord, MealSection, NutrientTotals, Recommendation,
};

/// Sum tracked nutrients and calories across the day's records.
///
/// Calories come from every record's calorie string; nutrient values whose
/// name is outside the tracked set, or which fail to parse, contribute
/// nothing. Pure and idempotent over the same input.
pub fn aggregate_totals(records: &[MealRecord]) -> NutrientTotals {
    let mut totals = NutrientTotals::default();

    for record in records {
        totals.calorie += parse_calorie(&record.calorie_text);

        for (name, value) in parse_nutrient_lines(&record.nutrient_text) {
            let value = value.parse::<f64>().unwrap_or(0.0);
            totals.add_named(&name, value);
        }
    }

    totals
}

/// Flag deficient nutrients in the fixed check order.
///
/// The calorie check applies only to the elementary profile. Iron, fat and
/// vitamin A carry no threshold in the current rule set.
pub fn find_deficiencies(totals: &NutrientTotals, audience: Audience) -> Vec<Deficiency> {
    let thresholds = thresholds_for(audience);
    let mut flagged = Vec::new();

    if audience == Audience::Elementary && totals.calorie < thresholds.calorie {
        flagged.push(Deficiency::Calorie);
    }
    if totals.protein < thresholds.protein {
        flagged.push(Deficiency::Protein);
    }
    if totals.carbohydrate < thresholds.carbohydrate {
        flagged.push(Deficiency::Carbohydrate);
    }
    if totals.vitamin_c < thresholds.vitamin_c {
        flagged.push(Deficiency::VitaminC);
    }
    if totals.calcium < thresholds.calcium {
        flagged.push(Deficiency::Calcium);
    }

    flagged
}

/// Build a dinner recommendation from precomputed totals.
///
/// One candidate is chosen uniformly at random per flagged category; the
/// caller injects the RNG so tests can seed it.
pub fn recommend_from_totals(
    totals: &NutrientTotals,
    audience: Audience,
    rng: &mut impl Rng,
) -> Recommendation {
    let flagged = find_deficiencies(totals, audience);
    debug!(?flagged, "deficiency check complete");

    if flagged.is_empty() {
        return Recommendation::Balanced {
            message: balanced_message(audience),
        };
    }

    let items = flagged
        .into_iter()
        .map(|deficiency| {
            let mut pool = candidate_pool(deficiency, audience);
            let idx = rng.gen_range(0..pool.len());
            pool.swap_remove(idx)
        })
        .collect();

    Recommendation::Suggestions {
        intro: suggestion_intro(audience),
        items,
    }
}

/// Aggregate the day's records and recommend a dinner.
pub fn recommend(
    records: &[MealRecord],
    audience: Audience,
    rng: &mut impl Rng,
) -> Recommendation {
    let totals = aggregate_totals(records);
    recommend_from_totals(&totals, audience, rng)
}

/// Run the pure pipeline for one day's records: display sections in
/// document order plus the dinner recommendation.
pub fn build_report(records: &[MealRecord], audience: Audience, rng: &mut impl Rng) -> DayReport {
    let sections = records
        .iter()
        .map(|record| MealSection {
            meal_time: record.meal_time.clone(),
            calorie_text: record.calorie_text.clone(),
            menu_display: display_menu(&record.dish_text),
            nutrients: parse_nutrient_lines(&record.nutrient_text),
        })
        .collect();

    let recommendation = recommend(records, audience, rng);

    DayReport {
        sections,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn record(meal_time: &str, calorie: &str, nutrients: &str) -> MealRecord {
        MealRecord {
            meal_time: meal_time.to_string(),
            dish_text: "현미밥<br/>계란국(1.5.)".to_string(),
            calorie_text: calorie.to_string(),
            nutrient_text: nutrients.to_string(),
        }
    }

    #[test]
    fn test_aggregate_totals_sums_across_records() {
        let records = vec![
            record("조식", "500 Kcal", "단백질(g) : 10.0<br/>칼슘(mg) : 200.0"),
            record("중식", "841.9 Kcal", "단백질(g) : 15.5<br/>철분(mg) : 2.9"),
        ];

        let totals = aggregate_totals(&records);
        assert!((totals.calorie - 1341.9).abs() < 0.001);
        assert!((totals.protein - 25.5).abs() < 0.001);
        assert!((totals.calcium - 200.0).abs() < 0.001);
        assert!((totals.iron - 2.9).abs() < 0.001);
        assert_eq!(totals.fat, 0.0);
    }

    #[test]
    fn test_aggregate_totals_idempotent() {
        let records = vec![record(
            "중식",
            "600 Kcal",
            "탄수화물(g) : 119.8<br/>비타민C(mg) : 12.1",
        )];

        assert_eq!(aggregate_totals(&records), aggregate_totals(&records));
    }

    #[test]
    fn test_aggregate_totals_unparseable_value_counts_as_zero() {
        let records = vec![record("중식", "", "단백질(g) : 많음<br/>칼슘(mg) : 100")];
        let totals = aggregate_totals(&records);
        assert_eq!(totals.protein, 0.0);
        assert!((totals.calcium - 100.0).abs() < 0.001);
    }

    fn generous_totals() -> NutrientTotals {
        NutrientTotals {
            carbohydrate: 200.0,
            protein: 50.0,
            fat: 30.0,
            vitamin_a: 500.0,
            vitamin_c: 90.0,
            calcium: 800.0,
            iron: 10.0,
            calorie: 1000.0,
        }
    }

    #[test]
    fn test_find_deficiencies_order_is_fixed() {
        let totals = NutrientTotals::default();
        let flagged = find_deficiencies(&totals, Audience::Elementary);
        assert_eq!(
            flagged,
            vec![
                Deficiency::Calorie,
                Deficiency::Protein,
                Deficiency::Carbohydrate,
                Deficiency::VitaminC,
                Deficiency::Calcium,
            ]
        );
    }

    #[test]
    fn test_calorie_check_is_elementary_only() {
        let mut totals = generous_totals();
        totals.calorie = 0.0;

        assert!(find_deficiencies(&totals, Audience::Adult).is_empty());
        assert_eq!(
            find_deficiencies(&totals, Audience::Elementary),
            vec![Deficiency::Calorie]
        );
    }

    #[test]
    fn test_threshold_boundary_is_not_deficient() {
        let mut totals = generous_totals();
        totals.protein = 40.0; // exactly at the adult threshold
        assert!(find_deficiencies(&totals, Audience::Adult).is_empty());

        totals.protein = 39.9;
        assert_eq!(
            find_deficiencies(&totals, Audience::Adult),
            vec![Deficiency::Protein]
        );
    }

    #[test]
    fn test_balanced_day_yields_single_message() {
        let mut rng = StdRng::seed_from_u64(7);
        let rec = recommend_from_totals(&generous_totals(), Audience::Adult, &mut rng);

        match rec {
            Recommendation::Balanced { message } => {
                assert!(message.contains("성인"));
            }
            other => panic!("expected balanced message, got {other:?}"),
        }
    }

    #[test]
    fn test_protein_only_deficiency_draws_from_protein_pool() {
        let mut totals = generous_totals();
        totals.protein = 10.0;

        let pool = candidate_pool(Deficiency::Protein, Audience::Adult);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            match recommend_from_totals(&totals, Audience::Adult, &mut rng) {
                Recommendation::Suggestions { items, .. } => {
                    assert_eq!(items.len(), 1);
                    assert!(pool.contains(&items[0]));
                }
                other => panic!("expected suggestions, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_selection_is_deterministic_per_seed() {
        let totals = NutrientTotals::default();

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        assert_eq!(
            recommend_from_totals(&totals, Audience::Elementary, &mut rng_a),
            recommend_from_totals(&totals, Audience::Elementary, &mut rng_b),
        );
    }

    #[test]
    fn test_build_report_sections_follow_document_order() {
        let records = vec![
            record("조식", "400 Kcal", "단백질(g) : 8.0"),
            record("중식", "700 Kcal", "단백질(g) : 20.0"),
            record("석식", "600 Kcal", "단백질(g) : 18.0"),
        ];

        let mut rng = StdRng::seed_from_u64(1);
        let report = build_report(&records, Audience::Adult, &mut rng);

        assert_eq!(report.sections.len(), 3);
        assert_eq!(report.sections[0].meal_time, "조식");
        assert_eq!(report.sections[2].meal_time, "석식");
        assert_eq!(report.sections[0].menu_display, "현미밥, 계란국");
    }
}
