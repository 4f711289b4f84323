use crate::advisor::constants::nutrient_emoji;
use crate::models::{DayReport, MealSection, Recommendation};

/// Format a full day report: one section per meal in document order,
/// then the dinner recommendation block. Pure string building.
pub fn render_report(report: &DayReport) -> String {
    let mut out = String::new();

    out.push_str("=== 급식 정보 ===\n");
    for section in &report.sections {
        out.push('\n');
        out.push_str(&render_section(section));
    }

    out.push('\n');
    out.push_str(&render_recommendation(&report.recommendation));
    out
}

fn render_section(section: &MealSection) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "🍽️ {}  (🔥 {})\n",
        section.meal_time, section.calorie_text
    ));
    out.push_str(&format!("  {}\n", section.menu_display));

    if !section.nutrients.is_empty() {
        out.push_str("  영양 정보:\n");
        for (name, value) in &section.nutrients {
            out.push_str(&format!("    {} {}: {}\n", nutrient_emoji(name), name, value));
        }
    }

    out
}

/// Format the recommendation block on its own, without meal sections.
pub fn render_recommendation(recommendation: &Recommendation) -> String {
    let mut out = String::new();
    out.push_str("=== 🌙 균형 잡힌 저녁 추천 메뉴 ===\n");

    match recommendation {
        Recommendation::Balanced { message } => {
            out.push_str(&format!("  {message}\n"));
        }
        Recommendation::Suggestions { intro, items } => {
            out.push_str(&format!("  {intro}\n"));
            for item in items {
                out.push_str(&format!("  - {}: {}\n", item.menu, item.reason));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecommendationItem;

    fn sample_report() -> DayReport {
        DayReport {
            sections: vec![MealSection {
                meal_time: "중식".to_string(),
                calorie_text: "841.9 Kcal".to_string(),
                menu_display: "보리밥, 미역국".to_string(),
                nutrients: vec![
                    ("탄수화물".to_string(), "119.8".to_string()),
                    ("나트륨".to_string(), "1200".to_string()),
                ],
            }],
            recommendation: Recommendation::Suggestions {
                intro: "오늘 급식 영양소 분석 결과, 성인에게 다음 저녁 메뉴를 추천합니다:"
                    .to_string(),
                items: vec![RecommendationItem {
                    menu: "🥩 소고기 스테이크".to_string(),
                    reason: "양질의 단백질 섭취로 근육 강화와 활력을 높여주세요.".to_string(),
                }],
            },
        }
    }

    #[test]
    fn test_render_report_contains_meal_and_recommendation() {
        let text = render_report(&sample_report());

        assert!(text.contains("🍽️ 중식"));
        assert!(text.contains("🔥 841.9 Kcal"));
        assert!(text.contains("보리밥, 미역국"));
        assert!(text.contains("🍚 탄수화물: 119.8"));
        assert!(text.contains("🌙 균형 잡힌 저녁 추천 메뉴"));
        assert!(text.contains("🥩 소고기 스테이크"));
    }

    #[test]
    fn test_render_untracked_nutrient_uses_fallback_symbol() {
        let text = render_report(&sample_report());
        assert!(text.contains("✨ 나트륨: 1200"));
    }

    #[test]
    fn test_render_balanced_recommendation() {
        let text = render_recommendation(&Recommendation::Balanced {
            message: "🌟 균형 잡힌 식단이네요!".to_string(),
        });
        assert!(text.contains("🌟"));
        assert!(!text.contains("- "));
    }
}
