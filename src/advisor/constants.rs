use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{Audience, RecommendationItem};

/// Minimum expected daily intake per nutrient for one audience.
///
/// Calorie figures assume lunch plus a dinner still to come.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdProfile {
    pub protein: f64,
    pub carbohydrate: f64,
    pub vitamin_c: f64,
    pub calcium: f64,
    pub calorie: f64,
}

pub const ELEMENTARY_THRESHOLDS: ThresholdProfile = ThresholdProfile {
    protein: 20.0,
    carbohydrate: 80.0,
    vitamin_c: 30.0,
    calcium: 300.0,
    calorie: 600.0,
};

pub const ADULT_THRESHOLDS: ThresholdProfile = ThresholdProfile {
    protein: 40.0,
    carbohydrate: 150.0,
    vitamin_c: 60.0,
    calcium: 600.0,
    calorie: 800.0,
};

/// Threshold profile for an audience.
pub fn thresholds_for(audience: Audience) -> ThresholdProfile {
    match audience {
        Audience::Elementary => ELEMENTARY_THRESHOLDS,
        Audience::Adult => ADULT_THRESHOLDS,
    }
}

/// A nutrient whose daily total fell below its threshold.
///
/// Variant order is the fixed check order. Iron, fat and vitamin A are
/// accumulated in totals but have no threshold in the current rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deficiency {
    /// Checked for the elementary profile only.
    Calorie,
    Protein,
    Carbohydrate,
    VitaminC,
    Calcium,
}

/// Candidates per deficiency category.
pub const POOL_SIZE: usize = 4;

/// Candidate dinner menus for one deficiency category.
///
/// The first protein reason names the audience's concern (성장기 for
/// elementary, 건강 유지 otherwise); everything else is fixed text.
pub fn candidate_pool(deficiency: Deficiency, audience: Audience) -> Vec<RecommendationItem> {
    let item = |menu: &str, reason: String| RecommendationItem {
        menu: menu.to_string(),
        reason,
    };

    match deficiency {
        Deficiency::Protein => {
            let concern = match audience {
                Audience::Elementary => "성장기",
                Audience::Adult => "건강 유지에",
            };
            vec![
                item(
                    "🍗 닭가슴살 샐러드",
                    format!("단백질이 부족할 수 있어요. {concern} 중요한 단백질을 보충해 주세요."),
                ),
                item(
                    "🥩 소고기 스테이크",
                    "양질의 단백질 섭취로 근육 강화와 활력을 높여주세요.".to_string(),
                ),
                item(
                    "🥚 달걀말이와 두부 조림",
                    "부담 없이 즐길 수 있는 단백질 풍부 메뉴입니다.".to_string(),
                ),
                item(
                    "🐟 고등어구이",
                    "오메가-3와 단백질을 한 번에 섭취할 수 있는 생선 요리입니다.".to_string(),
                ),
            ]
        }
        Deficiency::Carbohydrate => vec![
            item(
                "🍠 고구마 또는 현미밥",
                "활동에 필요한 에너지를 위해 탄수화물을 보충해 주세요.".to_string(),
            ),
            item(
                "🍞 통곡물 샌드위치",
                "복합 탄수화물로 포만감을 주고 에너지 지속에 도움을 줍니다.".to_string(),
            ),
            item(
                "🍜 잡채밥",
                "다양한 채소와 함께 맛있는 탄수화물을 섭취해 보세요.".to_string(),
            ),
            item(
                "🥟 만둣국",
                "따뜻한 국물과 함께 든든한 탄수화물을 섭취해 보세요.".to_string(),
            ),
        ],
        Deficiency::VitaminC => vec![
            item(
                "🍓 과일 샐러드",
                "면역력 증진에 좋은 비타민C를 섭취해 보세요.".to_string(),
            ),
            item(
                "🌶️ 파프리카 볶음",
                "싱싱한 채소로 비타민C를 채워주세요.".to_string(),
            ),
            item(
                "🥝 키위 또는 딸기",
                "간편하게 비타민C를 보충할 수 있는 과일입니다.".to_string(),
            ),
            item(
                "🥬 겉절이",
                "새콤달콤한 겉절이로 비타민C를 맛있게 보충해 보세요.".to_string(),
            ),
        ],
        Deficiency::Calcium => vec![
            item(
                "🥛 저지방 우유 또는 요거트",
                "뼈 건강에 필수적인 칼슘을 보충해 주세요.".to_string(),
            ),
            item(
                "🐟 멸치볶음",
                "칼슘 섭취에 좋은 한국인의 밥상 메뉴입니다.".to_string(),
            ),
            item(
                "🥦 브로콜리 스프",
                "부드러운 스프에 칼슘을 더해 보세요.".to_string(),
            ),
            item(
                "🧀 치즈 스틱",
                "간편하게 칼슘을 섭취할 수 있는 간식입니다.".to_string(),
            ),
        ],
        Deficiency::Calorie => vec![
            item(
                "🍞 시리얼과 우유",
                "간단하게 에너지를 보충할 수 있는 식사입니다.".to_string(),
            ),
            item(
                "🍌 바나나와 견과류",
                "건강한 지방과 탄수화물로 칼로리를 채워주세요.".to_string(),
            ),
            item(
                "🥞 팬케이크 (소량)",
                "부족한 칼로리를 맛있게 채울 수 있는 간식입니다.".to_string(),
            ),
            item(
                "🍚 주먹밥",
                "든든하고 간편하게 칼로리를 보충해 보세요.".to_string(),
            ),
        ],
    }
}

/// Affirmative message when every checked threshold is met.
pub fn balanced_message(audience: Audience) -> String {
    format!(
        "🌟 오늘의 급식은 {} 기준 충분히 균형 잡힌 식단이네요! 건강한 저녁 식사하세요.",
        audience.label()
    )
}

/// Intro sentence preceding the suggestion list.
pub fn suggestion_intro(audience: Audience) -> String {
    format!(
        "오늘 급식 영양소 분석 결과, {}에게 다음 저녁 메뉴를 추천합니다:",
        audience.label()
    )
}

/// Fixed illustrative symbol per nutrient name as it appears upstream.
pub static NUTRIENT_EMOJIS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("탄수화물", "🍚");
    m.insert("단백질", "🍗");
    m.insert("지방", "🥑");
    m.insert("비타민A", "🥕");
    m.insert("티아민", "🍞");
    m.insert("리보플라빈", "🥛");
    m.insert("비타민C", "🍊");
    m.insert("칼슘", "🦴");
    m.insert("철분", "🍎");
    m
});

/// Symbol for a nutrient name, with a fallback for anything untracked.
pub fn nutrient_emoji(name: &str) -> &'static str {
    NUTRIENT_EMOJIS.get(name).unwrap_or(&"✨")
}
