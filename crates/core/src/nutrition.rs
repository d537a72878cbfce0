//! Static food recommendations shown alongside an assessment.
//!
//! PCOS and PCOD share one list.

use crate::scoring::Condition;

const BREAST_FOODS: &[&str] = &[
    "Broccoli & cruciferous vegetables – May reduce cancer risk",
    "Berries – Rich in antioxidants",
    "Green tea – Contains anti-cancer catechins",
    "Turmeric with black pepper – Anti-inflammatory",
    "Walnuts – Reduce inflammation",
    "Garlic – May help slow tumor growth",
];

const PCOS_FOODS: &[&str] = &[
    "Cinnamon tea – Regulates insulin",
    "Spearmint tea – Reduces androgen levels",
    "Leafy greens – Rich in iron & vitamins",
    "Fatty fish – Reduce inflammation",
    "Flaxseeds – Hormone balancing",
    "Sweet potatoes – Low glycemic index",
];

const IRON_FOODS: &[&str] = &[
    "Spinach – Iron rich",
    "Lentils – Plant-based iron",
    "Beetroot juice – Boosts hemoglobin",
    "Pomegranate – Rich in iron",
    "Jaggery – Traditional iron source",
    "Vitamin C fruits – Improve iron absorption",
];

/// Recommended foods for a condition.
pub fn foods_for(condition: Condition) -> &'static [&'static str] {
    match condition {
        Condition::BreastCancer => BREAST_FOODS,
        Condition::Pcos | Condition::Pcod => PCOS_FOODS,
        Condition::IronDeficiency => IRON_FOODS,
    }
}
