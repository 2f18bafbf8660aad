use serde::{Deserialize, Serialize};

/// Taste axis of the condition-based menu suggestion
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TastePreference {
    /// 매콤
    Spicy,
    /// 담백
    Mild,
    /// 시원
    Refreshing,
}

/// Meal-style axis of the condition-based menu suggestion
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MealStyle {
    /// 국물
    Soup,
    /// 밥
    Rice,
    /// 면
    Noodles,
}

/// Browsable menu category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    WarmSoup,
    SpicyFood,
    LightMeal,
    HeartyMeat,
}

/// Menu suggested when no taste/style pairing matches the table
pub const FALLBACK_MENU: &str = "비빔밥";

impl MenuCategory {
    pub const ALL: [MenuCategory; 4] = [
        MenuCategory::WarmSoup,
        MenuCategory::SpicyFood,
        MenuCategory::LightMeal,
        MenuCategory::HeartyMeat,
    ];

    /// Menus belonging to this category; every category maps to at least one menu
    pub fn menus(self) -> &'static [&'static str] {
        match self {
            MenuCategory::WarmSoup => &["김치찌개", "순두부찌개", "부대찌개"],
            MenuCategory::SpicyFood => &["제육볶음", "쭈꾸미볶음", "마라탕"],
            MenuCategory::LightMeal => &["비빔밥", "물냉면"],
            MenuCategory::HeartyMeat => &["제육볶음", "갈비탕"],
        }
    }
}

/// Looks up the suggested menu for a taste/style pairing
///
/// Pairings outside the table fall back to [`FALLBACK_MENU`].
pub fn suggest_menu(taste: TastePreference, style: MealStyle) -> &'static str {
    match (taste, style) {
        (TastePreference::Spicy, MealStyle::Rice) => "제육볶음",
        (TastePreference::Spicy, MealStyle::Soup) => "부대찌개",
        (TastePreference::Mild, MealStyle::Noodles) => "물냉면",
        (TastePreference::Refreshing, MealStyle::Soup) => "된장찌개",
        _ => FALLBACK_MENU,
    }
}
