use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three payment domains offered by the portal.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Fees,
    Cafeteria,
    Hostel,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 3] = [Self::Fees, Self::Cafeteria, Self::Hostel];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Fees => "School Fees Payment",
            Self::Cafeteria => "Cafeteria Payments",
            Self::Hostel => "Hostel Accommodation",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Self::Fees => "Secure academic fee processing with instant confirmation",
            Self::Cafeteria => "Smart meal payment system with advanced planning",
            Self::Hostel => "Accommodation booking & payment with real-time updates",
        }
    }

    /// Heading shown above the item list.
    pub fn selection_heading(&self) -> &'static str {
        match self {
            Self::Hostel => "Select Accommodation",
            _ => "Select Payment Items",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fees => "fees",
            Self::Cafeteria => "cafeteria",
            Self::Hostel => "hostel",
        };
        f.write_str(name)
    }
}

impl FromStr for ServiceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fees" => Ok(Self::Fees),
            "cafeteria" => Ok(Self::Cafeteria),
            "hostel" => Ok(Self::Hostel),
            other => Err(format!("unknown service category '{other}'")),
        }
    }
}

/// A purchasable entry of a category catalog.
///
/// Custom-amount items carry a `unit_price` of zero; the amount is entered by
/// the student instead.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct CatalogItem {
    pub id: &'static str,
    pub name: &'static str,
    pub unit_price: u64,
    pub description: &'static str,
    pub is_custom_amount: bool,
}

impl CatalogItem {
    const fn fixed(
        id: &'static str,
        name: &'static str,
        unit_price: u64,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            unit_price,
            description,
            is_custom_amount: false,
        }
    }

    const fn custom(id: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            id,
            name,
            unit_price: 0,
            description,
            is_custom_amount: true,
        }
    }
}

static FEES: [CatalogItem; 6] = [
    CatalogItem::fixed("tuition", "Tuition Fees", 50_000, "Full semester tuition payment"),
    CatalogItem::fixed("library", "Library Fees", 2_000, "Access to library resources"),
    CatalogItem::fixed("lab", "Laboratory Fees", 5_000, "Laboratory equipment and materials"),
    CatalogItem::fixed("sports", "Sports Fees", 1_500, "Sports facilities and activities"),
    CatalogItem::fixed("medical", "Medical Fees", 3_000, "Campus health services"),
    CatalogItem::custom("custom-fee", "Other Fees", "Custom payment amount"),
];

static CAFETERIA: [CatalogItem; 6] = [
    CatalogItem::fixed("breakfast", "Breakfast Package", 150, "Daily breakfast meal"),
    CatalogItem::fixed("lunch", "Lunch Package", 250, "Daily lunch meal"),
    CatalogItem::fixed("dinner", "Dinner Package", 200, "Daily dinner meal"),
    CatalogItem::fixed("snacks", "Snacks & Beverages", 100, "Light snacks and drinks"),
    CatalogItem::fixed("weekly", "Weekly Meal Plan", 1_200, "Complete weekly meal package"),
    CatalogItem::custom("custom-meal", "Custom Amount", "Custom meal payment"),
];

static HOSTEL: [CatalogItem; 5] = [
    CatalogItem::fixed("shared-basic", "Shared Room - Basic", 15_000, "Basic shared accommodation"),
    CatalogItem::fixed(
        "shared-premium",
        "Shared Room - Premium",
        20_000,
        "Premium shared room with amenities",
    ),
    CatalogItem::fixed(
        "personal-standard",
        "Personal Room - Standard",
        35_000,
        "Private room with standard facilities",
    ),
    CatalogItem::fixed(
        "personal-deluxe",
        "Personal Room - Deluxe",
        45_000,
        "Luxury private room with premium amenities",
    ),
    CatalogItem::custom("custom-hostel", "Other Payments", "Custom accommodation payment"),
];

/// Items of a category in display order.
pub fn items_for(category: ServiceCategory) -> &'static [CatalogItem] {
    match category {
        ServiceCategory::Fees => &FEES,
        ServiceCategory::Cafeteria => &CAFETERIA,
        ServiceCategory::Hostel => &HOSTEL,
    }
}

pub fn find(category: ServiceCategory, id: &str) -> Option<&'static CatalogItem> {
    items_for(category).iter().find(|item| item.id == id)
}
