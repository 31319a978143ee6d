//! IAB tier-1 content categories.
//!
//! OpenRTB classifies content and ads with the IAB content taxonomy. Only the
//! 26 tier-1 categories are modelled here; their numeric codes follow the IAB
//! identifiers (`IAB1` is code 1, `IAB26` is code 26).
//!
//! Tier-2 sub-categories (`IAB1-1`, `IAB17-44`, ...) have no variant, so
//! [`ContentCategory::from_code`](crate::TaxonomyCategory::from_code) returns
//! `None` for any code outside 1..=26 and a resource naming them loses those
//! records with an "unknown destination category code" warning. A mapping
//! that targets sub-categories needs its own [`TaxonomyCategory`] type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::traits::TaxonomyCategory;

/// IAB tier-1 content category.
///
/// # Example
///
/// ```
/// use adcat_model::ContentCategory;
///
/// let category: ContentCategory = "iab7".parse().unwrap();
/// assert_eq!(category, ContentCategory::HealthFitness);
/// assert_eq!(category.to_string(), "IAB7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u32)]
pub enum ContentCategory {
    #[serde(rename = "IAB1")]
    ArtsEntertainment = 1,
    #[serde(rename = "IAB2")]
    Automotive = 2,
    #[serde(rename = "IAB3")]
    Business = 3,
    #[serde(rename = "IAB4")]
    Careers = 4,
    #[serde(rename = "IAB5")]
    Education = 5,
    #[serde(rename = "IAB6")]
    FamilyParenting = 6,
    #[serde(rename = "IAB7")]
    HealthFitness = 7,
    #[serde(rename = "IAB8")]
    FoodDrink = 8,
    #[serde(rename = "IAB9")]
    HobbiesInterests = 9,
    #[serde(rename = "IAB10")]
    HomeGarden = 10,
    #[serde(rename = "IAB11")]
    LawGovernmentPolitics = 11,
    #[serde(rename = "IAB12")]
    News = 12,
    #[serde(rename = "IAB13")]
    PersonalFinance = 13,
    #[serde(rename = "IAB14")]
    Society = 14,
    #[serde(rename = "IAB15")]
    Science = 15,
    #[serde(rename = "IAB16")]
    Pets = 16,
    #[serde(rename = "IAB17")]
    Sports = 17,
    #[serde(rename = "IAB18")]
    StyleFashion = 18,
    #[serde(rename = "IAB19")]
    TechnologyComputing = 19,
    #[serde(rename = "IAB20")]
    Travel = 20,
    #[serde(rename = "IAB21")]
    RealEstate = 21,
    #[serde(rename = "IAB22")]
    Shopping = 22,
    #[serde(rename = "IAB23")]
    ReligionSpirituality = 23,
    #[serde(rename = "IAB24")]
    Uncategorized = 24,
    /// Content that does not fit the standard taxonomy.
    #[serde(rename = "IAB25")]
    NonStandardContent = 25,
    /// Content that is illegal in the serving jurisdiction.
    #[serde(rename = "IAB26")]
    IllegalContent = 26,
}

const ALL: [ContentCategory; 26] = [
    ContentCategory::ArtsEntertainment,
    ContentCategory::Automotive,
    ContentCategory::Business,
    ContentCategory::Careers,
    ContentCategory::Education,
    ContentCategory::FamilyParenting,
    ContentCategory::HealthFitness,
    ContentCategory::FoodDrink,
    ContentCategory::HobbiesInterests,
    ContentCategory::HomeGarden,
    ContentCategory::LawGovernmentPolitics,
    ContentCategory::News,
    ContentCategory::PersonalFinance,
    ContentCategory::Society,
    ContentCategory::Science,
    ContentCategory::Pets,
    ContentCategory::Sports,
    ContentCategory::StyleFashion,
    ContentCategory::TechnologyComputing,
    ContentCategory::Travel,
    ContentCategory::RealEstate,
    ContentCategory::Shopping,
    ContentCategory::ReligionSpirituality,
    ContentCategory::Uncategorized,
    ContentCategory::NonStandardContent,
    ContentCategory::IllegalContent,
];

impl ContentCategory {
    /// All categories in code order.
    pub const fn all() -> &'static [ContentCategory] {
        &ALL
    }

    /// The IAB identifier, e.g. `"IAB12"` for News.
    pub fn iab_id(self) -> String {
        format!("IAB{}", self as u32)
    }

    /// Returns true for the categories that flag content rather than describe it.
    pub fn is_sensitive(self) -> bool {
        matches!(self, Self::NonStandardContent | Self::IllegalContent)
    }
}

impl TaxonomyCategory for ContentCategory {
    fn from_code(code: u32) -> Option<Self> {
        let index = usize::try_from(code.checked_sub(1)?).ok()?;
        ALL.get(index).copied()
    }

    fn code(self) -> u32 {
        self as u32
    }

    fn label(self) -> &'static str {
        match self {
            Self::ArtsEntertainment => "Arts & Entertainment",
            Self::Automotive => "Automotive",
            Self::Business => "Business",
            Self::Careers => "Careers",
            Self::Education => "Education",
            Self::FamilyParenting => "Family & Parenting",
            Self::HealthFitness => "Health & Fitness",
            Self::FoodDrink => "Food & Drink",
            Self::HobbiesInterests => "Hobbies & Interests",
            Self::HomeGarden => "Home & Garden",
            Self::LawGovernmentPolitics => "Law, Gov't & Politics",
            Self::News => "News",
            Self::PersonalFinance => "Personal Finance",
            Self::Society => "Society",
            Self::Science => "Science",
            Self::Pets => "Pets",
            Self::Sports => "Sports",
            Self::StyleFashion => "Style & Fashion",
            Self::TechnologyComputing => "Technology & Computing",
            Self::Travel => "Travel",
            Self::RealEstate => "Real Estate",
            Self::Shopping => "Shopping",
            Self::ReligionSpirituality => "Religion & Spirituality",
            Self::Uncategorized => "Uncategorized",
            Self::NonStandardContent => "Non-Standard Content",
            Self::IllegalContent => "Illegal Content",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IAB{}", *self as u32)
    }
}

/// Error returned when a string names no known content category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown content category: {input}")]
pub struct ParseCategoryError {
    input: String,
}

impl FromStr for ContentCategory {
    type Err = ParseCategoryError;

    /// Accepts the IAB identifier (`IAB7`), the bare numeric code (`7`) or the
    /// variant name (`HealthFitness`), all case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let upper = trimmed.to_ascii_uppercase();
        let digits = upper.strip_prefix("IAB").unwrap_or(&upper);

        let by_code = digits
            .parse::<u32>()
            .ok()
            .and_then(<Self as TaxonomyCategory>::from_code);
        let resolved = by_code.or_else(|| {
            ALL.iter()
                .copied()
                .find(|category| format!("{category:?}").eq_ignore_ascii_case(trimmed))
        });

        resolved.ok_or_else(|| ParseCategoryError {
            input: s.to_string(),
        })
    }
}
