//! Category value object and the per-transaction category list
//!
//! Categories are short alphanumeric labels. A transaction carries a small
//! set of them: duplicates collapse silently, insertion order is kept for
//! display, and equality ignores order.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::UniCashError;

static CATEGORY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]]{1,15}$").expect("category pattern compiles"));

/// A single category label. Immutable and guaranteed valid once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    /// Constraint message shown when a category fails validation
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Category names should be alphanumeric and up to 15 characters long.";

    /// Construct a Category, validating the input
    pub fn new(category: &str) -> Result<Self, UniCashError> {
        if Self::is_valid(category) {
            Ok(Self(category.to_string()))
        } else {
            Err(UniCashError::Validation(Self::MESSAGE_CONSTRAINTS))
        }
    }

    /// Returns true if the given string is a valid category name
    pub fn is_valid(category: &str) -> bool {
        CATEGORY_REGEX.is_match(category)
    }

    /// The category name as text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Category {
    type Err = UniCashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Category {
    type Error = UniCashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of categories attached to one transaction
///
/// Keeps insertion order for display. Equality is order-insensitive, so two
/// transactions tagged `food travel` and `travel food` compare equal.
#[derive(Debug, Clone, Default, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Category>", into = "Vec<Category>")]
pub struct CategoryList(Vec<Category>);

impl CategoryList {
    /// Constraint message shown when too many categories are supplied
    pub const MESSAGE_SIZE_CONSTRAINTS: &'static str =
        "There should only be a maximum of 5 unique categories per transaction.";

    /// Maximum number of unique categories per transaction
    pub const MAX_CATEGORIES: usize = 5;

    /// Build a category list from the given categories. Duplicates collapse
    /// silently; more than five unique categories is rejected.
    pub fn new(categories: Vec<Category>) -> Result<Self, UniCashError> {
        let mut unique: Vec<Category> = Vec::with_capacity(categories.len());
        for category in categories {
            if !unique.contains(&category) {
                unique.push(category);
            }
        }
        if unique.len() > Self::MAX_CATEGORIES {
            return Err(UniCashError::Validation(Self::MESSAGE_SIZE_CONSTRAINTS));
        }
        Ok(Self(unique))
    }

    /// An empty category list
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate the categories in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.0.iter()
    }

    /// Check whether any category equals the keyword, ignoring case
    pub fn contains_ignore_case(&self, keyword: &str) -> bool {
        self.0
            .iter()
            .any(|c| c.as_str().eq_ignore_ascii_case(keyword))
    }
}

impl PartialEq for CategoryList {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().all(|c| other.0.contains(c))
    }
}

impl TryFrom<Vec<Category>> for CategoryList {
    type Error = UniCashError;

    fn try_from(value: Vec<Category>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryList> for Vec<Category> {
    fn from(list: CategoryList) -> Self {
        list.0
    }
}

impl fmt::Display for CategoryList {
    /// Categories joined by a comma in insertion order, or "-" when empty
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "-");
        }
        let joined = self
            .0
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(s: &str) -> Category {
        Category::new(s).unwrap()
    }

    #[test]
    fn test_valid_categories() {
        assert!(Category::new("food").is_ok());
        assert!(Category::new("F").is_ok());
        assert!(Category::new("abcdefghij12345").is_ok()); // exactly 15
    }

    #[test]
    fn test_invalid_categories() {
        assert!(Category::new("").unwrap_err().is_validation());
        assert!(Category::new("abcdefghij123456").unwrap_err().is_validation()); // 16
        assert!(Category::new("food!").unwrap_err().is_validation());
        assert!(Category::new("two words").unwrap_err().is_validation());
        assert!(Category::new("крофна").unwrap_err().is_validation()); // ASCII only
    }

    #[test]
    fn test_category_equality_is_case_sensitive() {
        assert_ne!(category("Food"), category("food"));
        assert_eq!(category("food"), category("food"));
    }

    #[test]
    fn test_list_collapses_duplicates_silently() {
        let list = CategoryList::new(vec![category("food"), category("food"), category("fun")])
            .unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_list_rejects_more_than_five_unique() {
        let categories: Vec<Category> = ["a", "b", "c", "d", "e", "f"]
            .iter()
            .map(|s| category(s))
            .collect();
        let err = CategoryList::new(categories).unwrap_err();
        assert!(err.is_validation());

        // five unique plus a duplicate is still five
        let categories: Vec<Category> = ["a", "b", "c", "d", "e", "a"]
            .iter()
            .map(|s| category(s))
            .collect();
        assert_eq!(CategoryList::new(categories).unwrap().len(), 5);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let list =
            CategoryList::new(vec![category("zoo"), category("apple"), category("mid")]).unwrap();
        let names: Vec<&str> = list.iter().map(Category::as_str).collect();
        assert_eq!(names, ["zoo", "apple", "mid"]);
    }

    #[test]
    fn test_list_equality_ignores_order() {
        let a = CategoryList::new(vec![category("food"), category("travel")]).unwrap();
        let b = CategoryList::new(vec![category("travel"), category("food")]).unwrap();
        let c = CategoryList::new(vec![category("food")]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_contains_ignore_case() {
        let list = CategoryList::new(vec![category("Food")]).unwrap();
        assert!(list.contains_ignore_case("food"));
        assert!(list.contains_ignore_case("FOOD"));
        assert!(!list.contains_ignore_case("fod"));
    }

    #[test]
    fn test_display() {
        let list = CategoryList::new(vec![category("food"), category("travel")]).unwrap();
        assert_eq!(list.to_string(), "food, travel");
        assert_eq!(CategoryList::empty().to_string(), "-");
    }

    #[test]
    fn test_serialization() {
        let list = CategoryList::new(vec![category("food"), category("travel")]).unwrap();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, "[\"food\",\"travel\"]");
        let deserialized: CategoryList = serde_json::from_str(&json).unwrap();
        assert_eq!(list, deserialized);
    }

    #[test]
    fn test_deserializing_too_many_categories_fails() {
        let json = "[\"a\",\"b\",\"c\",\"d\",\"e\",\"f\"]";
        assert!(serde_json::from_str::<CategoryList>(json).is_err());
    }
}
