use serde::{Deserialize, Serialize};
use std::fmt;

/// Device name used when a recipe page does not name one.
pub const UNKNOWN_DEVICE: &str = "unknown device";

/// A quantity of an item consumed or produced by a recipe.
///
/// Two ingredients are the same entry when both `item` and `amount` match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    pub amount: u32,
    pub item: String,
}

impl Ingredient {
    pub fn new(item: impl Into<String>, amount: u32) -> Self {
        Self {
            amount,
            item: item.into(),
        }
    }
}

/// A recipe page that yielded every mandatory field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecipe {
    pub name: String,
    pub slug: String,
    pub device: String,
    pub crafting_s: u64,
    pub inputs: Vec<Ingredient>,
    pub outputs: Vec<Ingredient>,
    pub url: String,
}

/// Mandatory field whose absence turns a page into a failure record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingField {
    #[serde(rename = "no crafting time")]
    CraftingTime,
    #[serde(rename = "no outputs")]
    Outputs,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::CraftingTime => f.write_str("no crafting time"),
            MissingField::Outputs => f.write_str("no outputs"),
        }
    }
}

/// Why a page could not be turned into a recipe.
///
/// Serialized as a single `reason` or `error` key next to the other
/// failure fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureCause {
    /// The page was fetched but lacked a mandatory field
    Reason(MissingField),
    /// Fetching or processing the page failed
    Error(String),
}

/// A page that could not be turned into a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedRecipe {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub parse_error: bool,
    #[serde(flatten)]
    pub cause: FailureCause,
}

impl FailedRecipe {
    /// Failure record for a fetched page missing a mandatory field.
    pub fn missing(
        url: impl Into<String>,
        slug: impl Into<String>,
        name: impl Into<String>,
        field: MissingField,
    ) -> Self {
        Self {
            url: url.into(),
            slug: Some(slug.into()),
            name: Some(name.into()),
            parse_error: true,
            cause: FailureCause::Reason(field),
        }
    }

    /// Minimal failure record for a page that could not be fetched.
    pub fn errored(url: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            url: url.into(),
            slug: None,
            name: None,
            parse_error: true,
            cause: FailureCause::Error(error.to_string()),
        }
    }
}

/// One entry of the recipe collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipe {
    Parsed(ParsedRecipe),
    Failed(FailedRecipe),
}

impl Recipe {
    pub fn url(&self) -> &str {
        match self {
            Recipe::Parsed(recipe) => &recipe.url,
            Recipe::Failed(failure) => &failure.url,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Recipe::Parsed(_))
    }

    pub fn as_parsed(&self) -> Option<&ParsedRecipe> {
        match self {
            Recipe::Parsed(recipe) => Some(recipe),
            Recipe::Failed(_) => None,
        }
    }
}

impl From<ParsedRecipe> for Recipe {
    fn from(recipe: ParsedRecipe) -> Self {
        Recipe::Parsed(recipe)
    }
}

impl From<FailedRecipe> for Recipe {
    fn from(failure: FailedRecipe) -> Self {
        Recipe::Failed(failure)
    }
}

/// Counts of parsed and failed entries in a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub parsed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn of(recipes: &[Recipe]) -> Self {
        let parsed = recipes.iter().filter(|r| r.is_parsed()).count();
        Self {
            total: recipes.len(),
            parsed,
            failed: recipes.len() - parsed,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} recipes ({} parsed, {} failed)",
            self.total, self.parsed, self.failed
        )
    }
}
