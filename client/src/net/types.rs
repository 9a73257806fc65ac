//! Wire DTOs for the meal-planner REST API.
//!
//! DESIGN
//! ======
//! The backend is not owned by this crate and its payloads are loose: ids may
//! arrive as strings or numbers, optional fields may be absent or `null`, and
//! recipe bodies differ between local and provider-backed recipes. These types
//! absorb that looseness at the serde boundary so view code only sees
//! well-formed values.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Provider assumed for external recipes that omit one.
pub const DEFAULT_PROVIDER: &str = "spoonacular";

/// An authenticated user as returned by `auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Response body of `auth/login` and `auth/signup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl AuthResponse {
    /// The bearer token, preferring `token` over `access_token`.
    pub fn bearer_token(&self) -> Option<&str> {
        [self.token.as_deref(), self.access_token.as_deref()]
            .into_iter()
            .flatten()
            .find(|t| !t.trim().is_empty())
    }
}

/// Paginated list envelope shared by every collection endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Total row count, treating a missing total as zero.
    pub fn total_count(&self) -> u64 {
        self.total.unwrap_or(0)
    }
}

/// A day column in the weekly grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Day {
    #[default]
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    pub const ALL: [Day; 7] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri, Day::Sat, Day::Sun];

    /// Wire spelling (`"Mon"` .. `"Sun"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == raw)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A meal-type row in the weekly grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MealType {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner, MealType::Snack];

    /// Wire spelling (`"breakfast"`, `"lunch"`, `"dinner"`, `"snack"`).
    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == raw)
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies a recipe either in the user's own collection or at a provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RecipeRef {
    Local(i64),
    External { provider: String, external_id: String },
}

impl RecipeRef {
    /// Client route of the recipe detail view.
    pub fn detail_href(&self) -> String {
        match self {
            RecipeRef::Local(id) => format!("/recipe/local/{id}"),
            RecipeRef::External { provider, external_id } => {
                format!("/recipe/external/{provider}/{external_id}")
            }
        }
    }

    /// Stable key for keyed lists and in-flight tracking.
    pub fn key(&self) -> String {
        match self {
            RecipeRef::Local(id) => format!("local:{id}"),
            RecipeRef::External { provider, external_id } => format!("ext:{provider}:{external_id}"),
        }
    }
}

/// A recipe row from `recipes` or `recipes/search`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_or_number")]
    pub external_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl RecipeSummary {
    /// Provider-backed rows win over local ids when both are present.
    pub fn reference(&self) -> Option<RecipeRef> {
        if let Some(external_id) = &self.external_id {
            let provider = self
                .provider
                .as_deref()
                .filter(|p| !p.is_empty())
                .unwrap_or(DEFAULT_PROVIDER);
            return Some(RecipeRef::External {
                provider: provider.to_owned(),
                external_id: external_id.clone(),
            });
        }
        self.id.map(RecipeRef::Local)
    }

    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or("Untitled recipe")
    }
}

/// A meal plan. List endpoints omit `items`; the detail endpoint fills them.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MealPlan {
    pub id: i64,
    #[serde(default, alias = "week_Start")]
    pub week_start: Option<String>,
    #[serde(default = "Vec::new")]
    pub items: Vec<MealItem>,
    #[serde(default = "Vec::new")]
    pub shopping_items: Vec<ShoppingItem>,
}

impl MealPlan {
    /// Human label for selectors: the week start, or `Plan <id>`.
    pub fn label(&self) -> String {
        non_empty(self.week_start.as_deref()).map_or_else(|| format!("Plan {}", self.id), str::to_owned)
    }
}

/// One recipe assignment to a (day, meal type) slot.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MealItem {
    pub id: i64,
    #[serde(default)]
    pub meal_plan_id: Option<i64>,
    pub day: String,
    pub meal_type: String,
    #[serde(default)]
    pub recipe_id: Option<i64>,
    #[serde(default)]
    pub recipe: Option<RecipeSummary>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_or_number")]
    pub external_id: Option<String>,
}

impl MealItem {
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref())
            .or_else(|| self.recipe.as_ref().and_then(|r| non_empty(r.title.as_deref())))
            .unwrap_or("(no recipe)")
    }

    pub fn is_in_slot(&self, day: Day, meal_type: MealType) -> bool {
        self.day == day.as_str() && self.meal_type == meal_type.as_str()
    }
}

/// A grocery-list line derived server-side from a plan.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ShoppingItem {
    pub id: i64,
    #[serde(default)]
    pub meal_plan_id: Option<i64>,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_opt_string_or_number")]
    pub quantity: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_false")]
    pub checked: bool,
}

impl ShoppingItem {
    /// `name`, with ` x<quantity>` appended when a quantity is present.
    pub fn label(&self) -> String {
        match non_empty(self.quantity.as_deref()) {
            Some(qty) => format!("{} x{qty}", self.name),
            None => self.name.clone(),
        }
    }
}

/// Full recipe body from `recipes/:id` or `recipes/:provider/:external_id`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RecipeDetail {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub external_title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ingredients: Option<Ingredients>,
    #[serde(default)]
    pub steps: Option<Steps>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default, rename = "analyzedInstructions", deserialize_with = "deserialize_null_as_empty")]
    pub analyzed_instructions: Vec<InstructionBlock>,
    #[serde(default, rename = "sourceUrl")]
    pub source_url: Option<String>,
}

/// Local recipes store ingredients as text; provider recipes as structured lines.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Ingredients {
    Lines(Vec<IngredientLine>),
    Names(Vec<String>),
    Text(String),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct IngredientLine {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_or_number")]
    pub quantity: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Steps {
    List(Vec<String>),
    Text(String),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct InstructionBlock {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub steps: Vec<InstructionStep>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct InstructionStep {
    #[serde(default)]
    pub step: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn deserialize_opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected string or number, got {other}"))),
    }
}

fn deserialize_null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
