//! Recipe catalog and detail view state.
//!
//! DESIGN
//! ======
//! Pagination is plain page/total arithmetic; there are no cursors. The
//! detail helpers flatten the backend's mixed ingredient and instruction
//! shapes into display lines.

#[cfg(test)]
#[path = "recipes_test.rs"]
mod recipes_test;

use crate::net::types::{Ingredients, Page, RecipeDetail, RecipeSummary, Steps};

/// Results per catalog page.
pub const CATALOG_PAGE_SIZE: u32 = 10;

/// Current position in a paginated listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, per_page: CATALOG_PAGE_SIZE, total: 0 }
    }
}

impl Pagination {
    /// Number of pages, never less than one.
    pub fn pages(&self) -> u32 {
        let per_page = u64::from(self.per_page.max(1));
        let pages = self.total.div_ceil(per_page).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn can_prev(&self, loading: bool) -> bool {
        !loading && self.page > 1
    }

    pub fn can_next(&self, loading: bool) -> bool {
        !loading && self.page < self.pages()
    }

    pub fn label(&self) -> String {
        format!("Page {} / {}", self.page, self.pages())
    }
}

/// Catalog view state: search term, current page of results, in-flight flags.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub term: String,
    pub results: Vec<RecipeSummary>,
    pub pagination: Pagination,
    pub loading: bool,
    /// Key of the recipe whose add-to-plan request is in flight.
    pub adding: Option<String>,
}

impl CatalogState {
    pub fn apply_page(&mut self, requested_page: u32, page: Page<RecipeSummary>) {
        self.pagination.total = page.total_count();
        self.pagination.page = page.page.unwrap_or(requested_page).max(1);
        self.results = page.items;
        self.loading = false;
    }

    /// A failed load empties the listing rather than showing stale rows.
    pub fn apply_failure(&mut self) {
        self.results.clear();
        self.pagination.total = 0;
        self.loading = false;
    }

    pub fn is_adding(&self, key: &str) -> bool {
        self.adding.as_deref() == Some(key)
    }
}

/// Title shown on the detail page.
pub fn recipe_title(detail: &RecipeDetail) -> String {
    [detail.title.as_deref(), detail.external_title.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|t| !t.is_empty())
        .unwrap_or("Recipe")
        .to_owned()
}

/// Ingredient lines as displayed: `quantity · name`, or whichever is present.
pub fn ingredient_lines(detail: &RecipeDetail) -> Vec<String> {
    match &detail.ingredients {
        None => Vec::new(),
        Some(Ingredients::Lines(lines)) => lines
            .iter()
            .filter_map(|line| {
                let name = line.name.as_deref().unwrap_or_default().trim();
                let qty = line.quantity.as_deref().unwrap_or_default().trim();
                match (qty.is_empty(), name.is_empty()) {
                    (true, true) => None,
                    (false, false) => Some(format!("{qty} · {name}")),
                    (true, false) => Some(name.to_owned()),
                    (false, true) => Some(qty.to_owned()),
                }
            })
            .collect(),
        Some(Ingredients::Names(names)) => non_blank_lines(names.iter().map(String::as_str)),
        Some(Ingredients::Text(text)) => non_blank_lines(text.lines()),
    }
}

/// Instruction paragraphs, taken from the first non-empty source among
/// `steps`, `instructions`, and `analyzedInstructions`.
pub fn instruction_paragraphs(detail: &RecipeDetail) -> Vec<String> {
    let text = match &detail.steps {
        Some(Steps::List(steps)) => steps.join("\n\n"),
        Some(Steps::Text(text)) => text.clone(),
        None => String::new(),
    };
    let text = if text.trim().is_empty() {
        detail.instructions.clone().unwrap_or_default()
    } else {
        text
    };
    let text = if text.trim().is_empty() {
        detail
            .analyzed_instructions
            .iter()
            .flat_map(|block| block.steps.iter())
            .filter_map(|s| s.step.as_deref())
            .collect::<Vec<_>>()
            .join("\n\n")
    } else {
        text
    };
    split_paragraphs(&text)
}

fn non_blank_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines.map(str::trim).filter(|l| !l.is_empty()).map(str::to_owned).collect()
}

/// Split on blank (whitespace-only) lines; each paragraph is trimmed.
fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n").trim().to_owned());
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n").trim().to_owned());
    }
    paragraphs
}
