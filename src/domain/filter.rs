//! Catalog filter
//!
//! Query parameters arrive as raw strings and are parsed permissively:
//! anything blank or malformed is treated as absent instead of rejected.

use serde::{Deserialize, Serialize};

/// Raw catalog query parameters, exactly as submitted by the listing form.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct MovieFilterParams {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub min_year: Option<String>,
    pub max_year: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub sort_by: Option<String>,
}

/// Single ordering key for the catalog listing. No tie-break key is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Title,
    YearDesc,
    YearAsc,
    PriceDesc,
    PriceAsc,
}

impl SortKey {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "title" => Some(SortKey::Title),
            "year_desc" | "-year" => Some(SortKey::YearDesc),
            "year_asc" | "year" => Some(SortKey::YearAsc),
            "price_desc" | "-price" => Some(SortKey::PriceDesc),
            "price_asc" | "price" => Some(SortKey::PriceAsc),
            _ => None,
        }
    }
}

/// Parsed filter: every field optional, all present fields AND'ed together.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct MovieFilter {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort_by: Option<SortKey>,
}

impl MovieFilter {
    pub fn from_params(params: &MovieFilterParams) -> Self {
        Self {
            search: non_blank(&params.search),
            genre: non_blank(&params.genre),
            min_year: parse_number(&params.min_year),
            max_year: parse_number(&params.max_year),
            min_price: parse_price(&params.min_price),
            max_price: parse_price(&params.max_price),
            sort_by: params.sort_by.as_deref().and_then(SortKey::parse),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == MovieFilter::default()
    }

    /// Text constraints (search over title/description, genre) that the
    /// database cannot evaluate with Unicode case folding.
    pub fn matches_text(&self, title: &str, description: &str, genre: &str) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !title.to_lowercase().contains(&needle)
                && !description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        match &self.genre {
            Some(wanted) => genre.to_lowercase().contains(&wanted.to_lowercase()),
            None => true,
        }
    }
}

fn non_blank(raw: &Option<String>) -> Option<String> {
    raw.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn parse_number(raw: &Option<String>) -> Option<i32> {
    raw.as_deref().and_then(|s| s.trim().parse().ok())
}

fn parse_price(raw: &Option<String>) -> Option<f64> {
    raw.as_deref()
        .and_then(|s| s.trim().replace(',', ".").parse::<f64>().ok())
        .filter(|p| p.is_finite() && *p >= 0.0)
}
