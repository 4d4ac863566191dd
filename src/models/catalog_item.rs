/// A purchasable gift from the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub name: String,
    pub description: String,
    /// `None` when the source price could not be parsed
    pub price: Option<f64>,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Option<f64>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }

    /// Parses a price cell, keeping only digits and decimal points.
    ///
    /// Currency decorations such as `₹ 1,299` or `$45` are tolerated.
    /// Anything that is still not a number after stripping yields `None`.
    pub fn parse_price(raw: &str) -> Option<f64> {
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        if cleaned.is_empty() {
            return None;
        }

        cleaned.parse::<f64>().ok().filter(|p| p.is_finite())
    }

    /// Inclusive budget check. Items without a price never fit.
    pub fn within_budget(&self, budget_min: i64, budget_max: i64) -> bool {
        match self.price {
            Some(price) => price >= budget_min as f64 && price <= budget_max as f64,
            None => false,
        }
    }

    /// Case-insensitive substring match against name or description.
    /// `keyword` must already be lowercase.
    pub fn mentions(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(keyword)
            || self.description.to_lowercase().contains(keyword)
    }
}
