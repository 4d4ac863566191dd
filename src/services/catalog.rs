//! Catalog loading and budget/keyword filtering.

use std::{io::Read, path::Path};

use crate::{
    error::{AppError, AppResult},
    models::{split_interests, CatalogItem},
};

/// Default number of candidates kept after ranking
pub const DEFAULT_TOP_N: usize = 25;

const REQUIRED_COLUMNS: [&str; 3] = ["name", "description", "price"];

/// In-memory gift catalog, in file order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Loads the catalog from a CSV file on disk
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)?;
        let catalog = Self::from_csv(reader)?;

        tracing::debug!(
            path = %path.display(),
            items = catalog.items.len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    /// Loads the catalog from any CSV source
    pub fn from_reader<R: Read>(source: R) -> AppResult<Self> {
        let reader = csv::ReaderBuilder::new().flexible(true).from_reader(source);
        Self::from_csv(reader)
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> AppResult<Self> {
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        let column = |name: &str| headers.iter().position(|h| h == name);
        let (Some(name_idx), Some(desc_idx), Some(price_idx)) =
            (column("name"), column("description"), column("price"))
        else {
            return Err(AppError::Schema(format!(
                "catalog must have columns: {}",
                REQUIRED_COLUMNS.join(",")
            )));
        };

        let mut items = Vec::new();
        for record in reader.records() {
            let record = record?;
            let cell = |idx: usize| record.get(idx).unwrap_or_default();
            items.push(CatalogItem::new(
                cell(name_idx),
                cell(desc_idx),
                CatalogItem::parse_price(cell(price_idx)),
            ));
        }

        Ok(Self { items })
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Selects and ranks catalog entries for the given interests and budget.
    ///
    /// Without keywords, in-budget items are returned cheapest first. With
    /// keywords, in-budget items mentioning any keyword are kept (or every
    /// in-budget item when none match) and ranked by distance from the budget
    /// midpoint, ties going to the cheaper item.
    pub fn filter(
        &self,
        interests: &str,
        budget_min: i64,
        budget_max: i64,
        top_n: usize,
    ) -> Vec<CatalogItem> {
        let keywords = split_interests(interests);
        let in_budget = self
            .items
            .iter()
            .filter(|item| item.within_budget(budget_min, budget_max));

        if keywords.is_empty() {
            let mut items: Vec<CatalogItem> = in_budget.cloned().collect();
            items.sort_by(|a, b| price_of(a).total_cmp(&price_of(b)));
            items.truncate(top_n);
            return items;
        }

        let mut candidates: Vec<CatalogItem> = Vec::new();
        for keyword in &keywords {
            for item in in_budget.clone().filter(|item| item.mentions(keyword)) {
                if !candidates.contains(item) {
                    candidates.push(item.clone());
                }
            }
        }

        if candidates.is_empty() {
            tracing::debug!(?keywords, "No keyword matches, using budget-only candidates");
            candidates = in_budget.cloned().collect();
        }

        let midpoint = (budget_min as f64 + budget_max as f64) / 2.0;
        candidates.sort_by(|a, b| {
            let gap_a = (price_of(a) - midpoint).abs();
            let gap_b = (price_of(b) - midpoint).abs();
            gap_a
                .total_cmp(&gap_b)
                .then_with(|| price_of(a).total_cmp(&price_of(b)))
        });
        candidates.truncate(top_n);
        candidates
    }
}

// Only called on in-budget items, which always carry a price.
fn price_of(item: &CatalogItem) -> f64 {
    item.price.unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
 Name , DESCRIPTION,Price
Bluetooth speaker,Portable speaker for music lovers,₹800
Vinyl record,Classic album on vinyl,1200
Novel box set,Three bestselling books,950
Yoga mat,Non-slip mat for fitness,600
Headphones,Over-ear music headphones,2500
Gift hamper,Assorted treats,unknown
Bookmark,Handmade leather bookmark,150
";

    fn sample() -> Catalog {
        Catalog::from_reader(SAMPLE.as_bytes()).unwrap()
    }

    fn names(items: &[CatalogItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_load_normalizes_headers_and_prices() {
        let catalog = sample();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.items()[0].name, "Bluetooth speaker");
        assert_eq!(catalog.items()[0].price, Some(800.0));
        assert_eq!(catalog.items()[5].price, None);
    }

    #[test]
    fn test_load_missing_column_is_schema_error() {
        let result = Catalog::from_reader("name,price\nMug,300\n".as_bytes());
        assert!(matches!(result, Err(AppError::Schema(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load("does/not/exist.csv");
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }

    #[test]
    fn test_filter_music_books_includes_bluetooth_speaker() {
        let items = sample().filter("music,books", 500, 2000, DEFAULT_TOP_N);
        assert!(items.iter().any(|i| i.name == "Bluetooth speaker"));
        // Midpoint 1250. Headphones are over budget, the bookmark under it.
        assert_eq!(names(&items), vec!["Novel box set", "Bluetooth speaker"]);
    }

    #[test]
    fn test_filter_keyword_results_stay_in_budget() {
        let items = sample().filter("music", 700, 1300, DEFAULT_TOP_N);
        assert!(!items.is_empty());
        for item in &items {
            assert!(item.within_budget(700, 1300), "{} out of budget", item.name);
        }
    }

    #[test]
    fn test_filter_without_keywords_sorts_by_price() {
        let items = sample().filter(" ; ", 0, 1000, DEFAULT_TOP_N);
        assert_eq!(
            names(&items),
            vec!["Bookmark", "Yoga mat", "Bluetooth speaker", "Novel box set"]
        );
    }

    #[test]
    fn test_filter_unmatched_keyword_falls_back_to_budget() {
        let items = sample().filter("gardening", 500, 1000, DEFAULT_TOP_N);
        // Midpoint 750: speaker (50), yoga mat (150), box set (200)
        assert_eq!(
            names(&items),
            vec!["Bluetooth speaker", "Yoga mat", "Novel box set"]
        );
    }

    #[test]
    fn test_filter_ties_break_on_price() {
        let catalog = Catalog::new(vec![
            CatalogItem::new("Pricier", "music", Some(700.0)),
            CatalogItem::new("Cheaper", "music", Some(300.0)),
        ]);
        let items = catalog.filter("music", 0, 1000, DEFAULT_TOP_N);
        assert_eq!(names(&items), vec!["Cheaper", "Pricier"]);
    }

    #[test]
    fn test_filter_deduplicates_across_keywords() {
        let items = sample().filter("music, speaker", 0, 5000, DEFAULT_TOP_N);
        let speakers = items.iter().filter(|i| i.name == "Bluetooth speaker").count();
        assert_eq!(speakers, 1);
    }

    #[test]
    fn test_filter_inverted_budget_is_empty() {
        assert!(sample().filter("music", 2000, 500, DEFAULT_TOP_N).is_empty());
        assert!(sample().filter("", 2000, 500, DEFAULT_TOP_N).is_empty());
    }

    #[test]
    fn test_filter_never_selects_unpriced_items() {
        let items = sample().filter("treats", 0, i64::MAX, DEFAULT_TOP_N);
        assert!(items.iter().all(|i| i.price.is_some()));
        assert!(!items.iter().any(|i| i.name == "Gift hamper"));
    }

    #[test]
    fn test_filter_respects_top_n() {
        let items: Vec<CatalogItem> = (0..40)
            .map(|i| CatalogItem::new(format!("Item {}", i), "desc", Some(i as f64 * 10.0)))
            .collect();
        let catalog = Catalog::new(items);
        assert_eq!(catalog.filter("", 0, 1000, DEFAULT_TOP_N).len(), DEFAULT_TOP_N);
        assert_eq!(catalog.filter("desc", 0, 1000, 5).len(), 5);
    }
}
