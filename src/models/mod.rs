mod catalog_item;
mod gift_query;
mod suggestion;

pub use catalog_item::CatalogItem;
pub use gift_query::{split_interests, GiftQuery};
pub use suggestion::{Suggestion, SuggestionSource, REASON_SEPARATOR};
