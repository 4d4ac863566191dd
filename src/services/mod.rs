pub mod catalog;
pub mod fallback;
pub mod prompt;
pub mod providers;
pub mod recommendations;

pub use catalog::Catalog;
pub use recommendations::{Recommendation, Recommender};
