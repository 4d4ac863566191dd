use std::fmt::Write;

use crate::models::{CatalogItem, GiftQuery};

/// Catalog items shown to the model as inspiration
const MAX_PROMPT_ITEMS: usize = 10;

const TASK_INSTRUCTIONS: &str = "\
Task:
- Suggest EXACTLY 5 gift ideas.
- Use catalog items as inspiration, but also suggest related/experiential gifts.
- Keep each suggestion short: \"1. Gift Name — short reason\".
- Ensure variety and relevance to interests + budget.";

/// Renders the instruction sent to the text-generation model.
///
/// Pure: the same query and items always produce the same prompt.
pub fn build_prompt(query: &GiftQuery, items: &[CatalogItem]) -> String {
    let mut catalog_lines = String::new();
    for item in items.iter().take(MAX_PROMPT_ITEMS) {
        let price = match item.price {
            Some(price) => format!("Rs.{}", price.trunc() as i64),
            None => "NA".to_string(),
        };
        // Writing to a String cannot fail
        let _ = writeln!(
            catalog_lines,
            "- {} ({}) — {}",
            item.name, price, item.description
        );
    }

    format!(
        "You are a gift recommendation expert.\n\
         \n\
         User:\n\
         - Occasion: {occasion}\n\
         - Age: {age}\n\
         - Gender: {gender}\n\
         - Interests: {interests}\n\
         - Budget: {min} - {max}\n\
         \n\
         Catalog items:\n\
         {catalog}\n\
         \n\
         {task}",
        occasion = query.occasion,
        age = query.age,
        gender = query.gender,
        interests = query.interests,
        min = query.budget_min,
        max = query.budget_max,
        catalog = catalog_lines,
        task = TASK_INSTRUCTIONS,
    )
}
