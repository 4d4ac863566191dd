//! The recommendation pipeline: filter → prompt → generate → normalize.

use std::{path::PathBuf, sync::Arc};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    error::{AppError, AppResult, GenerationError},
    models::{CatalogItem, GiftQuery, Suggestion, SuggestionSource, REASON_SEPARATOR},
    services::{
        catalog::{Catalog, DEFAULT_TOP_N},
        fallback, prompt,
        providers::TextGenerator,
    },
};

/// Number of suggestions in every response
pub const SUGGESTION_COUNT: usize = 5;

/// Catalog picks kept when the model is unavailable
const MAX_CATALOG_PICKS: usize = 2;

/// Final ranked list plus where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub suggestions: Vec<Suggestion>,
    pub source: SuggestionSource,
}

impl Recommendation {
    /// Newline-joined, 1-indexed list
    pub fn render(&self) -> String {
        self.suggestions
            .iter()
            .map(Suggestion::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Recommendation service
///
/// Holds only the catalog location and the text generator. The catalog itself
/// is read fresh for each request.
#[derive(Clone)]
pub struct Recommender {
    catalog_path: PathBuf,
    generator: Arc<dyn TextGenerator>,
}

impl Recommender {
    pub fn new(catalog_path: impl Into<PathBuf>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            generator,
        }
    }

    /// Runs the full pipeline and returns the rendered list
    pub async fn recommend(&self, query: &GiftQuery) -> AppResult<String> {
        let mut rng = StdRng::from_entropy();
        let recommendation = self.recommend_with_rng(query, &mut rng).await?;
        Ok(recommendation.render())
    }

    /// Runs the full pipeline with a caller-supplied random source
    pub async fn recommend_with_rng<R: Rng + Send>(
        &self,
        query: &GiftQuery,
        rng: &mut R,
    ) -> AppResult<Recommendation> {
        let catalog = self.load_catalog().await?;
        let filtered = catalog.filter(
            &query.interests,
            query.budget_min,
            query.budget_max,
            DEFAULT_TOP_N,
        );

        tracing::info!(
            catalog_items = catalog.len(),
            candidates = filtered.len(),
            "Catalog filtered"
        );

        let prompt = prompt::build_prompt(query, &filtered);
        let generated = self.generator.generate(&prompt).await;

        let recommendation = assemble(&query.interests, &filtered, generated, rng);

        tracing::info!(
            source = %recommendation.source,
            suggestions = recommendation.suggestions.len(),
            "Recommendation assembled"
        );

        Ok(recommendation)
    }

    async fn load_catalog(&self) -> AppResult<Catalog> {
        let path = self.catalog_path.clone();
        tokio::task::spawn_blocking(move || Catalog::load(path))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
    }
}

/// Turns the model outcome into the final ranked list.
///
/// Model failures and empty output use up to two catalog picks topped up with
/// fallback ideas. Output with no numbered or bulleted lines is discarded in
/// favour of fallback ideas. Short lists are topped up from the fallback pool
/// so the result always has [`SUGGESTION_COUNT`] entries.
pub fn assemble<R: Rng + ?Sized>(
    interests: &str,
    filtered: &[CatalogItem],
    generated: Result<String, GenerationError>,
    rng: &mut R,
) -> Recommendation {
    let (mut lines, source) = match generated {
        Ok(text) if !text.is_empty() => {
            let lines = extract_lines(&text);
            if lines.is_empty() {
                tracing::warn!("Model output had no usable lines, using fallback");
                (
                    fallback::suggest(interests, SUGGESTION_COUNT, rng),
                    SuggestionSource::Fallback,
                )
            } else {
                (
                    lines.into_iter().take(SUGGESTION_COUNT).collect(),
                    SuggestionSource::Model,
                )
            }
        }
        outcome => {
            if let Err(e) = &outcome {
                tracing::warn!(reason = e.kind(), error = %e, "Text generation failed, using fallback");
            } else {
                tracing::warn!("Text generation returned no text, using fallback");
            }
            let mut picks: Vec<String> = filtered
                .iter()
                .take(MAX_CATALOG_PICKS)
                .map(|item| format!("{} {} good match", item.name, REASON_SEPARATOR))
                .collect();
            let needed = SUGGESTION_COUNT - picks.len();
            picks.extend(fallback::suggest(interests, needed, rng));
            (picks, SuggestionSource::Fallback)
        }
    };

    top_up(&mut lines, interests, rng);

    let suggestions = lines
        .into_iter()
        .take(SUGGESTION_COUNT)
        .enumerate()
        .map(|(i, text)| Suggestion::new(i + 1, text))
        .collect();

    Recommendation {
        suggestions,
        source,
    }
}

/// Fills a short list with fallback ideas it does not already contain.
///
/// Every fallback pool holds at least [`SUGGESTION_COUNT`] distinct entries,
/// so sampling that many and skipping duplicates always fills the gap.
fn top_up<R: Rng + ?Sized>(lines: &mut Vec<String>, interests: &str, rng: &mut R) {
    if lines.len() >= SUGGESTION_COUNT {
        return;
    }

    for extra in fallback::suggest(interests, SUGGESTION_COUNT, rng) {
        if lines.len() >= SUGGESTION_COUNT {
            break;
        }
        if !lines.contains(&extra) {
            lines.push(extra);
        }
    }
}

/// Extracts numbered (`1.`) or dashed (`-`) lines from free-form model text,
/// with the leading marker removed.
pub fn extract_lines(text: &str) -> Vec<String> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| is_numbered(line) || line.starts_with('-'))
        .map(strip_marker)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// `true` for lines opening with one or more digits followed by a period
fn is_numbered(line: &str) -> bool {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    rest.len() < line.len() && rest.starts_with('.')
}

/// Drops leading bullets, whitespace, a number and its periods
fn strip_marker(line: &str) -> &str {
    line.trim_start_matches(|c: char| c == '-' || c == '•' || c.is_whitespace())
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .trim_start_matches('.')
        .trim()
}
