//! Flatten raw API objects into table rows.

use std::collections::HashSet;

use crate::sportradar::types::RawCompetition;
use crate::storage::models::{Category, Competition};

/// Default competition type when the source field is absent.
pub const DEFAULT_TYPE: &str = "tournament";

/// Default gender when the source field is absent.
pub const DEFAULT_GENDER: &str = "mixed";

/// Map raw competition objects to insertable rows.
///
/// Produces exactly one competition row per input object, identifiers
/// unmodified, with `type`/`gender` defaulted when absent. The distinct
/// nested categories come out as lookup rows (first occurrence wins) so the
/// foreign key is satisfiable at insert time. Empty input yields empty
/// output.
pub fn transform(raw: Vec<RawCompetition>) -> (Vec<Competition>, Vec<Category>) {
    let mut competitions = Vec::with_capacity(raw.len());
    let mut categories = Vec::new();
    let mut seen_categories = HashSet::new();

    for competition in raw {
        if let Some(category) = &competition.category {
            if seen_categories.insert(category.id.clone()) {
                categories.push(Category {
                    category_id: category.id.clone(),
                    category_name: category.name.clone(),
                });
            }
        }

        competitions.push(Competition {
            competition_id: competition.id,
            competition_name: competition.name,
            parent_id: competition.parent_id,
            kind: competition
                .kind
                .unwrap_or_else(|| DEFAULT_TYPE.to_string()),
            gender: competition
                .gender
                .unwrap_or_else(|| DEFAULT_GENDER.to_string()),
            category_id: competition.category.map(|c| c.id),
        });
    }

    (competitions, categories)
}
