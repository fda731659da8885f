//! Unit tests for payload parsing and the transform step

use super::transform::{transform, DEFAULT_GENDER, DEFAULT_TYPE};
use super::types::{CompetitionsResponse, RawCategory, RawCompetition};

fn raw(id: &str, name: &str) -> RawCompetition {
    RawCompetition {
        id: id.to_string(),
        name: name.to_string(),
        parent_id: None,
        kind: None,
        gender: None,
        category: None,
    }
}

#[test]
fn test_parse_competitions_payload() {
    let payload = r#"{
        "generated_at": "2024-11-28T10:00:00+00:00",
        "competitions": [
            {
                "id": "sr:competition:2555",
                "name": "ATP Finals",
                "type": "singles",
                "gender": "men",
                "category": {"id": "sr:category:3", "name": "ATP"}
            },
            {
                "id": "sr:competition:2556",
                "name": "Exhibition Event"
            }
        ]
    }"#;

    let parsed: CompetitionsResponse = serde_json::from_str(payload).unwrap();
    assert_eq!(parsed.competitions.len(), 2);
    assert_eq!(parsed.competitions[0].kind.as_deref(), Some("singles"));
    assert_eq!(
        parsed.competitions[0].category.as_ref().unwrap().id,
        "sr:category:3"
    );
    assert!(parsed.competitions[1].category.is_none());
}

#[test]
fn test_parse_payload_without_competitions_key() {
    let parsed: CompetitionsResponse = serde_json::from_str("{}").unwrap();
    assert!(parsed.competitions.is_empty());
}

#[test]
fn test_transform_preserves_count_and_ids() {
    let input = vec![raw("sr:competition:1", "A"), raw("sr:competition:2", "B")];

    let (competitions, _) = transform(input);

    assert_eq!(competitions.len(), 2);
    assert_eq!(competitions[0].competition_id, "sr:competition:1");
    assert_eq!(competitions[1].competition_id, "sr:competition:2");
}

#[test]
fn test_transform_substitutes_defaults() {
    // The example from the feed: no type, no gender, no category.
    let input = vec![raw("1", "ATP Finals")];

    let (competitions, categories) = transform(input);

    assert_eq!(competitions.len(), 1);
    let row = &competitions[0];
    assert_eq!(row.competition_id, "1");
    assert_eq!(row.competition_name, "ATP Finals");
    assert_eq!(row.parent_id, None);
    assert_eq!(row.kind, DEFAULT_TYPE);
    assert_eq!(row.gender, DEFAULT_GENDER);
    assert_eq!(row.category_id, None);
    assert!(categories.is_empty());
}

#[test]
fn test_transform_keeps_explicit_fields() {
    let mut competition = raw("sr:competition:2555", "ATP Finals");
    competition.kind = Some("singles".to_string());
    competition.gender = Some("men".to_string());
    competition.parent_id = Some("sr:competition:2000".to_string());

    let (competitions, _) = transform(vec![competition]);

    assert_eq!(competitions[0].kind, "singles");
    assert_eq!(competitions[0].gender, "men");
    assert_eq!(
        competitions[0].parent_id.as_deref(),
        Some("sr:competition:2000")
    );
}

#[test]
fn test_transform_empty_input() {
    let (competitions, categories) = transform(Vec::new());
    assert!(competitions.is_empty());
    assert!(categories.is_empty());
}

#[test]
fn test_transform_dedupes_categories() {
    let category = RawCategory {
        id: "sr:category:3".to_string(),
        name: "ATP".to_string(),
    };

    let mut first = raw("sr:competition:1", "A");
    first.category = Some(category.clone());
    let mut second = raw("sr:competition:2", "B");
    second.category = Some(category);

    let (competitions, categories) = transform(vec![first, second]);

    assert_eq!(competitions.len(), 2);
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].category_id, "sr:category:3");
    assert_eq!(categories[0].category_name, "ATP");
    assert_eq!(
        competitions[0].category_id.as_deref(),
        Some("sr:category:3")
    );
}
