use crate::CareerRecommendation;

use serde_json::json;

#[test]
fn test_recommendation_accepts_percentage_variants() {
    let cases = [
        (json!(88), Some(88)),
        (json!(87.6), Some(88)),
        (json!("90%"), Some(90)),
        (json!("75-95%"), Some(75)),
        (json!(140), Some(100)),
        (json!("high"), None),
    ];

    for (raw, expected) in cases {
        let rec: CareerRecommendation = serde_json::from_value(json!({
            "title": "Data Analyst",
            "matchPercentage": raw
        }))
        .unwrap();
        assert_eq!(rec.match_percentage, expected, "input {raw}");
    }
}

#[test]
fn test_recommendation_defaults_optional_fields() {
    let rec: CareerRecommendation =
        serde_json::from_value(json!({ "title": "UX Designer" })).unwrap();

    assert_eq!(rec.title, "UX Designer");
    assert_eq!(rec.match_percentage, None);
    assert!(rec.description.is_empty());
    assert!(rec.relevant_skills_from_profile.is_empty());
}

#[test]
fn test_recommendation_requires_title() {
    let result: Result<CareerRecommendation, _> =
        serde_json::from_value(json!({ "description": "No title here" }));
    assert!(result.is_err());
}

#[test]
fn test_recommendation_serializes_camel_case() {
    let rec = CareerRecommendation {
        title: "Nurse".into(),
        match_percentage: Some(80),
        description: "Care for patients.".into(),
        relevant_skills_from_profile: vec!["Biology".into()],
        growth_potential: "High Growth".into(),
    };

    let value = serde_json::to_value(&rec).unwrap();
    assert_eq!(value["matchPercentage"], 80);
    assert_eq!(value["relevantSkillsFromProfile"][0], "Biology");
    assert_eq!(value["growthPotential"], "High Growth");
}
