use crate::{Profile, Stage};

use serde_json::json;

fn profile(value: serde_json::Value) -> Profile {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_profile_reads_camel_case_fields() {
    let p = profile(json!({
        "fullName": "Asha Rao",
        "stage": "College",
        "currentSkills": ["Python", "SQL"],
        "city": "Pune"
    }));

    assert_eq!(p.full_name.as_deref(), Some("Asha Rao"));
    assert_eq!(p.stage(), Some(Stage::College));
    assert_eq!(p.current_skills, vec!["Python", "SQL"]);
    assert_eq!(p.extra["city"], "Pune");
}

#[test]
fn test_profile_accepts_comma_separated_lists() {
    let p = profile(json!({
        "favoriteSubjects": "Math, Physics , ,Art"
    }));

    assert_eq!(p.favorite_subjects, vec!["Math", "Physics", "Art"]);
}

#[test]
fn test_profile_accepts_null_lists() {
    let p = profile(json!({ "coreSkills": null }));
    assert!(p.core_skills.is_empty());
}

#[test]
fn test_profile_skills_follow_stage() {
    let base = json!({
        "favoriteSubjects": ["Biology"],
        "currentSkills": ["Rust"],
        "coreSkills": ["Negotiation"]
    });

    let mut school = base.clone();
    school["stage"] = json!("School");
    assert_eq!(profile(school).skills(), ["Biology"]);

    let mut college = base.clone();
    college["stage"] = json!("College");
    assert_eq!(profile(college).skills(), ["Rust"]);

    let mut professional = base.clone();
    professional["stage"] = json!("Professional");
    assert_eq!(profile(professional).skills(), ["Negotiation"]);

    // Unknown or missing stage uses core skills
    assert_eq!(profile(base).skills(), ["Negotiation"]);
}

#[test]
fn test_profile_prompt_json_keeps_unknown_fields() {
    let p = profile(json!({
        "fullName": "Asha",
        "dreamCareers": ["Astronaut"],
        "age": 17
    }));

    let rendered: serde_json::Value = serde_json::from_str(&p.to_prompt_json()).unwrap();
    assert_eq!(rendered["fullName"], "Asha");
    assert_eq!(rendered["dreamCareers"][0], "Astronaut");
    assert_eq!(rendered["age"], 17);
    assert!(rendered.get("coreSkills").is_none());
}

#[test]
fn test_profile_prompt_json_is_the_profile_as_sent() {
    let sent = json!({
        "fullName": "Ravi",
        "favoriteSubjects": [],
        "currentSkills": "Python, SQL",
        "stage": "College"
    });

    let p = profile(sent.clone());
    let rendered: serde_json::Value = serde_json::from_str(&p.to_prompt_json()).unwrap();

    assert_eq!(rendered, sent);
    assert_eq!(p.current_skills, vec!["Python", "SQL"]);
}

#[test]
fn test_profile_built_in_code_serializes_typed_fields() {
    let p = Profile {
        full_name: Some(String::from("Meera")),
        core_skills: vec![String::from("Sales")],
        ..Default::default()
    };

    let rendered: serde_json::Value = serde_json::from_str(&p.to_prompt_json()).unwrap();
    assert_eq!(rendered, json!({ "fullName": "Meera", "coreSkills": ["Sales"] }));
}

#[test]
fn test_profile_odd_field_types_are_read_not_rejected() {
    let p = profile(json!({
        "fullName": "Kiran",
        "stage": 2,
        "email": null,
        "favoriteSubjects": { "Math": true, "Art": false, "Physics": true },
        "currentSkills": 42,
        "coreSkills": false
    }));

    assert_eq!(p.full_name.as_deref(), Some("Kiran"));
    assert_eq!(p.stage.as_deref(), Some("2"));
    assert_eq!(p.stage(), None);
    assert!(p.email.is_none());
    assert_eq!(p.favorite_subjects, vec!["Math", "Physics"]);
    assert_eq!(p.current_skills, vec!["42"]);
    assert!(p.core_skills.is_empty());
}

#[test]
fn test_profile_blank_stage_is_none() {
    let p = profile(json!({ "stage": "  " }));
    assert!(p.stage.is_none());
}

#[test]
fn test_profile_non_object_is_kept_for_prompt() {
    let p = profile(json!("just text"));

    assert!(p.full_name.is_none());
    assert!(p.skills().is_empty());
    assert_eq!(p.to_prompt_json(), r#""just text""#);
}
