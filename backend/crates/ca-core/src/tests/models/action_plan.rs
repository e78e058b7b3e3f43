use crate::{ActionPlan, Course, DEFAULT_FREELANCING};

use serde_json::json;

#[test]
fn test_action_plan_from_full_object() {
    let plan = ActionPlan::from_value(json!({
        "roadmap_json": [
            { "id": 1, "title": "Learn SQL", "description": "Basics", "dependencies": [] },
            { "id": "2", "title": "Build dashboards", "description": "Tableau", "dependencies": ["1"] }
        ],
        "reverse_job_mapping": {
            "skills": ["SQL", "Statistics"],
            "courses": ["Google Data Analytics", { "name": "SQL for Data Science", "provider": "Coursera", "level": "Beginner" }],
            "tools": ["Excel", "Tableau"]
        },
        "situation_specific": {
            "freelancing": "Upwork has steady demand.",
            "top_recruiters": ["Deloitte"],
            "government_initiatives": ["Skill India"],
            "emerging_trends": ["AI-assisted analytics"]
        },
        "additional_skills_needed": ["Storytelling"]
    }))
    .unwrap();

    assert_eq!(plan.roadmap_json.len(), 2);
    assert_eq!(plan.roadmap_json[1].id, 2);
    assert_eq!(plan.roadmap_json[1].dependencies, vec![1]);
    assert_eq!(plan.reverse_job_mapping.courses.len(), 2);
    assert!(matches!(plan.reverse_job_mapping.courses[0], Course::Named(_)));
    assert!(matches!(plan.reverse_job_mapping.courses[1], Course::Detailed(_)));
    assert_eq!(plan.situation_specific.top_recruiters, vec!["Deloitte"]);
    assert_eq!(plan.additional_skills_needed, vec!["Storytelling"]);
    assert!(plan.note.is_none());
}

#[test]
fn test_action_plan_missing_sections_get_defaults() {
    let plan = ActionPlan::from_value(json!({ "roadmap_json": [] })).unwrap();

    assert!(plan.roadmap_json.is_empty());
    assert!(plan.reverse_job_mapping.skills.is_empty());
    assert_eq!(plan.situation_specific.freelancing, DEFAULT_FREELANCING);
    assert!(plan.additional_skills_needed.is_empty());
}

#[test]
fn test_action_plan_malformed_section_is_replaced_not_fatal() {
    let plan = ActionPlan::from_value(json!({
        "roadmap_json": "step one, then step two",
        "additional_skills_needed": ["Git"]
    }))
    .unwrap();

    assert!(plan.roadmap_json.is_empty());
    assert_eq!(plan.additional_skills_needed, vec!["Git"]);
}

#[test]
fn test_action_plan_bad_step_does_not_discard_other_steps() {
    let plan = ActionPlan::from_value(json!({
        "roadmap_json": [
            { "id": 1, "title": "Learn Python", "dependencies": [] },
            { "id": 2, "title": "Learn SQL", "dependencies": [1] },
            { "id": "step-3", "title": "Build a portfolio", "dependencies": [2] }
        ]
    }))
    .unwrap();

    let ids: Vec<u32> = plan.roadmap_json.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_action_plan_comma_separated_courses_keep_sibling_fields() {
    let plan = ActionPlan::from_value(json!({
        "reverse_job_mapping": {
            "skills": ["Python", "SQL"],
            "courses": "Coursera ML, Kaggle",
            "tools": ["Git"]
        }
    }))
    .unwrap();

    let mapping = &plan.reverse_job_mapping;
    assert_eq!(mapping.skills, vec!["Python", "SQL"]);
    assert_eq!(
        mapping.courses,
        vec![
            Course::Named(String::from("Coursera ML")),
            Course::Named(String::from("Kaggle"))
        ]
    );
    assert_eq!(mapping.tools, vec!["Git"]);
}

#[test]
fn test_action_plan_odd_field_types_keep_sibling_fields() {
    let plan = ActionPlan::from_value(json!({
        "reverse_job_mapping": {
            "skills": ["Excel"],
            "courses": [{ "title": "Intro to BI", "provider": 42 }, 7],
            "tools": true
        },
        "situation_specific": {
            "freelancing": 3,
            "top_recruiters": { "Acme": true, "Globex": false },
            "emerging_trends": ["Edge AI"]
        }
    }))
    .unwrap();

    assert_eq!(plan.reverse_job_mapping.skills, vec!["Excel"]);
    assert_eq!(
        plan.reverse_job_mapping.courses,
        vec![
            Course::Named(String::from("Intro to BI")),
            Course::Named(String::from("7"))
        ]
    );
    assert!(plan.reverse_job_mapping.tools.is_empty());
    assert_eq!(plan.situation_specific.freelancing, "3");
    assert_eq!(plan.situation_specific.top_recruiters, vec!["Acme"]);
    assert_eq!(plan.situation_specific.emerging_trends, vec!["Edge AI"]);
}

#[test]
fn test_action_plan_recruiter_objects_use_name() {
    let plan = ActionPlan::from_value(json!({
        "situation_specific": {
            "freelancing": ["Fiverr", "Upwork"],
            "top_recruiters": [{ "name": "Infosys", "source": "LinkedIn" }]
        }
    }))
    .unwrap();

    assert_eq!(plan.situation_specific.freelancing, "Fiverr; Upwork");
    assert_eq!(plan.situation_specific.top_recruiters, vec!["Infosys"]);
}

#[test]
fn test_action_plan_rejects_non_object() {
    assert!(ActionPlan::from_value(json!([1, 2, 3])).is_err());
}

#[test]
fn test_action_plan_serializes_all_sections() {
    let value = serde_json::to_value(ActionPlan::default()).unwrap();

    assert!(value["roadmap_json"].is_array());
    assert!(value["reverse_job_mapping"]["courses"].is_array());
    assert_eq!(value["situation_specific"]["freelancing"], DEFAULT_FREELANCING);
    assert!(value["additional_skills_needed"].is_array());
    assert!(value.get("note").is_none());
}
