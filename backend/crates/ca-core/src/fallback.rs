//! Canned payloads returned when the model output is unusable or the API
//! quota is exhausted.

use crate::{
    ActionPlan, CareerRecommendation, CareerSuggestion, Course, CourseDetail, Profile,
    ReverseJobMapping, RoadmapStep, SituationSpecific,
};

pub const FALLBACK_SUGGESTIONS_NOTE: &str = "Fallback used due to parsing issue";

pub const FALLBACK_ACTION_PLAN_NOTE: &str = "This is a simplified action plan due to AI service limitations. For a more detailed plan, please try again later.";

const PLACEHOLDER_SKILLS: [&str; 4] = [
    "Your Subjects",
    "Your Interests",
    "Your Strengths",
    "Your Goals",
];

/// One generic suggestion per skill
pub fn fallback_suggestions(skills: &[String]) -> Vec<CareerSuggestion> {
    skills
        .iter()
        .map(|skill| CareerSuggestion {
            title: format!("Career related to {skill}"),
            description: format!("Explore exciting opportunities in {skill} related fields."),
        })
        .collect()
}

/// A single generic recommendation seeded from the profile's subjects.
///
/// A profile with no subjects, whether the list is missing or empty, gets
/// the placeholder chips.
pub fn fallback_recommendation(profile: &Profile) -> CareerRecommendation {
    let relevant_skills = if profile.favorite_subjects.is_empty() {
        PLACEHOLDER_SKILLS.iter().map(|s| s.to_string()).collect()
    } else {
        profile.favorite_subjects.iter().take(4).cloned().collect()
    };

    CareerRecommendation {
        title: String::from("Career Path Based on Your Profile"),
        match_percentage: Some(85),
        description: String::from(
            "🚀 Transform your passion into impact! Your profile aligns with exciting opportunities.",
        ),
        relevant_skills_from_profile: relevant_skills,
        growth_potential: String::from(
            "High Growth - Excellent advancement opportunities with multiple specialization paths.",
        ),
    }
}

/// A five-step generic plan for the first career
pub fn fallback_action_plan(careers: &[String], skills: &[String]) -> ActionPlan {
    let career = careers
        .first()
        .map(String::as_str)
        .unwrap_or("Selected career");

    let skills = if skills.is_empty() {
        vec![String::from("Research relevant skills for this career")]
    } else {
        skills.to_vec()
    };

    ActionPlan {
        roadmap_json: vec![
            RoadmapStep::new(
                1,
                "Research and Learn",
                format!("Begin by researching {career} fundamentals and understanding the field."),
                &[],
            ),
            RoadmapStep::new(
                2,
                "Acquire Core Skills",
                "Learn and practice the essential skills required for this career path.",
                &[1],
            ),
            RoadmapStep::new(
                3,
                "Build Portfolio",
                "Create projects and compile a portfolio showcasing your abilities.",
                &[2],
            ),
            RoadmapStep::new(
                4,
                "Network and Connect",
                "Build professional connections in your field through events and online platforms.",
                &[1],
            ),
            RoadmapStep::new(
                5,
                "Apply for Opportunities",
                "Start applying for internships, entry-level positions, or freelance work.",
                &[2, 3, 4],
            ),
        ],
        reverse_job_mapping: ReverseJobMapping {
            skills,
            courses: vec![
                course("Fundamentals Course", "Online Learning Platforms", "Beginner"),
                course(
                    "Advanced Specialization",
                    "Industry Certifications",
                    "Intermediate",
                ),
            ],
            tools: vec![String::from(
                "Research industry-standard tools for this career",
            )],
        },
        situation_specific: SituationSpecific {
            freelancing: String::from("Research freelance opportunities in this field."),
            top_recruiters: vec![String::from("Research companies hiring for this role")],
            government_initiatives: vec![String::from("Research relevant government programs")],
            emerging_trends: vec![String::from(
                "Stay updated on industry publications and news",
            )],
        },
        additional_skills_needed: [
            "Communication skills",
            "Problem-solving abilities",
            "Time management",
            "Industry-specific technical skills",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        note: Some(String::from(FALLBACK_ACTION_PLAN_NOTE)),
    }
}

fn course(name: &str, provider: &str, level: &str) -> Course {
    Course::Detailed(CourseDetail {
        name: name.to_string(),
        provider: Some(provider.to_string()),
        level: Some(level.to_string()),
    })
}
