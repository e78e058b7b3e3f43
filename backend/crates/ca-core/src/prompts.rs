//! Prompt templates sent to the model.

use crate::Profile;

/// Ask for five career paths formatted as `*Career Title*: Description`.
pub fn recommend_prompt(skills: &[String]) -> String {
    format!(
        "Based on these skills: {skills}, suggest 5 exciting career paths.
For each career, provide:
1. Career Title
2. A catchy 2-3 sentence description that highlights the exciting aspects, impact, and opportunities

Format each career as:
*Career Title*: Description here

Make the descriptions engaging and inspiring to motivate users to explore these careers further.",
        skills = skills.join(", ")
    )
}

/// Ask for exactly five personalised careers as a JSON array.
pub fn analyze_profile_prompt(profile: &Profile) -> String {
    format!(
        "You are an expert career counselor. Analyze this user's COMPLETE profile and recommend 5 personalized career paths based on EXACTLY what they have entered. Do not add anything they haven't mentioned.

USER PROFILE ANALYSIS:
{profile}

For each of the 5 career recommendations, provide:
- *title*: Clear career name
- *matchPercentage*: 75-95%
- *description*: 2-3 sentence engaging description
- *relevantSkillsFromProfile*: 3-4 items from user's actual profile
- *growthPotential*: High Growth / Moderate Growth / Low Growth

Return ONLY a valid JSON array with exactly 5 career objects.",
        profile = profile.to_prompt_json()
    )
}

/// Ask for a strict-JSON action plan with the four sections the roadmap
/// view renders.
pub fn action_plan_prompt(careers: &[String], skills: &[String]) -> String {
    format!(
        r#"
You are an expert AI career coach and career strategist.
The user has selected one or more careers and provided their current skills.

Your task is to generate a *strict JSON output* ONLY.
The JSON must include the following keys:

1. "roadmap_json" → structured step-by-step roadmap for the selected career(s).
   - Each step must include:
     - "id" → unique step number
     - "title" → short title of the step
     - "description" → detailed description
     - "dependencies" → array of step ids that must be completed first

2. "reverse_job_mapping" → map the career(s) back to required:
   - "skills" → list of skills
   - "courses" → list of courses / certifications, each with "name", "provider" and "level"
   - "tools" → list of tools / software

3. "situation_specific" → additional insights:
   - "freelancing" → freelancing opportunities (a short paragraph)
   - "top_recruiters" → list of top recruiters
   - "government_initiatives" → list of government initiatives
   - "emerging_trends" → list of emerging trends in the domain

4. "additional_skills_needed" → list of extra skills the user should acquire for this career

⚠ IMPORTANT:
- Output must be *valid JSON only*. No text outside JSON.
- Include *facts and sources* wherever applicable.
- Make sure the JSON structure is frontend-ready for visualization with React Flow, Recharts, and other visualization libraries.
- Provide a simplified response if possible to avoid exceeding token limits.

User input:
- Career(s): {careers}
- Skills: {skills}
"#,
        careers = careers.join(", "),
        skills = skills.join(", ")
    )
}
