// Prompt constants for the recommendation request.
// Reuses the JSON-only system directive from llm_client::prompts.

/// Recommendation prompt template.
/// Replace: {academic_metric}, {preferred_course}, {budget_category},
///          {budget_table}, {preferred_location}, {expected_count}
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"As EduGuideAI, provide {expected_count} REAL Indian college recommendations for this student.

STUDENT PROFILE:
- Academic Metric (may be 12th board marks, a competitive rank, or an exam score): {academic_metric}
- Preferred Course: {preferred_course}
- Budget Category: {budget_category} ({budget_table})
- Preferred Location: {preferred_location}

CRITICAL INSTRUCTIONS:
1. ANALYZE METRIC: The student has provided ONE academic metric ({academic_metric}). Identify whether it is a board percentage, a competitive rank (such as JEE AIR), or an exam score, and use it to determine eligibility for each college.
2. PRIORITIZE LOCATION: Find real colleges strictly within or very near {preferred_location} first.
3. BUDGET MATCH: Total fees must fall inside budget category {budget_category}. Do not recommend colleges outside this tier.
4. LOCATION NOTE: If you cannot find {expected_count} colleges in {preferred_location} that match the budget and eligibility, suggest the best alternatives in nearby cities and explain the substitution in 'locationNote'. Omit 'locationNote' otherwise.
5. STUDY PLAN: Create a personalized study plan for the single most relevant entrance exam for {preferred_course}.
6. ASSIGN IDs: Give each college a unique 'id' string. No two colleges may share an id.

Opening and closing ranks are strings per category (GEN, OBC, SC, ST). Use "N/A" when a value is not published.
Use "N/A" for 'foreignTieUps' when the college has no foreign partnerships.

Return ONLY valid JSON matching the response schema."#;
