//! Deterministic prompt builders. Each prompt pins the full output schema,
//! every allowed enum value, and a hard only-JSON instruction; the repair
//! layer only strips fences, it does not dig JSON out of prose.

pub fn resume_extraction(resume_text: &str) -> String {
    format!(
        r#"
You are an expert resume parser. Extract structured data from the provided resume text and return it as valid JSON.

RESUME TEXT:
{}

Return ONLY valid JSON in this exact format (no additional text):

{{
  "personal": {{"firstName": "", "lastName": "", "dateOfBirth": "", "phone": "", "email": "", "linkedin": "", "github": "", "city": "", "state": "", "summary": "", "jobTitle": ""}},
  "experiences": [{{"type": "work", "title": "", "organization": "", "location": "", "startDate": "", "endDate": "", "current": false, "description": "", "achievements": [], "technologies": []}}],
  "education": [{{"type": "undergraduate", "schoolName": "", "location": "", "startDate": "", "endDate": "", "field": "", "degree": "", "gpa": "", "description": "", "achievements": [], "courses": []}}],
  "skills": {{
    "technicalSkills": [{{"name": "", "proficiency": "intermediate"}}],
    "softSkills": [{{"name": "", "proficiency": "intermediate"}}],
    "certifications": [{{"name": "", "issuer": "", "issueDate": "", "expirationDate": "", "doesNotExpire": false}}],
    "languages": [{{"name": "", "proficiency": "basic"}}],
    "hobbies": []
  }},
  "additional": {{"publications": [], "patents": [], "memberships": [], "awards": []}}
}}

CRITICAL REQUIREMENTS:
- experiences type: one of "work", "internship", "project", "volunteer"
- education type: one of "highSchool", "intermediate", "undergraduate", "graduate"
- skill proficiency: one of "beginner", "intermediate", "advanced", "expert"
- language proficiency: one of "basic", "intermediate", "advanced", "fluent"
- all dates in YYYY-MM-DD format
- use "" for anything not present in the resume, [] for empty lists
- Return valid JSON only, no markdown code blocks or explanations
- Do not add comments, trailing commas, or extra whitespace

you will output only valid JSON, never markdown, never text explanations.
Always ensure the output is syntactically valid JSON.
"#,
        resume_text
    )
}

pub fn resume_analysis(resume_text: &str) -> String {
    format!(
        r#"
You are a senior recruiter with deep technical expertise. Analyze the provided resume and return your assessment as valid JSON.

RESUME:
{}

Evaluate the resume objectively based on:
- Clarity and impact of the writing
- Use of metrics and concrete achievements
- Skills coverage and career progression
- Overall presentation

Return ONLY valid JSON in this exact format (no additional text):

{{
  "points": 75,
  "positive": ["strength one", "strength two"],
  "negative": ["improvement one", "improvement two"]
}}

CRITICAL REQUIREMENTS:
- points: an integer between 0 and 100, NOT a string
- positive: array of strings, each one concrete strength
- negative: array of strings, each one concrete improvement
- Return valid JSON only, no markdown code blocks or explanations
- Do not add comments, trailing commas, or extra whitespace
"#,
        resume_text
    )
}

pub fn professional_summary(
    job_title: &str,
    skills: &[String],
    experience_years: Option<u8>,
) -> String {
    let experience = match experience_years {
        Some(years) => format!("{} years of experience", years),
        None => "relevant experience".to_string(),
    };
    format!(
        r#"
You are a professional resume writer. Write a compelling professional summary for a {} with {}.

Key skills: {}

Write 2-3 sentences in first person without using "I". Output the summary as plain text as a single contiguous paragraph, no headings, no quotes, no markdown.
"#,
        job_title,
        experience,
        skills.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_prompt_embeds_resume_verbatim() {
        let prompt = resume_extraction("John Doe, Software Engineer");
        assert!(prompt.contains("John Doe, Software Engineer"));
        assert!(prompt.contains("Return ONLY valid JSON"));
        assert!(prompt.contains(r#""highSchool", "intermediate", "undergraduate", "graduate""#));
    }

    #[test]
    fn test_analysis_prompt_pins_integer_points() {
        let prompt = resume_analysis("some resume");
        assert!(prompt.contains("between 0 and 100"));
        assert!(prompt.contains("no markdown code blocks"));
    }
}
