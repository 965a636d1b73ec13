//! Fail-open decode of the model's untyped response into a `ResumeRecord`.
//! Resume extraction is best-effort: absent or malformed fields default
//! instead of failing the request, since partial data beats a hard failure.

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

use super::spec::{
    AdditionalSections, Certification, EducationEntry, EducationType, ExperienceEntry,
    ExperienceType, Language, LanguageProficiency, LooseEntry, PersonalInfo, ResumeRecord,
    Skill, SkillProficiency, SkillSet,
};

const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%d %b %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

const MONTH_FORMATS: [&str; 3] = ["%Y-%m", "%b %Y", "%B %Y"];

pub fn decode_resume(value: &Value) -> ResumeRecord {
    ResumeRecord {
        personal: decode_personal(&value["personal"]),
        experiences: items(&value["experiences"]).iter().map(decode_experience).collect(),
        education: items(&value["education"]).iter().map(decode_education).collect(),
        skills: decode_skills(&value["skills"]),
        additional: decode_additional(&value["additional"]),
    }
}

fn decode_personal(value: &Value) -> PersonalInfo {
    PersonalInfo {
        first_name: text(&value["firstName"]),
        last_name: text(&value["lastName"]),
        date_of_birth: date(&value["dateOfBirth"]),
        phone: text(&value["phone"]),
        email: text(&value["email"]),
        linkedin: text(&value["linkedin"]),
        github: text(&value["github"]),
        city: text(&value["city"]),
        state: text(&value["state"]),
        summary: text(&value["summary"]),
        job_title: text(&value["jobTitle"]),
    }
}

fn decode_experience(value: &Value) -> ExperienceEntry {
    let kind = ExperienceType::from_raw(&text(&value["type"]));
    ExperienceEntry {
        id: kind.tag().to_string(),
        kind,
        title: text(&value["title"]),
        organization: text(&value["organization"]),
        location: text(&value["location"]),
        start_date: date(&value["startDate"]),
        end_date: date(&value["endDate"]),
        current: flag(&value["current"]),
        description: text(&value["description"]),
        achievements: text_items(&value["achievements"]),
        technologies: text_items(&value["technologies"]),
    }
}

fn decode_education(value: &Value) -> EducationEntry {
    let kind = EducationType::from_raw(&text(&value["type"]));
    EducationEntry {
        id: kind.tag().to_string(),
        kind,
        school_name: text(&value["schoolName"]),
        location: text(&value["location"]),
        start_date: date(&value["startDate"]),
        end_date: date(&value["endDate"]),
        field: text(&value["field"]),
        degree: text(&value["degree"]),
        gpa: text(&value["gpa"]),
        description: text(&value["description"]),
        achievements: text_items(&value["achievements"]),
        courses: text_items(&value["courses"]),
    }
}

fn decode_skills(value: &Value) -> SkillSet {
    SkillSet {
        technical_skills: items(&value["technicalSkills"])
            .iter()
            .map(|skill| decode_skill(skill, "technical"))
            .collect(),
        soft_skills: items(&value["softSkills"])
            .iter()
            .map(|skill| decode_skill(skill, "soft"))
            .collect(),
        certifications: items(&value["certifications"]).iter().map(decode_certification).collect(),
        languages: items(&value["languages"]).iter().map(decode_language).collect(),
        hobbies: text_items(&value["hobbies"]),
    }
}

fn decode_skill(value: &Value, kind: &str) -> Skill {
    Skill {
        id: kind.to_string(),
        name: text(&value["name"]),
        kind: kind.to_string(),
        proficiency: SkillProficiency::from_raw(&text(&value["proficiency"])),
    }
}

fn decode_certification(value: &Value) -> Certification {
    let does_not_expire = flag(&value["doesNotExpire"]);
    let expiration = date(&value["expirationDate"]);
    Certification {
        id: "certification".to_string(),
        name: text(&value["name"]),
        issuer: text(&value["issuer"]),
        issue_date: date(&value["issueDate"]),
        // whatever the model returned, a non-expiring certification
        // carries no expiry
        expiration_date: (!does_not_expire && !expiration.is_empty()).then_some(expiration),
        does_not_expire,
    }
}

fn decode_language(value: &Value) -> Language {
    Language {
        id: "language".to_string(),
        name: text(&value["name"]),
        proficiency: LanguageProficiency::from_raw(&text(&value["proficiency"])),
    }
}

fn decode_additional(value: &Value) -> AdditionalSections {
    AdditionalSections {
        publications: loose_entries(&value["publications"]),
        patents: loose_entries(&value["patents"]),
        memberships: loose_entries(&value["memberships"]),
        awards: loose_entries(&value["awards"]),
    }
}

fn loose_entries(value: &Value) -> Vec<LooseEntry> {
    items(value)
        .iter()
        .filter_map(Value::as_object)
        .map(|entry| {
            entry
                .iter()
                .map(|(key, field)| (key.clone(), Value::String(text(field))))
                .collect()
        })
        .collect()
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn items(value: &Value) -> &[Value] {
    value.as_array().map(Vec::as_slice).unwrap_or(&[])
}

fn text_items(value: &Value) -> Vec<String> {
    items(value).iter().map(text).filter(|entry| !entry.is_empty()).collect()
}

fn date(value: &Value) -> String {
    normalize_date(&text(value))
}

/// Normalizes anything date-shaped to `YYYY-MM-DD`; unparseable input
/// becomes an empty string rather than an error.
pub fn normalize_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return parsed.date_naive().format("%Y-%m-%d").to_string();
    }
    for fmt in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, fmt) {
            return parsed.format("%Y-%m-%d").to_string();
        }
    }
    for fmt in MONTH_FORMATS {
        let padded = format!("{} 1", trimmed);
        let day_fmt = format!("{} %d", fmt);
        if let Ok(parsed) = NaiveDate::parse_from_str(&padded, &day_fmt) {
            return parsed.format("%Y-%m-%d").to_string();
        }
    }
    if let Ok(year) = trimmed.parse::<i32>() {
        if (1900..=2100).contains(&year) {
            return format!("{}-01-01", year);
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_maps_types_and_mirrors_ids() {
        let response = json!({
            "personal": {"firstName": "John", "lastName": "Doe", "phone": 9876543210u64},
            "experiences": [
                {"type": "job", "title": "Software Engineer", "organization": "Acme",
                 "startDate": "2021-03-01", "current": true,
                 "achievements": ["shipped v1"], "technologies": ["rust"]},
                {"type": "INTERN", "title": "SWE Intern"}
            ],
            "education": [
                {"type": "secondary", "schoolName": "City Junior College"},
                {"type": "bachelors", "schoolName": "State University", "gpa": 3.8}
            ]
        });
        let record = decode_resume(&response);

        assert_eq!(record.personal.first_name, "John");
        assert_eq!(record.personal.phone, "9876543210");
        assert_eq!(record.personal.email, "");

        assert_eq!(record.experiences[0].kind, ExperienceType::Work);
        assert_eq!(record.experiences[0].id, "work");
        assert!(record.experiences[0].current);
        assert_eq!(record.experiences[1].kind, ExperienceType::Internship);
        assert_eq!(record.experiences[1].id, "internship");

        assert_eq!(record.education[0].kind, EducationType::Intermediate);
        assert_eq!(record.education[0].id, "intermediate");
        assert_eq!(record.education[1].kind, EducationType::Undergraduate);
        assert_eq!(record.education[1].gpa, "3.8");

        assert!(record.skills.technical_skills.is_empty());
        assert!(record.additional.awards.is_empty());
    }

    #[test]
    fn test_decode_skills_and_languages() {
        let response = json!({
            "skills": {
                "technicalSkills": [{"name": "Rust", "proficiency": "Proficient"}],
                "softSkills": [{"name": "Communication"}],
                "languages": [{"name": "French", "proficiency": "native"}],
                "hobbies": ["chess", ""]
            }
        });
        let record = decode_resume(&response);
        let technical = &record.skills.technical_skills[0];
        assert_eq!(technical.name, "Rust");
        assert_eq!(technical.kind, "technical");
        assert_eq!(technical.id, "technical");
        assert_eq!(technical.proficiency, SkillProficiency::Advanced);
        assert_eq!(
            record.skills.soft_skills[0].proficiency,
            SkillProficiency::Intermediate
        );
        assert_eq!(
            record.skills.languages[0].proficiency,
            LanguageProficiency::Fluent
        );
        assert_eq!(record.skills.hobbies, vec!["chess"]);
    }

    #[test]
    fn test_non_expiring_certification_drops_expiry() {
        let response = json!({
            "skills": {
                "certifications": [
                    {"name": "CKA", "issuer": "CNCF", "issueDate": "2023-05-01",
                     "expirationDate": "2026-05-01", "doesNotExpire": true},
                    {"name": "AWS SAA", "expirationDate": "2027-01-15", "doesNotExpire": false}
                ]
            }
        });
        let record = decode_resume(&response);
        let certs = &record.skills.certifications;
        assert_eq!(certs[0].expiration_date, None);
        assert_eq!(certs[1].expiration_date.as_deref(), Some("2027-01-15"));

        let serialized = serde_json::to_value(&certs[0]).unwrap();
        assert!(serialized.get("expirationDate").is_none());
    }

    #[test]
    fn test_additional_sections_coerce_to_strings() {
        let response = json!({
            "additional": {
                "awards": [{"title": "Best Paper", "year": 2021}],
                "publications": "not an array"
            }
        });
        let record = decode_resume(&response);
        assert_eq!(record.additional.awards[0]["title"], json!("Best Paper"));
        assert_eq!(record.additional.awards[0]["year"], json!("2021"));
        assert!(record.additional.publications.is_empty());
    }

    #[test]
    fn test_normalize_date_formats() {
        assert_eq!(normalize_date("2021-03-01"), "2021-03-01");
        assert_eq!(normalize_date("2021-03-01T10:30:00Z"), "2021-03-01");
        assert_eq!(normalize_date("05/15/2020"), "2020-05-15");
        assert_eq!(normalize_date("May 2020"), "2020-05-01");
        assert_eq!(normalize_date("2020-05"), "2020-05-01");
        assert_eq!(normalize_date("2020"), "2020-01-01");
        assert_eq!(normalize_date("present"), "");
        assert_eq!(normalize_date(""), "");
    }

    #[test]
    fn test_non_object_response_defaults_everything() {
        let record = decode_resume(&json!("no structure at all"));
        assert_eq!(record.personal.first_name, "");
        assert!(record.experiences.is_empty());
        assert!(record.education.is_empty());
    }
}
