use serde::{Deserialize, Serialize};

/// Loosely-typed section entry (publications, patents, ...) kept as an
/// object of string values.
pub type LooseEntry = serde_json::Map<String, serde_json::Value>;

/// Canonical extracted-resume shape. Built once per request from the model's
/// response; persistence, if any, belongs to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRecord {
    pub personal: PersonalInfo,
    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: SkillSet,
    pub additional: AdditionalSections,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub city: String,
    pub state: String,
    pub summary: String,
    pub job_title: String,
}

/// `id` is a type tag, not a unique key; the form UI keys entries by section.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ExperienceType,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EducationType,
    pub school_name: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub field: String,
    pub degree: String,
    pub gpa: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillSet {
    pub technical_skills: Vec<Skill>,
    pub soft_skills: Vec<Skill>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<Language>,
    pub hobbies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub proficiency: SkillProficiency,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub issue_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    pub does_not_expire: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub id: String,
    pub name: String,
    pub proficiency: LanguageProficiency,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalSections {
    pub publications: Vec<LooseEntry>,
    pub patents: Vec<LooseEntry>,
    pub memberships: Vec<LooseEntry>,
    pub awards: Vec<LooseEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceType {
    #[default]
    Work,
    Internship,
    Project,
    Volunteer,
}

impl ExperienceType {
    /// Synonym table first, then case-folded canonical membership; anything
    /// unrecognized lands on `work`.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "work" | "job" | "employment" | "full-time" | "fulltime" | "part-time"
            | "parttime" => Self::Work,
            "internship" | "intern" | "apprenticeship" | "trainee" => Self::Internship,
            "project" | "personal project" | "freelance" => Self::Project,
            "volunteer" | "volunteering" | "community service" => Self::Volunteer,
            _ => Self::Work,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Internship => "internship",
            Self::Project => "project",
            Self::Volunteer => "volunteer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum EducationType {
    HighSchool,
    Intermediate,
    #[default]
    Undergraduate,
    Graduate,
}

impl EducationType {
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "highschool" | "high school" | "matriculation" | "ssc" | "10th" => Self::HighSchool,
            "intermediate" | "secondary" | "senior secondary" | "higher secondary" | "hsc"
            | "12th" | "junior college" => Self::Intermediate,
            "undergraduate" | "undergrad" | "bachelors" | "bachelor" | "bachelor's" | "btech"
            | "b.tech" | "bsc" | "b.sc" | "be" | "ba" | "bs" => Self::Undergraduate,
            "graduate" | "postgraduate" | "post-graduate" | "masters" | "master" | "master's"
            | "mtech" | "m.tech" | "msc" | "m.sc" | "ms" | "ma" | "mba" | "phd" | "doctorate" => {
                Self::Graduate
            }
            _ => Self::Undergraduate,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::HighSchool => "highSchool",
            Self::Intermediate => "intermediate",
            Self::Undergraduate => "undergraduate",
            Self::Graduate => "graduate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SkillProficiency {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl SkillProficiency {
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "beginner" | "basic" | "novice" | "elementary" => Self::Beginner,
            "intermediate" | "moderate" | "working" => Self::Intermediate,
            "advanced" | "proficient" | "professional" => Self::Advanced,
            "expert" | "master" => Self::Expert,
            _ => Self::Intermediate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageProficiency {
    #[default]
    Basic,
    Intermediate,
    Advanced,
    Fluent,
}

impl LanguageProficiency {
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "basic" | "beginner" | "elementary" | "limited" => Self::Basic,
            "intermediate" | "conversational" | "working" => Self::Intermediate,
            "advanced" | "proficient" | "full professional" => Self::Advanced,
            "fluent" | "native" | "bilingual" | "mother tongue" => Self::Fluent,
            _ => Self::Basic,
        }
    }
}
