//! Shared test payloads shaped like real engine responses.

use serde_json::{json, Value};

use crate::models::guidance::{College, GuidanceData};
use crate::models::profile::{BudgetCategory, StudentProfile};

pub const COLLEGE_IDS: [&str; 5] = [
    "rvce-cse",
    "bmsce-cse",
    "pesu-cse",
    "msrit-cse",
    "dsce-cse",
];

const COLLEGE_NAMES: [&str; 5] = [
    "RV College of Engineering",
    "BMS College of Engineering",
    "PES University",
    "MS Ramaiah Institute of Technology",
    "Dayananda Sagar College of Engineering",
];

pub fn bangalore_profile() -> StudentProfile {
    StudentProfile {
        academic_metric: "96%".to_string(),
        preferred_course: "B.Tech CSE".to_string(),
        budget_category: BudgetCategory::A,
        preferred_location: "Bangalore".to_string(),
    }
}

pub fn college_value(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "collegeName": name,
        "course": "B.Tech Computer Science",
        "fees": { "total": "₹3.2 Lakhs" },
        "admissions": {
            "entranceExam": "KCET",
            "tentativeExamDate": "April 2026",
            "admissionWindow": "June - August",
            "openingRanks": { "GEN": "1200", "OBC": "1800", "SC": "5200", "ST": "7400" },
            "closingRanks": { "GEN": "4100", "OBC": "6400", "SC": "21000", "ST": "N/A" }
        },
        "scholarships": ["Merit scholarship", "SC/ST fee waiver"],
        "placements": {
            "averagePackage": "₹9 LPA",
            "topRecruiters": ["Infosys", "Microsoft"]
        },
        "notableAlumni": ["Alumni A"],
        "careerOutcomes": ["Software Engineer", "Data Scientist"],
        "foreignTieUps": "N/A",
        "summary": "Strong CSE programme with good placements."
    })
}

pub fn sample_college(id: &str, name: &str) -> College {
    serde_json::from_value(college_value(id, name)).expect("fixture college is valid")
}

pub fn guidance_value() -> Value {
    let recommendations: Vec<Value> = COLLEGE_IDS
        .iter()
        .zip(COLLEGE_NAMES)
        .map(|(id, name)| college_value(id, name))
        .collect();

    json!({
        "recommendations": recommendations,
        "studyPlan": {
            "examName": "KCET",
            "roadmap": ["Finish syllabus", "Take mock tests", "Revise weak areas"],
            "tips": ["Practice previous papers"],
            "recommendedResources": [
                { "title": "KCET Previous Papers", "type": "Book", "link": "https://example.org/kcet" },
                { "title": "Weekly Mock", "type": "Mock Test", "link": "https://example.org/mock" }
            ]
        },
        "careerCounsellor": {
            "name": "Dr. Asha Rao",
            "specialization": "Engineering admissions",
            "phone": "+91 98765 43210",
            "email": "asha@example.org",
            "bookingLink": "https://example.org/book",
            "note": "Bring your KCET score card."
        },
        "studentNextSteps": ["Register for KCET", "Shortlist colleges"]
    })
}

pub fn guidance_json() -> String {
    guidance_value().to_string()
}

pub fn guidance_fixture() -> GuidanceData {
    serde_json::from_value(guidance_value()).expect("fixture guidance is valid")
}
