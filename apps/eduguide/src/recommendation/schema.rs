//! Response schema sent alongside every recommendation prompt. Mirrors the
//! `GuidanceData` model field for field.

use crate::llm_client::schema::Schema;
use crate::models::guidance::{CategoryCode, ResourceType};

fn ranks_schema() -> Schema {
    CategoryCode::ALL
        .iter()
        .fold(Schema::object(), |schema, category| {
            schema.required(category.code(), Schema::string())
        })
}

fn college_schema() -> Schema {
    Schema::object()
        .required("id", Schema::string())
        .required("collegeName", Schema::string())
        .required("course", Schema::string())
        .required("fees", Schema::object().required("total", Schema::string()))
        .required(
            "admissions",
            Schema::object()
                .required("entranceExam", Schema::string())
                .required("tentativeExamDate", Schema::string())
                .required("admissionWindow", Schema::string())
                .required("openingRanks", ranks_schema())
                .required("closingRanks", ranks_schema()),
        )
        .required("scholarships", Schema::string_list())
        .required(
            "placements",
            Schema::object()
                .required("averagePackage", Schema::string())
                .required("topRecruiters", Schema::string_list()),
        )
        .required("notableAlumni", Schema::string_list())
        .required("careerOutcomes", Schema::string_list())
        .required("foreignTieUps", Schema::string())
        .required("summary", Schema::string())
}

fn study_plan_schema() -> Schema {
    let resource = Schema::object()
        .required("title", Schema::string())
        .required(
            "type",
            Schema::string_enum(ResourceType::ALL.iter().map(|t| t.as_str())),
        )
        .required("link", Schema::string());

    Schema::object()
        .required("examName", Schema::string())
        .required("roadmap", Schema::string_list())
        .required("tips", Schema::string_list())
        .required("recommendedResources", Schema::array(resource))
}

fn counsellor_schema() -> Schema {
    Schema::object()
        .required("name", Schema::string())
        .required("specialization", Schema::string())
        .required("phone", Schema::string())
        .required("email", Schema::string())
        .required("bookingLink", Schema::string())
        .required("note", Schema::string())
}

/// The full `GuidanceData` response schema. Everything is required except
/// `locationNote`.
pub fn guidance_schema() -> Schema {
    Schema::object()
        .required("recommendations", Schema::array(college_schema()))
        .required("studyPlan", study_plan_schema())
        .required("careerCounsellor", counsellor_schema())
        .required("studentNextSteps", Schema::string_list())
        .optional("locationNote", Schema::string())
}
