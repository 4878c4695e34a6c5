use serde::Serialize;

use crate::models::guidance::{CategoryCode, College, GuidanceData};

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

/// Prints `data` as a JSON envelope, or as the text produced by `render`.
pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    render: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", render(&data));
    }
    Ok(())
}

pub fn college_line(college: &College) -> String {
    format!(
        "[{}] {} - {} | fees {} | {} | avg package {}",
        college.id,
        college.college_name,
        college.course,
        college.fees.total,
        college.admissions.entrance_exam,
        college.placements.average_package
    )
}

fn bullet_list(title: &str, items: &[String]) -> String {
    let mut out = format!("{title}:\n");
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("  {}. {item}\n", i + 1));
    }
    out
}

pub fn render_guidance(guidance: &GuidanceData) -> String {
    let mut out = String::new();

    if let Some(note) = &guidance.location_note {
        out.push_str(&format!("Note: {note}\n\n"));
    }

    out.push_str("Recommended colleges:\n");
    for college in &guidance.recommendations {
        out.push_str(&format!("  {}\n", college_line(college)));
        let closing = &college.admissions.closing_ranks;
        out.push_str(&format!(
            "      closing ranks: {}\n",
            CategoryCode::ALL
                .iter()
                .map(|c| format!("{} {}", c.code(), closing.get(*c)))
                .collect::<Vec<_>>()
                .join(", ")
        ));
        if let Some(tie_ups) = college.foreign_tie_ups() {
            out.push_str(&format!("      global partnership: {tie_ups}\n"));
        }
        out.push_str(&format!("      {}\n", college.summary));
    }

    let plan = &guidance.study_plan;
    out.push_str(&format!("\nStudy plan for {}\n", plan.exam_name));
    out.push_str(&bullet_list("Roadmap", &plan.roadmap));
    out.push_str(&bullet_list("Tips", &plan.tips));
    out.push_str("Resources:\n");
    for resource in &plan.recommended_resources {
        out.push_str(&format!(
            "  - {} ({}): {}\n",
            resource.title,
            resource.resource_type.as_str(),
            resource.link
        ));
    }

    let counsellor = &guidance.career_counsellor;
    out.push_str(&format!(
        "\nCounsellor: {} ({})\n  phone {} | email {}\n  book: {}\n  {}\n",
        counsellor.name,
        counsellor.specialization,
        counsellor.phone,
        counsellor.email,
        counsellor.booking_link,
        counsellor.note
    ));

    out.push('\n');
    out.push_str(&bullet_list("Next steps", &guidance.student_next_steps));
    out.trim_end().to_string()
}

/// Side-by-side rows for the comparison set.
pub fn render_comparison(colleges: &[College]) -> String {
    let rows: [(&str, fn(&College) -> String); 6] = [
        ("Fees", |c| c.fees.total.clone()),
        ("Entrance exam", |c| c.admissions.entrance_exam.clone()),
        ("Closing rank (GEN)", |c| {
            c.admissions.closing_ranks.general.clone()
        }),
        ("Avg package", |c| c.placements.average_package.clone()),
        ("Scholarships", |c| c.scholarships.join(", ")),
        ("Foreign tie-ups", |c| {
            c.foreign_tie_ups().unwrap_or("N/A").to_string()
        }),
    ];

    let mut out = format!(
        "Comparing: {}\n",
        colleges
            .iter()
            .map(|c| c.college_name.as_str())
            .collect::<Vec<_>>()
            .join(" | ")
    );
    for (label, value) in rows {
        let values: Vec<String> = colleges.iter().map(value).collect();
        out.push_str(&format!("  {label}: {}\n", values.join(" | ")));
    }
    out.trim_end().to_string()
}
