use serde::{Deserialize, Serialize};

use crate::templates::{
    self, FollowUpTemplate, StepTemplate, TemplateRecord, DEFAULT_RECORD, ENGLISH,
    FOLLOW_UP_ARABIC, FOLLOW_UP_ENGLISH, SHARED, SUBJECT_ENGLISH,
};

/// The record the form collects. The upstream form guarantees every field is
/// non-empty; the generator takes it as-is and never re-validates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanInput {
    pub subject: String,
    pub grade: String,
    pub lesson_title: String,
    pub date: String,
    pub teacher_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcedureStep {
    pub activity: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpRow {
    pub date: String,
    pub section: String,
    #[serde(rename = "class")]
    pub class_label: String,
    pub achieved_outcomes: String,
    pub homework: String,
}

/// The fully-populated document handed to preview/edit and to the PDF
/// pipeline. Every list has its fixed cardinality and every string is
/// non-empty on every generator branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument {
    pub subject: String,
    pub grade: String,
    pub lesson_title: String,
    pub date: String,
    pub teacher_name: String,
    pub objectives: Vec<String>,
    pub teaching_strategies: Vec<String>,
    pub assessment_strategies: Vec<String>,
    pub assessment_tools: Vec<String>,
    pub materials_and_resources: Vec<String>,
    pub time_management: Vec<ProcedureStep>,
    pub prior_learning: String,
    pub horizontal_integration: String,
    pub vertical_integration: String,
    pub procedures: Vec<ProcedureStep>,
    pub self_reflection: String,
    pub challenges_faced: String,
    pub improvement_suggestions: String,
    pub daily_follow_up_table: Vec<FollowUpRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_english_template: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_classes: Option<String>,
}

fn fill(template: &str, input: &PlanInput) -> String {
    template
        .replace("{title}", &input.lesson_title)
        .replace("{subject}", &input.subject)
}

fn fill_all(templates: &[&str], input: &PlanInput) -> Vec<String> {
    templates.iter().map(|t| fill(t, input)).collect()
}

fn fill_steps(steps: &[StepTemplate], input: &PlanInput) -> Vec<ProcedureStep> {
    steps
        .iter()
        .map(|s| ProcedureStep {
            activity: fill(s.activity, input),
            time: s.time.to_string(),
        })
        .collect()
}

fn follow_up_rows(rows: &[FollowUpTemplate], date: &str) -> Vec<FollowUpRow> {
    rows.iter()
        .map(|r| FollowUpRow {
            date: date.to_string(),
            section: r.section.to_string(),
            class_label: r.class.to_string(),
            achieved_outcomes: r.achieved_outcomes.to_string(),
            homework: r.homework.to_string(),
        })
        .collect()
}

/// First branch of the subject whose keyword group matches the title; the
/// subject's trailing empty-keyword entry is its default, and subjects with
/// no group at all use the generic record.
fn select_record(input: &PlanInput) -> &'static TemplateRecord {
    let title = input.lesson_title.to_lowercase();
    templates::BRANCHES
        .iter()
        .filter(|b| b.subject == input.subject)
        .find(|b| b.keywords.is_empty() || b.keywords.iter().any(|k| title.contains(k)))
        .map(|b| &b.record)
        .unwrap_or(&DEFAULT_RECORD)
}

fn english_plan(input: &PlanInput) -> PlanDocument {
    PlanDocument {
        subject: input.subject.clone(),
        grade: templates::english_grade_label(&input.grade).to_string(),
        lesson_title: input.lesson_title.clone(),
        date: input.date.clone(),
        teacher_name: input.teacher_name.clone(),
        objectives: fill_all(ENGLISH.objectives, input),
        teaching_strategies: fill_all(ENGLISH.teaching_strategies, input),
        assessment_strategies: fill_all(ENGLISH.assessment_strategies, input),
        assessment_tools: fill_all(ENGLISH.assessment_tools, input),
        materials_and_resources: fill_all(ENGLISH.materials_and_resources, input),
        time_management: fill_steps(ENGLISH.time_management, input),
        prior_learning: fill(ENGLISH.prior_learning, input),
        horizontal_integration: fill(ENGLISH.horizontal_integration, input),
        vertical_integration: fill(ENGLISH.vertical_integration, input),
        procedures: fill_steps(ENGLISH.procedures, input),
        self_reflection: fill(ENGLISH.self_reflection, input),
        challenges_faced: fill(ENGLISH.challenges_faced, input),
        improvement_suggestions: fill(ENGLISH.improvement_suggestions, input),
        daily_follow_up_table: follow_up_rows(FOLLOW_UP_ENGLISH, &input.date),
        is_english_template: Some(true),
        number_of_classes: Some(ENGLISH.number_of_classes.to_string()),
    }
}

/// Generate a complete lesson-plan document from the form input.
///
/// Total and deterministic: every input yields a document with every field
/// populated, and identical inputs yield identical documents.
pub fn generate_plan(input: &PlanInput) -> PlanDocument {
    if input.subject == SUBJECT_ENGLISH {
        return english_plan(input);
    }

    let record = select_record(input);
    PlanDocument {
        subject: input.subject.clone(),
        grade: input.grade.clone(),
        lesson_title: input.lesson_title.clone(),
        date: input.date.clone(),
        teacher_name: input.teacher_name.clone(),
        objectives: fill_all(record.objectives, input),
        teaching_strategies: fill_all(SHARED.teaching_strategies, input),
        assessment_strategies: fill_all(SHARED.assessment_strategies, input),
        assessment_tools: fill_all(SHARED.assessment_tools, input),
        materials_and_resources: fill_all(record.materials_and_resources, input),
        time_management: fill_steps(SHARED.time_management, input),
        prior_learning: fill(record.prior_learning, input),
        horizontal_integration: fill(record.horizontal_integration, input),
        vertical_integration: fill(record.vertical_integration, input),
        procedures: fill_steps(record.procedures, input),
        self_reflection: fill(SHARED.self_reflection, input),
        challenges_faced: fill(SHARED.challenges_faced, input),
        improvement_suggestions: fill(SHARED.improvement_suggestions, input),
        daily_follow_up_table: follow_up_rows(FOLLOW_UP_ARABIC, &input.date),
        is_english_template: None,
        number_of_classes: None,
    }
}

fn check_str(missing: &mut Vec<&'static str>, name: &'static str, value: &str) {
    if value.trim().is_empty() {
        missing.push(name);
    }
}

fn check_list(missing: &mut Vec<&'static str>, name: &'static str, values: &[String]) {
    if values.is_empty() || values.iter().any(|v| v.trim().is_empty()) {
        missing.push(name);
    }
}

fn check_steps(missing: &mut Vec<&'static str>, name: &'static str, steps: &[ProcedureStep]) {
    if steps.is_empty()
        || steps
            .iter()
            .any(|s| s.activity.trim().is_empty() || s.time.trim().is_empty())
    {
        missing.push(name);
    }
}

/// Names of the fields the print template would find missing or blank.
/// Empty result means the document honors the export contract.
pub fn missing_fields(doc: &PlanDocument) -> Vec<&'static str> {
    let mut missing = Vec::new();
    check_str(&mut missing, "subject", &doc.subject);
    check_str(&mut missing, "grade", &doc.grade);
    check_str(&mut missing, "lessonTitle", &doc.lesson_title);
    check_str(&mut missing, "date", &doc.date);
    check_str(&mut missing, "teacherName", &doc.teacher_name);
    check_list(&mut missing, "objectives", &doc.objectives);
    check_list(&mut missing, "teachingStrategies", &doc.teaching_strategies);
    check_list(&mut missing, "assessmentStrategies", &doc.assessment_strategies);
    check_list(&mut missing, "assessmentTools", &doc.assessment_tools);
    check_list(&mut missing, "materialsAndResources", &doc.materials_and_resources);
    check_steps(&mut missing, "timeManagement", &doc.time_management);
    check_str(&mut missing, "priorLearning", &doc.prior_learning);
    check_str(&mut missing, "horizontalIntegration", &doc.horizontal_integration);
    check_str(&mut missing, "verticalIntegration", &doc.vertical_integration);
    check_steps(&mut missing, "procedures", &doc.procedures);
    check_str(&mut missing, "selfReflection", &doc.self_reflection);
    check_str(&mut missing, "challengesFaced", &doc.challenges_faced);
    check_str(&mut missing, "improvementSuggestions", &doc.improvement_suggestions);
    if doc.daily_follow_up_table.is_empty()
        || doc.daily_follow_up_table.iter().any(|r| {
            r.date.trim().is_empty()
                || r.section.trim().is_empty()
                || r.class_label.trim().is_empty()
                || r.achieved_outcomes.trim().is_empty()
                || r.homework.trim().is_empty()
        })
    {
        missing.push("dailyFollowUpTable");
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{GRADES, SUBJECTS};

    fn input(subject: &str, title: &str) -> PlanInput {
        PlanInput {
            subject: subject.to_string(),
            grade: "الصف العاشر".to_string(),
            lesson_title: title.to_string(),
            date: "2026-03-15".to_string(),
            teacher_name: "أحمد خالد".to_string(),
        }
    }

    #[test]
    fn science_heart_lesson_uses_body_systems_branch() {
        let doc = generate_plan(&input("العلوم", "القلب"));
        assert_eq!(doc.objectives.len(), 6);
        for objective in &doc.objectives {
            assert!(objective.contains("القلب"), "missing title in: {objective}");
        }
        assert_eq!(doc.materials_and_resources.len(), 5);
        assert_eq!(doc.procedures.len(), 6);
        for step in &doc.procedures {
            assert!(!step.time.trim().is_empty());
        }
        assert!(doc.prior_learning.contains("جسم الإنسان"));
        assert!(doc.is_english_template.is_none());
    }

    #[test]
    fn math_fractions_routes_past_generic_math() {
        let doc = generate_plan(&input("الرياضيات", "الكسور"));
        // This objective only exists on the fractions record.
        assert!(doc
            .objectives
            .iter()
            .any(|o| o.contains("أن يحول الطالب بين صور")));
    }

    #[test]
    fn keyword_precedence_follows_declaration_order() {
        // Title matches both the body-systems group and the optics group;
        // body systems is declared first and must win.
        let doc = generate_plan(&input("العلوم", "القلب والضوء"));
        assert!(doc.objectives[0].contains("أن يصف الطالب تركيب"));
    }

    #[test]
    fn unknown_science_title_falls_back_to_generic_science() {
        let doc = generate_plan(&input("العلوم", "الصخور"));
        assert!(doc.objectives[0].contains("المفاهيم العلمية الأساسية"));
        assert_eq!(doc.objectives.len(), 6);
    }

    #[test]
    fn unlisted_subject_uses_generic_default_with_subject_interpolation() {
        let doc = generate_plan(&input("الحاسوب", "الخوارزميات"));
        assert!(doc
            .materials_and_resources
            .iter()
            .any(|m| m.contains("كتاب الحاسوب المقرر")));
        assert_eq!(doc.procedures.len(), 5);
    }

    #[test]
    fn english_subject_produces_fully_english_document() {
        let doc = generate_plan(&input("اللغة الإنجليزية", "My Family"));
        assert_eq!(doc.is_english_template, Some(true));
        assert_eq!(doc.number_of_classes.as_deref(), Some("5"));
        assert_eq!(doc.grade, "Grade 10");
        assert_eq!(doc.objectives.len(), 5);

        // No Arabic fragment may leak into any field of the English shape.
        let serialized = serde_json::to_string(&doc).expect("serialize");
        let has_arabic = serialized
            .chars()
            .any(|c| ('\u{0600}'..='\u{06FF}').contains(&c));
        assert!(!has_arabic, "arabic fragment leaked: {serialized}");
    }

    #[test]
    fn latin_script_titles_interpolate_verbatim() {
        // Matching lowercases the title, interpolation does not.
        let doc = generate_plan(&input("العلوم", "PHOTOSYNTHESIS"));
        assert!(doc.objectives[0].contains("PHOTOSYNTHESIS"));
    }

    #[test]
    fn generator_is_deterministic() {
        let a = generate_plan(&input("العلوم", "الدورة الدموية"));
        let b = generate_plan(&input("العلوم", "الدورة الدموية"));
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).expect("serialize a"),
            serde_json::to_string(&b).expect("serialize b"),
        );
    }

    #[test]
    fn every_subject_and_branch_populates_every_field() {
        let mut titles = vec![
            "القلب",
            "العدسات",
            "النباتات",
            "كسور عشرية",
            "المثلث",
            "المعادلات",
            "قصة قصيرة",
            "قواعد اللغة",
            "تشبيه",
            "موضوع عام",
        ];
        titles.push("My Family");
        for subject in SUBJECTS {
            for title in &titles {
                let doc = generate_plan(&input(subject, title));
                let missing = missing_fields(&doc);
                assert!(
                    missing.is_empty(),
                    "subject {subject} title {title} missing {missing:?}"
                );
                assert_eq!(doc.daily_follow_up_table.len(), 2);
                assert!(!doc.time_management.is_empty());
            }
        }
    }

    #[test]
    fn follow_up_rows_carry_the_input_date() {
        let doc = generate_plan(&input("الرياضيات", "الجبر"));
        for row in &doc.daily_follow_up_table {
            assert_eq!(row.date, "2026-03-15");
        }
    }

    #[test]
    fn grade_translation_passes_unknown_labels_through() {
        let mut inp = input("اللغة الإنجليزية", "Food");
        inp.grade = "KG2".to_string();
        let doc = generate_plan(&inp);
        assert_eq!(doc.grade, "KG2");
        for grade in GRADES {
            let mut inp = input("اللغة الإنجليزية", "Food");
            inp.grade = grade.to_string();
            assert!(generate_plan(&inp).grade.starts_with("Grade "));
        }
    }

    #[test]
    fn serialized_document_round_trips_deep_equal() {
        let doc = generate_plan(&input("العلوم", "القلب"));
        let raw = serde_json::to_string(&doc).expect("serialize");
        let back: PlanDocument = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(doc, back);
    }

    #[test]
    fn missing_fields_reports_blanked_entries() {
        let mut doc = generate_plan(&input("العلوم", "القلب"));
        doc.objectives[2] = "  ".to_string();
        doc.prior_learning.clear();
        let missing = missing_fields(&doc);
        assert!(missing.contains(&"objectives"));
        assert!(missing.contains(&"priorLearning"));
    }
}
