//! Per-domain form definitions for the shared draft/commit controller.
//!
//! Each domain contributes a field schema, its form defaults, and the two
//! conversions the editor needs: record -> form (list fields flattened to
//! delimited text) and form -> record (delimited text re-parsed, derived
//! fields recomputed). Everything else is generic.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::calc;
use crate::model::{
    Achievement, AchievementCategory, AcademicYearResult, GalleryCategory, GalleryItem,
    GalleryKind, HasId, ImageRef, StudentResult, SubjectMark, Teacher, Topper,
};
use crate::schema::{FieldKind, FieldSpec, FormValues, ValidationReport};

const TOPPER_IMAGE: &str = "/confident-indian-student.png";
const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

pub trait FormDomain {
    type Record: HasId + Clone + Serialize + DeserializeOwned;

    /// Method prefix on the wire, e.g. "teachers".
    const NAME: &'static str;

    fn schema() -> &'static [FieldSpec];

    fn defaults() -> FormValues;

    /// Flatten a record into editable form values.
    fn to_form(record: &Self::Record) -> FormValues;

    /// Cross-field rules the flat schema cannot express.
    fn validate_extra(_form: &FormValues, _report: &mut ValidationReport) {}

    /// Build the record from a validated form. The id is left empty; the
    /// caller fills it in (fresh on create, preserved on edit).
    fn from_form(form: &FormValues) -> Self::Record;
}

// ---- shared form plumbing ----

pub fn text(form: &FormValues, name: &str) -> String {
    form.get(name)
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim()
        .to_string()
}

pub fn opt_text(form: &FormValues, name: &str) -> Option<String> {
    let value = text(form, name);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Comma-delimited free text -> list, trimmed, empties dropped.
pub fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Newline-delimited free text -> list, trimmed, empties dropped.
pub fn split_line_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// One topper per line as "name, percentage, stream"; rank is the 1-based
/// line position. Missing parts stay empty, as on the site.
pub fn parse_topper_lines(raw: &str) -> Vec<Topper> {
    split_line_list(raw)
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let mut parts = line.split(',').map(str::trim);
            Topper {
                name: parts.next().unwrap_or("").to_string(),
                percentage: parts.next().unwrap_or("").to_string(),
                stream: parts.next().unwrap_or("").to_string(),
                rank: (index + 1) as u32,
                image: ImageRef::url(TOPPER_IMAGE),
            }
        })
        .collect()
}

pub fn format_topper_lines(toppers: &[Topper]) -> String {
    toppers
        .iter()
        .map(|t| format!("{}, {}, {}", t.name, t.percentage, t.stream))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The image field holds either a pasted URL string or an attached
/// `ImageRef` object; both resolve to the tagged union.
pub fn image_from_value(value: Option<&Value>) -> Option<ImageRef> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(ImageRef::url(s.trim())),
        Some(value @ Value::Object(_)) => serde_json::from_value(value.clone()).ok(),
        _ => None,
    }
}

fn image_or_placeholder(form: &FormValues, name: &str) -> ImageRef {
    image_from_value(form.get(name)).unwrap_or_else(|| ImageRef::url(PLACEHOLDER_IMAGE))
}

/// Lenient integer parse matching the site's `parseInt(x) || 0`.
pub fn lenient_u32(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0).min(u32::MAX as u64) as u32,
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn parse_variant<T: DeserializeOwned>(label: &str) -> Option<T> {
    serde_json::from_value(Value::String(label.to_string())).ok()
}

fn form_entries(entries: Vec<(&str, Value)>) -> FormValues {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

// ---- teachers ----

pub struct Teachers;

impl FormDomain for Teachers {
    type Record = Teacher;

    const NAME: &'static str = "teachers";

    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required("name", FieldKind::Text),
            FieldSpec::required("subject", FieldKind::Text),
            FieldSpec::required("qualification", FieldKind::Text),
            FieldSpec::required("experience", FieldKind::Text),
            FieldSpec::required("specialization", FieldKind::Text),
            FieldSpec::optional("achievements", FieldKind::CommaList),
            FieldSpec::required("email", FieldKind::Email),
            FieldSpec::required("phone", FieldKind::Phone),
            FieldSpec::required("image", FieldKind::Image),
        ];
        SCHEMA
    }

    fn defaults() -> FormValues {
        form_entries(vec![
            ("name", json!("")),
            ("subject", json!("")),
            ("qualification", json!("")),
            ("experience", json!("")),
            ("specialization", json!("")),
            ("achievements", json!("")),
            ("email", json!("")),
            ("phone", json!("")),
            ("image", json!("")),
        ])
    }

    fn to_form(record: &Teacher) -> FormValues {
        form_entries(vec![
            ("name", json!(record.name)),
            ("subject", json!(record.subject)),
            ("qualification", json!(record.qualification)),
            ("experience", json!(record.experience)),
            ("specialization", json!(record.specialization)),
            ("achievements", json!(record.achievements.join(", "))),
            ("email", json!(record.email)),
            ("phone", json!(record.phone)),
            ("image", json!(record.image)),
        ])
    }

    fn from_form(form: &FormValues) -> Teacher {
        Teacher {
            id: String::new(),
            name: text(form, "name"),
            subject: text(form, "subject"),
            qualification: text(form, "qualification"),
            experience: text(form, "experience"),
            specialization: text(form, "specialization"),
            achievements: split_comma_list(&text(form, "achievements")),
            email: text(form, "email"),
            phone: text(form, "phone"),
            image: image_or_placeholder(form, "image"),
        }
    }
}

// ---- gallery ----

pub struct Gallery;

pub const GALLERY_KINDS: &[&str] = &["photo", "video"];
pub const GALLERY_CATEGORIES: &[&str] = &["Events", "Photos", "Activities", "Achievements"];

impl FormDomain for Gallery {
    type Record = GalleryItem;

    const NAME: &'static str = "gallery";

    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required("type", FieldKind::Select(GALLERY_KINDS)),
            FieldSpec::required("category", FieldKind::Select(GALLERY_CATEGORIES)),
            FieldSpec::required("title", FieldKind::Text),
            FieldSpec::optional("description", FieldKind::MultiLine),
            FieldSpec::required("image", FieldKind::Image),
            FieldSpec::optional("videoUrl", FieldKind::Text),
        ];
        SCHEMA
    }

    fn defaults() -> FormValues {
        form_entries(vec![
            ("type", json!("photo")),
            ("category", json!("Events")),
            ("title", json!("")),
            ("description", json!("")),
            ("image", json!("")),
            ("videoUrl", json!("")),
        ])
    }

    fn to_form(record: &GalleryItem) -> FormValues {
        form_entries(vec![
            ("type", json!(record.kind)),
            ("category", json!(record.category)),
            ("title", json!(record.title)),
            ("description", json!(record.description)),
            ("image", json!(record.image)),
            ("videoUrl", json!(record.video_url.clone().unwrap_or_default())),
        ])
    }

    fn validate_extra(form: &FormValues, report: &mut ValidationReport) {
        // The site never enforced this even though a video item without a
        // video URL is unusable. Policy decision: it is required.
        if text(form, "type") == "video" && text(form, "videoUrl").is_empty() {
            report.missing_field("videoUrl");
        }
    }

    fn from_form(form: &FormValues) -> GalleryItem {
        GalleryItem {
            id: String::new(),
            kind: parse_variant(&text(form, "type")).unwrap_or(GalleryKind::Photo),
            category: parse_variant(&text(form, "category")).unwrap_or(GalleryCategory::Events),
            title: text(form, "title"),
            description: text(form, "description"),
            image: image_or_placeholder(form, "image"),
            video_url: opt_text(form, "videoUrl"),
        }
    }
}

// ---- academic year results ----

pub struct AcademicResults;

impl FormDomain for AcademicResults {
    type Record = AcademicYearResult;

    const NAME: &'static str = "academicResults";

    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required("year", FieldKind::Text),
            FieldSpec::required("passRate", FieldKind::Text),
            FieldSpec::optional("toppers", FieldKind::LineList),
            FieldSpec::optional("highlights", FieldKind::LineList),
        ];
        SCHEMA
    }

    fn defaults() -> FormValues {
        form_entries(vec![
            ("year", json!("")),
            ("passRate", json!("")),
            ("toppers", json!("")),
            ("highlights", json!("")),
        ])
    }

    fn to_form(record: &AcademicYearResult) -> FormValues {
        form_entries(vec![
            ("year", json!(record.year)),
            ("passRate", json!(record.pass_rate)),
            ("toppers", json!(format_topper_lines(&record.toppers))),
            ("highlights", json!(record.highlights.join("\n"))),
        ])
    }

    fn from_form(form: &FormValues) -> AcademicYearResult {
        AcademicYearResult {
            id: String::new(),
            year: text(form, "year"),
            pass_rate: text(form, "passRate"),
            toppers: parse_topper_lines(&text_block(form, "toppers")),
            highlights: split_line_list(&text_block(form, "highlights")),
        }
    }
}

/// Multi-line fields must not be trimmed wholesale before splitting, only
/// per line.
fn text_block(form: &FormValues, name: &str) -> String {
    form.get(name)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

// ---- achievements ----

pub struct Achievements;

pub const ACHIEVEMENT_CATEGORIES: &[&str] = &[
    "Academic",
    "Sports",
    "Cultural",
    "Leadership",
    "Community Service",
];

impl FormDomain for Achievements {
    type Record = Achievement;

    const NAME: &'static str = "achievements";

    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required("category", FieldKind::Select(ACHIEVEMENT_CATEGORIES)),
            FieldSpec::required("title", FieldKind::Text),
            FieldSpec::required("year", FieldKind::Text),
            FieldSpec::required("position", FieldKind::Text),
            FieldSpec::required("description", FieldKind::MultiLine),
            FieldSpec::optional("studentName", FieldKind::Text),
            FieldSpec::optional("studentClass", FieldKind::Text),
            FieldSpec::optional("image", FieldKind::Image),
        ];
        SCHEMA
    }

    fn defaults() -> FormValues {
        form_entries(vec![
            ("category", json!("Sports")),
            ("title", json!("")),
            ("year", json!("")),
            ("position", json!("")),
            ("description", json!("")),
            ("studentName", json!("")),
            ("studentClass", json!("")),
            ("image", json!("")),
        ])
    }

    fn to_form(record: &Achievement) -> FormValues {
        form_entries(vec![
            ("category", json!(record.category)),
            ("title", json!(record.title)),
            ("year", json!(record.year)),
            ("position", json!(record.position)),
            ("description", json!(record.description)),
            (
                "studentName",
                json!(record.student_name.clone().unwrap_or_default()),
            ),
            (
                "studentClass",
                json!(record.student_class.clone().unwrap_or_default()),
            ),
            ("image", json!(record.image)),
        ])
    }

    fn from_form(form: &FormValues) -> Achievement {
        Achievement {
            id: String::new(),
            category: parse_variant(&text(form, "category"))
                .unwrap_or(AchievementCategory::Sports),
            title: text(form, "title"),
            year: text(form, "year"),
            position: text(form, "position"),
            description: text(form, "description"),
            student_name: opt_text(form, "studentName"),
            student_class: opt_text(form, "studentClass"),
            image: image_or_placeholder(form, "image"),
        }
    }
}

// ---- student results ----

pub struct StudentResults;

pub const STREAMS: &[&str] = &["Science", "Commerce", "Arts"];
pub const GRADES: &[&str] = &["A+", "A", "B+", "B", "C"];

fn default_subject_rows() -> Value {
    json!([
        { "name": "Mathematics", "marks": "", "maxMarks": "100" },
        { "name": "Science", "marks": "", "maxMarks": "100" },
        { "name": "English", "marks": "", "maxMarks": "100" },
        { "name": "Hindi", "marks": "", "maxMarks": "100" },
        { "name": "Social Studies", "marks": "", "maxMarks": "100" },
    ])
}

impl FormDomain for StudentResults {
    type Record = StudentResult;

    const NAME: &'static str = "studentResults";

    fn schema() -> &'static [FieldSpec] {
        const SCHEMA: &[FieldSpec] = &[
            FieldSpec::required("studentName", FieldKind::Text),
            FieldSpec::required("rollNumber", FieldKind::Text),
            FieldSpec::required("class", FieldKind::Text),
            FieldSpec::required("section", FieldKind::Text),
            FieldSpec::required("stream", FieldKind::Select(STREAMS)),
            FieldSpec::required("year", FieldKind::Text),
            FieldSpec::required("examType", FieldKind::Text),
            FieldSpec::optional("fatherName", FieldKind::Text),
            FieldSpec::optional("motherName", FieldKind::Text),
            FieldSpec::optional("dateOfBirth", FieldKind::Text),
            FieldSpec::optional("address", FieldKind::MultiLine),
            FieldSpec::optional("phone", FieldKind::Phone),
            FieldSpec::optional("email", FieldKind::Email),
            FieldSpec::required("subjects", FieldKind::SubjectTable),
            FieldSpec::required("grade", FieldKind::Select(GRADES)),
            FieldSpec::optional("rank", FieldKind::Text),
            FieldSpec::optional("attendance", FieldKind::Text),
            FieldSpec::optional("extracurricular", FieldKind::CommaList),
            FieldSpec::optional("remarks", FieldKind::MultiLine),
            FieldSpec::optional("image", FieldKind::Image),
        ];
        SCHEMA
    }

    fn defaults() -> FormValues {
        form_entries(vec![
            ("studentName", json!("")),
            ("rollNumber", json!("")),
            ("class", json!("")),
            ("section", json!("")),
            ("stream", json!("")),
            ("year", json!("")),
            ("examType", json!("Annual")),
            ("fatherName", json!("")),
            ("motherName", json!("")),
            ("dateOfBirth", json!("")),
            ("address", json!("")),
            ("phone", json!("")),
            ("email", json!("")),
            ("subjects", default_subject_rows()),
            ("totalMarks", json!("")),
            ("percentage", json!("")),
            ("grade", json!("")),
            ("rank", json!("")),
            ("attendance", json!("")),
            ("extracurricular", json!("")),
            ("remarks", json!("")),
            ("image", json!("")),
        ])
    }

    fn to_form(record: &StudentResult) -> FormValues {
        form_entries(vec![
            ("studentName", json!(record.student_name)),
            ("rollNumber", json!(record.roll_number)),
            ("class", json!(record.class)),
            ("section", json!(record.section)),
            ("stream", json!(record.stream)),
            ("year", json!(record.year)),
            ("examType", json!(record.exam_type)),
            ("fatherName", json!(record.father_name)),
            ("motherName", json!(record.mother_name)),
            ("dateOfBirth", json!(record.date_of_birth)),
            ("address", json!(record.address)),
            ("phone", json!(record.phone)),
            ("email", json!(record.email)),
            ("subjects", json!(record.subjects)),
            ("totalMarks", json!(record.total_marks)),
            ("percentage", json!(record.percentage)),
            ("grade", json!(record.grade)),
            ("rank", json!(record.rank)),
            ("attendance", json!(record.attendance)),
            ("extracurricular", json!(record.extracurricular.join(", "))),
            ("remarks", json!(record.remarks)),
            ("image", json!(record.image)),
        ])
    }

    fn from_form(form: &FormValues) -> StudentResult {
        let subjects = parse_subject_rows(form.get("subjects"));
        let summary = calc::summarize(&subjects);
        StudentResult {
            id: String::new(),
            student_name: text(form, "studentName"),
            roll_number: text(form, "rollNumber"),
            class: text(form, "class"),
            section: text(form, "section"),
            stream: text(form, "stream"),
            year: text(form, "year"),
            exam_type: text(form, "examType"),
            father_name: text(form, "fatherName"),
            mother_name: text(form, "motherName"),
            date_of_birth: text(form, "dateOfBirth"),
            address: text(form, "address"),
            phone: text(form, "phone"),
            email: text(form, "email"),
            total_marks: summary.total_label(),
            percentage: summary.percentage_label(),
            subjects,
            grade: text(form, "grade"),
            rank: text(form, "rank"),
            attendance: text(form, "attendance"),
            extracurricular: split_comma_list(&text(form, "extracurricular")),
            remarks: text(form, "remarks"),
            image: image_or_placeholder(form, "image"),
        }
    }
}

/// Rows with an empty subject name are blank table lines and are dropped.
pub fn parse_subject_rows(value: Option<&Value>) -> Vec<SubjectMark> {
    let Some(rows) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    rows.iter()
        .filter_map(|row| {
            let name = row
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("")
                .trim()
                .to_string();
            if name.is_empty() {
                return None;
            }
            Some(SubjectMark {
                name,
                marks: lenient_u32(row.get("marks")),
                max_marks: lenient_u32(row.get("maxMarks")),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate;

    #[test]
    fn every_domain_exposes_its_schema_table() {
        fn required_names(schema: &'static [FieldSpec]) -> Vec<&'static str> {
            schema
                .iter()
                .filter(|spec| spec.required)
                .map(|spec| spec.name)
                .collect()
        }

        assert_eq!(
            required_names(Teachers::schema()),
            vec![
                "name",
                "subject",
                "qualification",
                "experience",
                "specialization",
                "email",
                "phone",
                "image"
            ]
        );
        assert_eq!(
            required_names(Gallery::schema()),
            vec!["type", "category", "title", "image"]
        );
        assert_eq!(
            required_names(AcademicResults::schema()),
            vec!["year", "passRate"]
        );
        assert_eq!(
            required_names(Achievements::schema()),
            vec!["category", "title", "year", "position", "description"]
        );
        assert_eq!(
            required_names(StudentResults::schema()),
            vec![
                "studentName",
                "rollNumber",
                "class",
                "section",
                "stream",
                "year",
                "examType",
                "subjects",
                "grade"
            ]
        );
    }

    #[test]
    fn comma_list_trims_and_drops_empties() {
        assert_eq!(
            split_comma_list("Best Teacher Award 2023, , Research Publication ,"),
            vec!["Best Teacher Award 2023", "Research Publication"]
        );
        assert!(split_comma_list("   ").is_empty());
    }

    #[test]
    fn topper_lines_parse_with_one_based_ranks() {
        let toppers = parse_topper_lines(
            "Arjun Sharma, 98.5%, Science\n\n  Priya Patel, 97.8%, Commerce  \n",
        );
        assert_eq!(toppers.len(), 2);
        assert_eq!(toppers[0].name, "Arjun Sharma");
        assert_eq!(toppers[0].percentage, "98.5%");
        assert_eq!(toppers[0].stream, "Science");
        assert_eq!(toppers[0].rank, 1);
        assert_eq!(toppers[1].rank, 2);
    }

    #[test]
    fn topper_line_with_missing_parts_keeps_empty_fields() {
        let toppers = parse_topper_lines("Lone Name");
        assert_eq!(toppers[0].name, "Lone Name");
        assert_eq!(toppers[0].percentage, "");
        assert_eq!(toppers[0].stream, "");
    }

    #[test]
    fn topper_flatten_then_parse_roundtrips() {
        let toppers = parse_topper_lines("Arjun Sharma, 98.5%, Science\nPriya Patel, 97.8%, Commerce");
        let reparsed = parse_topper_lines(&format_topper_lines(&toppers));
        assert_eq!(reparsed, toppers);
    }

    #[test]
    fn teacher_edit_roundtrip_is_stable() {
        let record = Teacher {
            id: "t-1".to_string(),
            name: "Dr. Sunita Verma".to_string(),
            subject: "Mathematics".to_string(),
            qualification: "M.Sc, Ph.D Mathematics".to_string(),
            experience: "15 Years".to_string(),
            specialization: "Advanced Calculus, Statistics".to_string(),
            achievements: vec![
                "Best Teacher Award 2023".to_string(),
                "Research Publication in Mathematics Journal".to_string(),
            ],
            email: "sunita.verma@tagorebalvidhya.edu".to_string(),
            phone: "+91 98765 43210".to_string(),
            image: ImageRef::url("/indian-female-teacher-professional.png"),
        };
        let form = Teachers::to_form(&record);
        assert!(validate(&form, Teachers::schema()).is_clean());
        let mut back = Teachers::from_form(&form);
        back.id = record.id.clone();
        assert_eq!(back, record);
    }

    #[test]
    fn video_without_url_is_flagged_by_the_extra_rule() {
        let mut form = Gallery::defaults();
        form.insert("type".to_string(), json!("video"));
        form.insert("title".to_string(), json!("Science Exhibition"));
        form.insert("image".to_string(), json!("/science-lab-students.png"));
        let mut report = validate(&form, Gallery::schema());
        Gallery::validate_extra(&form, &mut report);
        assert_eq!(report.missing, vec!["videoUrl"]);

        form.insert("videoUrl".to_string(), json!("https://example.com/video1.mp4"));
        let mut report = validate(&form, Gallery::schema());
        Gallery::validate_extra(&form, &mut report);
        assert!(report.is_clean());
    }

    #[test]
    fn student_totals_are_recomputed_from_rows() {
        let mut form = StudentResults::defaults();
        for (key, value) in [
            ("studentName", "Test Student"),
            ("rollNumber", "2024099"),
            ("class", "12"),
            ("section", "A"),
            ("stream", "Science"),
            ("year", "2023-24"),
            ("grade", "A"),
            ("totalMarks", "999/999"),
            ("percentage", "999%"),
        ] {
            form.insert(key.to_string(), json!(value));
        }
        form.insert(
            "subjects".to_string(),
            json!([
                { "name": "Mathematics", "marks": "95", "maxMarks": "100" },
                { "name": "Science", "marks": 90, "maxMarks": 100 },
                { "name": "English", "marks": "85", "maxMarks": "100" },
                { "name": "Hindi", "marks": "80", "maxMarks": "100" },
                { "name": "Social Studies", "marks": "75", "maxMarks": "100" },
                { "name": "", "marks": "50", "maxMarks": "100" },
            ]),
        );
        let record = StudentResults::from_form(&form);
        assert_eq!(record.subjects.len(), 5);
        assert_eq!(record.total_marks, "425/500");
        assert_eq!(record.percentage, "85.00%");
    }

    #[test]
    fn lenient_parse_treats_garbage_as_zero() {
        assert_eq!(lenient_u32(Some(&json!("abc"))), 0);
        assert_eq!(lenient_u32(Some(&json!(""))), 0);
        assert_eq!(lenient_u32(Some(&json!(" 42 "))), 42);
        assert_eq!(lenient_u32(None), 0);
    }
}
