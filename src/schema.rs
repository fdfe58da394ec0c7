//! Declarative form schemas and the central validation report.
//!
//! The original admin pages left required-field enforcement to native form
//! constraints, applied unevenly. Here every submit runs one validation
//! pass over the domain's schema and returns a single report listing every
//! violation.

use serde::Serialize;
use serde_json::{Map, Value};

/// An in-progress form: field name to draft value. Values are strings for
/// scalar fields; the subject table is a JSON array; an attached image is
/// either a pasted URL string or an `ImageRef` object.
pub type FormValues = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    MultiLine,
    Email,
    Phone,
    /// Value must be one of the listed options.
    Select(&'static [&'static str]),
    /// Free text parsed into a list on commit, comma-delimited.
    CommaList,
    /// Free text parsed into a list on commit, one entry per line.
    LineList,
    /// URL string or inline image object.
    Image,
    /// Array of `{name, marks, maxMarks}` rows.
    SubjectTable,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub missing: Vec<String>,
    pub invalid: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty()
    }

    pub fn missing_field(&mut self, field: &str) {
        self.missing.push(field.to_string());
    }

    pub fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.invalid.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn to_details(&self) -> Value {
        serde_json::json!({
            "missing": self.missing,
            "invalid": self.invalid,
        })
    }
}

fn text_of<'a>(form: &'a FormValues, name: &str) -> &'a str {
    form.get(name).and_then(Value::as_str).unwrap_or("").trim()
}

/// One pass over the schema; all violations end up in the report.
pub fn validate(form: &FormValues, schema: &[FieldSpec]) -> ValidationReport {
    let mut report = ValidationReport::default();
    for spec in schema {
        match spec.kind {
            FieldKind::Text | FieldKind::MultiLine | FieldKind::CommaList | FieldKind::LineList => {
                if spec.required && text_of(form, spec.name).is_empty() {
                    report.missing_field(spec.name);
                }
            }
            FieldKind::Email => {
                let text = text_of(form, spec.name);
                if text.is_empty() {
                    if spec.required {
                        report.missing_field(spec.name);
                    }
                } else if !looks_like_email(text) {
                    report.reject(spec.name, "Email is invalid");
                }
            }
            FieldKind::Phone => {
                let text = text_of(form, spec.name);
                if text.is_empty() {
                    if spec.required {
                        report.missing_field(spec.name);
                    }
                } else if !looks_like_phone(text) {
                    report.reject(spec.name, "Phone number is invalid");
                }
            }
            FieldKind::Select(options) => {
                let text = text_of(form, spec.name);
                if text.is_empty() {
                    if spec.required {
                        report.missing_field(spec.name);
                    }
                } else if !options.contains(&text) {
                    report.reject(
                        spec.name,
                        format!("must be one of: {}", options.join(", ")),
                    );
                }
            }
            FieldKind::Image => match form.get(spec.name) {
                Some(Value::String(s)) if !s.trim().is_empty() => {}
                Some(value @ Value::Object(_)) => {
                    if serde_json::from_value::<crate::model::ImageRef>(value.clone()).is_err() {
                        report.reject(spec.name, "not a valid image reference");
                    }
                }
                _ => {
                    if spec.required {
                        report.missing_field(spec.name);
                    }
                }
            },
            FieldKind::SubjectTable => {
                let has_rows = form
                    .get(spec.name)
                    .and_then(Value::as_array)
                    .map(|rows| {
                        rows.iter().any(|row| {
                            !row.get("name")
                                .and_then(Value::as_str)
                                .unwrap_or("")
                                .trim()
                                .is_empty()
                        })
                    })
                    .unwrap_or(false);
                if spec.required && !has_rows {
                    report.missing_field(spec.name);
                }
            }
        }
    }
    report
}

/// Loose shape check matching the site's `\S+@\S+\.\S+`.
pub fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Optional leading '+', then at least ten characters drawn from digits,
/// whitespace, '-', '(' and ')'.
pub fn looks_like_phone(s: &str) -> bool {
    let rest = s.strip_prefix('+').unwrap_or(s);
    rest.len() >= 10
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCHEMA: &[FieldSpec] = &[
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::required("email", FieldKind::Email),
        FieldSpec::optional("phone", FieldKind::Phone),
        FieldSpec::required("stream", FieldKind::Select(&["Science", "Commerce", "Arts"])),
        FieldSpec::required("image", FieldKind::Image),
    ];

    fn form(entries: &[(&str, Value)]) -> FormValues {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn one_report_collects_every_violation() {
        let report = validate(
            &form(&[
                ("name", json!("   ")),
                ("email", json!("not-an-email")),
                ("phone", json!("123")),
                ("stream", json!("Robotics")),
            ]),
            SCHEMA,
        );
        assert_eq!(report.missing, vec!["name", "image"]);
        let fields: Vec<_> = report.invalid.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "phone", "stream"]);
    }

    #[test]
    fn clean_form_passes() {
        let report = validate(
            &form(&[
                ("name", json!("Arjun Sharma")),
                ("email", json!("arjun@student.tagore.edu")),
                ("phone", json!("+91 98765 43210")),
                ("stream", json!("Science")),
                ("image", json!("/confident-indian-student.png")),
            ]),
            SCHEMA,
        );
        assert!(report.is_clean(), "{report:?}");
    }

    #[test]
    fn optional_fields_may_be_empty_but_not_malformed() {
        let base = [
            ("name", json!("x")),
            ("email", json!("a@b.c")),
            ("stream", json!("Arts")),
            ("image", json!("/x.png")),
        ];
        let report = validate(&form(&base), SCHEMA);
        assert!(report.is_clean());

        let mut with_bad_phone = base.to_vec();
        with_bad_phone.push(("phone", json!("abc")));
        let report = validate(&form(&with_bad_phone), SCHEMA);
        assert_eq!(report.invalid.len(), 1);
    }

    #[test]
    fn inline_image_objects_are_accepted() {
        let report = validate(
            &form(&[
                ("name", json!("x")),
                ("email", json!("a@b.c")),
                ("stream", json!("Arts")),
                ("image", json!({ "kind": "inline", "mime": "image/png", "data": "aGk=" })),
            ]),
            SCHEMA,
        );
        assert!(report.is_clean());

        let report = validate(
            &form(&[
                ("name", json!("x")),
                ("email", json!("a@b.c")),
                ("stream", json!("Arts")),
                ("image", json!({ "bogus": true })),
            ]),
            SCHEMA,
        );
        assert_eq!(report.invalid[0].field, "image");
    }

    #[test]
    fn phone_shapes() {
        assert!(looks_like_phone("+91 98765 43210"));
        assert!(looks_like_phone("(0744) 123-4567"));
        assert!(!looks_like_phone("12345"));
        assert!(!looks_like_phone("98765x43210"));
    }
}
