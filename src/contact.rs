//! Public contact-form outbox.
//!
//! Nothing is actually sent anywhere. A submission is validated, stored in
//! memory, and reported as "pending" until a fixed simulated delivery
//! delay has elapsed, after which it reads as "submitted". A pending
//! submission cannot be aborted.

use std::time::{Duration, Instant};

use crate::model::ContactMessage;
use crate::schema::{looks_like_email, looks_like_phone, ValidationReport};

/// Matches the site's simulated network round trip.
pub const DELIVERY_DELAY: Duration = Duration::from_millis(2000);

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_SUBMITTED: &str = "submitted";

struct OutboxEntry {
    message: ContactMessage,
    ready_at: Instant,
}

pub struct Outbox {
    entries: Vec<OutboxEntry>,
}

impl Outbox {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store the message; its id comes with it. Delivery completes
    /// `DELIVERY_DELAY` after this call.
    pub fn submit(&mut self, message: ContactMessage) {
        self.entries.push(OutboxEntry {
            message,
            ready_at: Instant::now() + DELIVERY_DELAY,
        });
    }

    pub fn status(&self, id: &str) -> Option<&'static str> {
        self.entries.iter().find(|e| e.message.id == id).map(|e| {
            if Instant::now() >= e.ready_at {
                STATUS_SUBMITTED
            } else {
                STATUS_PENDING
            }
        })
    }
}

impl Default for Outbox {
    fn default() -> Self {
        Self::new()
    }
}

/// The site's contact-form checks, collected into one report.
pub fn validate_submission(
    name: &str,
    email: &str,
    phone: &str,
    message: &str,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    if name.trim().is_empty() {
        report.missing_field("name");
    }
    if email.trim().is_empty() {
        report.missing_field("email");
    } else if !looks_like_email(email.trim()) {
        report.reject("email", "Email is invalid");
    }
    if phone.trim().is_empty() {
        report.missing_field("phone");
    } else if !looks_like_phone(phone.trim()) {
        report.reject("phone", "Phone number is invalid");
    }
    if message.trim().is_empty() {
        report.missing_field("message");
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn message(id: &str) -> ContactMessage {
        ContactMessage {
            id: id.to_string(),
            name: "Parent".to_string(),
            email: "parent@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            message: "Admission enquiry".to_string(),
            received_at: Utc::now(),
        }
    }

    #[test]
    fn submission_is_pending_until_the_delay_elapses() {
        let mut outbox = Outbox::new();
        outbox.submit(message("m-1"));
        assert_eq!(outbox.status("m-1"), Some(STATUS_PENDING));
        assert_eq!(outbox.status("m-2"), None);
    }

    #[test]
    fn empty_fields_are_all_reported_at_once() {
        let report = validate_submission("", "", "", "");
        assert_eq!(report.missing, vec!["name", "email", "phone", "message"]);
        assert!(report.invalid.is_empty());
    }

    #[test]
    fn malformed_email_and_phone_are_rejected() {
        let report = validate_submission("A Parent", "not-an-email", "12345", "Hi");
        assert!(report.missing.is_empty());
        let fields: Vec<_> = report.invalid.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "phone"]);
    }
}
