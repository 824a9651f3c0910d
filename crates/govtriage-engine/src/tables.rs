//! Static decision tables
//!
//! Priority, response-time, routing and contact lookups are immutable data,
//! not branching logic, so each table is independently testable and the
//! engine's control flow stays linear.

use govtriage_core::{DepartmentContact, Priority};

/// Department every escalated ticket routes to
pub const ESCALATION_DEPARTMENT: &str = "Priority Escalation Team";

/// Categories that escalate when sentiment is Negative
const ESCALATION_CATEGORIES: &[&str] = &["Safety / Emergency", "Technical / IT"];

/// (category, priority when Negative, priority otherwise)
const PRIORITY_RULES: &[(&str, Priority, Priority)] = &[
    ("Safety / Emergency", Priority::Critical, Priority::High),
    ("Technical / IT", Priority::High, Priority::Medium),
    ("Billing", Priority::High, Priority::Medium),
    ("Facilities", Priority::High, Priority::Medium),
    ("Inquiry", Priority::Medium, Priority::Low),
];

/// (priority, response-time target)
const RESPONSE_TIMES: &[(Priority, &str)] = &[
    (Priority::Critical, "15 minutes"),
    (Priority::High, "1 hour"),
    (Priority::Medium, "4 hours"),
    (Priority::Low, "24 hours"),
];

/// (category, department)
const ROUTING: &[(&str, &str)] = &[
    ("Safety / Emergency", "Emergency Response Center"),
    ("Technical / IT", "IT Support Division"),
    ("Billing", "Finance & Accounts Department"),
    ("Facilities", "Municipal Services Department"),
    ("Inquiry", "Customer Service Center"),
];

const DEFAULT_DEPARTMENT: &str = "Customer Service Center";

/// (department, phone, email, supervisor)
const CONTACTS: &[(&str, &str, &str, &str)] = &[
    (
        "Emergency Response Center",
        "999",
        "emergency@uae.gov.ae",
        "Col. Ahmed Al Mansoori",
    ),
    (
        "IT Support Division",
        "800-IT-HELP",
        "itsupport@uae.gov.ae",
        "Eng. Fatima Al Zahrani",
    ),
    (
        "Finance & Accounts Department",
        "800-FINANCE",
        "finance@uae.gov.ae",
        "Mr. Khalid Al Qasimi",
    ),
    (
        "Municipal Services Department",
        "800-MUNICIPAL",
        "municipal@uae.gov.ae",
        "Eng. Mohammed Al Shamsi",
    ),
    (
        "Customer Service Center",
        "800-GOVERNMENT",
        "customerservice@uae.gov.ae",
        "Ms. Sara Al Muhairi",
    ),
    (
        "Priority Escalation Team",
        "800-PRIORITY",
        "escalation@uae.gov.ae",
        "Director General Office",
    ),
];

const FALLBACK_CONTACT: (&str, &str, &str) = ("800-GOVERNMENT", "info@uae.gov.ae", "Department Head");

/// Resolve priority from (category, sentiment); categories outside the
/// table resolve to Medium regardless of sentiment
pub fn resolve_priority(category: &str, sentiment: &str) -> Priority {
    let negative = sentiment == "Negative";
    PRIORITY_RULES
        .iter()
        .find(|(c, _, _)| *c == category)
        .map(|(_, when_negative, otherwise)| {
            if negative {
                *when_negative
            } else {
                *otherwise
            }
        })
        .unwrap_or(Priority::Medium)
}

/// Response-time target for a priority
pub fn response_time(priority: Priority) -> &'static str {
    RESPONSE_TIMES
        .iter()
        .find(|(p, _)| *p == priority)
        .map(|(_, t)| *t)
        .unwrap_or("4 hours")
}

/// Route a category to its department, escalating Negative-sentiment
/// tickets in the escalation categories
pub fn route_department(category: &str, sentiment: &str) -> &'static str {
    if sentiment == "Negative" && ESCALATION_CATEGORIES.contains(&category) {
        return ESCALATION_DEPARTMENT;
    }

    ROUTING
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, d)| *d)
        .unwrap_or(DEFAULT_DEPARTMENT)
}

/// Contact details for a department, with a generic fallback for unknown
/// departments
pub fn department_contact(department: &str) -> DepartmentContact {
    CONTACTS
        .iter()
        .find(|(d, _, _, _)| *d == department)
        .map(|(_, phone, email, supervisor)| DepartmentContact {
            phone: phone.to_string(),
            email: email.to_string(),
            supervisor: supervisor.to_string(),
        })
        .unwrap_or_else(|| DepartmentContact {
            phone: FALLBACK_CONTACT.0.to_string(),
            email: FALLBACK_CONTACT.1.to_string(),
            supervisor: FALLBACK_CONTACT.2.to_string(),
        })
}
