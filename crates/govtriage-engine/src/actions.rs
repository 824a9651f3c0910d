//! Action-item generation
//!
//! Deterministic, rule-driven staff directives. Blocks are additive across
//! independent triggers and appended in a fixed order: critical block,
//! category block, sentiment block. Order within a block is fixed too.

use govtriage_core::Priority;

/// Generate the ordered action list for a resolved ticket
pub fn action_items(category: &str, sentiment: &str, priority: Priority) -> Vec<String> {
    let mut actions = Vec::new();

    if priority == Priority::Critical {
        actions.push("IMMEDIATE ACTION REQUIRED: contact emergency services".to_string());
        actions.push("Notify department head immediately".to_string());
        actions.push("Response time: 15 minutes maximum".to_string());
    }

    match category {
        "Safety / Emergency" => {
            actions.push("Activate emergency response protocol".to_string());
            actions.push("Dispatch field team to location".to_string());
            actions.push("Document incident for compliance".to_string());
        }
        "Technical / IT" => {
            actions.push("Assign to IT support team".to_string());
            if priority == Priority::High {
                actions.push("SLA: resolve within 4 hours".to_string());
            } else {
                actions.push("SLA: resolve within 24 hours".to_string());
            }
        }
        "Billing" => {
            actions.push("Forward to finance department".to_string());
            actions.push("Verify charges with billing system".to_string());
            actions.push("Send acknowledgment email to citizen".to_string());
        }
        "Facilities" => {
            actions.push("Assign maintenance team".to_string());
            if priority == Priority::High {
                actions.push("SLA: address within 8 hours".to_string());
            } else {
                actions.push("SLA: address within 48 hours".to_string());
            }
        }
        "Inquiry" => {
            actions.push("Contact citizen for clarification".to_string());
            actions.push("Provide information package".to_string());
            actions.push("SLA: respond within 24 hours".to_string());
        }
        _ => {}
    }

    match sentiment {
        "Negative" => {
            actions.push("Citizen frustration detected: escalate to supervisor".to_string());
            actions.push("Call citizen to address concerns".to_string());
        }
        "Positive" => {
            actions.push("Positive feedback: log for employee recognition".to_string());
        }
        _ => {}
    }

    actions
}
