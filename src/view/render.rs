//! Text rendering of the dashboard state.

use std::fmt::Write;

use super::state::ViewState;

/// Acknowledgment line printed after a successful submission.
pub const USER_ADDED_ACK: &str = "User added successfully!";

/// Render the health section, or nothing if no health fetch has succeeded.
pub fn render_health(state: &ViewState) -> Option<String> {
    state.health.as_ref().map(|health| {
        format!(
            "✅ Backend Status: {}\n   {}",
            health.status, health.timestamp
        )
    })
}

/// Render the users section: a loading line or the roster.
pub fn render_users(state: &ViewState) -> String {
    if state.loading {
        return "Loading...".to_string();
    }

    if state.users.is_empty() {
        return "(no users)".to_string();
    }

    let mut out = String::new();
    for user in &state.users {
        let _ = writeln!(out, "  - {} - {}", user.name, user.email);
    }
    out.pop();
    out
}

/// Render the full dashboard.
pub fn render_dashboard(state: &ViewState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "🚀 Full Stack DevOps App");
    if let Some(health) = render_health(state) {
        let _ = writeln!(out, "{health}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Users");
    let _ = writeln!(out, "{}", render_users(state));

    out
}
