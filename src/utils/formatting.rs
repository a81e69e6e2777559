//! Formatting utilities used for CLI outputs.

use crate::models::accounting::InternshipProgress;
use crate::models::session::Session;
use crate::utils::colors::{GREEN, GREY, color_for_overtime, paint};

/// Badges shown next to a session row.
pub fn session_badges(s: &Session) -> String {
    let mut badges = Vec::new();
    if s.is_active {
        badges.push(paint(GREEN, "● live"));
    }
    if s.is_continuous_session {
        badges.push(paint(GREY, &format!("⛓ {} logs", s.logs.len())));
    }
    if s.durations.raw.overtime_hours > 0.0 || s.session_type.is_overtime() {
        let status = s.durations.raw.overtime_status;
        badges.push(paint(color_for_overtime(status), &format!("OT {}", status.as_str())));
    }
    badges.join(" ")
}

/// `[#####-----]` bar for the clamped display percentage.
pub fn progress_bar(progress: &InternshipProgress, width: usize) -> String {
    let filled = ((progress.display_percentage() / 100.0) * width as f64).floor() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_clamped_for_display() {
        let p = InternshipProgress {
            internship_progress: 600.0,
            progress_percentage: 115.38,
            required_hours: 520.0,
        };
        assert_eq!(progress_bar(&p, 4), "[####]");

        let half = InternshipProgress {
            internship_progress: 260.0,
            progress_percentage: 50.0,
            required_hours: 520.0,
        };
        assert_eq!(progress_bar(&half, 4), "[##--]");
    }
}
