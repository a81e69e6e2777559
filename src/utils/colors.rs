/// ANSI color helper utilities for terminal output.
use crate::core::calculator::realtime::ClockState;
use crate::models::time_log::OvertimeStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Overtime badge color: approved green, pending yellow, rejected red.
pub fn color_for_overtime(status: OvertimeStatus) -> &'static str {
    match status {
        OvertimeStatus::Approved => GREEN,
        OvertimeStatus::Pending => YELLOW,
        OvertimeStatus::Rejected => RED,
    }
}

pub fn color_for_clock_state(state: ClockState) -> &'static str {
    match state {
        ClockState::NotClockedIn => GREY,
        ClockState::ClockedIn => GREEN,
        ClockState::AutoTimedOut => RED,
        ClockState::OvertimeEligible => CYAN,
        ClockState::OvertimeClockedIn | ClockState::OvertimeClockedOut => MAGENTA,
    }
}

pub fn paint(color: &str, text: &str) -> String {
    format!("{color}{text}{RESET}")
}
