//! Local UI chrome state (login prompt, transient notices).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of domain state (`auth`, `design`,
//! `gallery`) so the prompt and toasts can change without touching the
//! auth state machine.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tone of a transient notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Distinguishes repeated identical notices so auto-dismiss timers only
    /// clear the one they were started for.
    pub seq: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub login_open: bool,
    /// What the user was trying to do when the prompt opened.
    pub login_reason: Option<String>,
    pub notice: Option<Notice>,
    notice_seq: u64,
}

impl UiState {
    pub fn open_login(&mut self, reason: Option<&str>) {
        self.login_open = true;
        self.login_reason = reason.map(str::to_owned);
    }

    pub fn close_login(&mut self) {
        self.login_open = false;
        self.login_reason = None;
    }

    /// Show a notice and return its sequence number.
    pub fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.notice_seq = self.notice_seq.wrapping_add(1);
        self.notice = Some(Notice { kind, text: text.into(), seq: self.notice_seq });
        self.notice_seq
    }

    /// Clear the notice if it is still the one identified by `seq`.
    pub fn dismiss_notice(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }
}
