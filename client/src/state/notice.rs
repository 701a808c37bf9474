//! Transient user-facing notifications (toasts).
//!
//! DESIGN
//! ======
//! One notice is visible at a time and the latest one wins. Every `show`
//! bumps a sequence number so a dismiss timer started for an older notice
//! cannot clear a newer one.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// How long a notice stays on screen.
pub const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub current: Option<Notice>,
    pub seq: u64,
}

impl NoticeState {
    /// Replace the visible notice; returns the sequence number to dismiss it by.
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.seq += 1;
        self.current = Some(notice);
        self.seq
    }

    /// Clear the notice only if it is still the one shown at `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.seq == seq {
            self.current = None;
        }
    }
}
