//! Transient status message shown after user actions.
//!
//! DESIGN
//! ======
//! A new message replaces the current one at once; there is no queue. Each
//! message gets a sequence number and the hide timer dismisses by number, so a
//! timer left over from an earlier message cannot hide a newer one.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Time a message stays visible.
pub const NOTICE_DURATION_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub text: String,
    pub kind: NoticeKind,
}

#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub current: Option<Notice>,
    next_seq: u64,
}

impl NoticeState {
    /// Replace whatever is showing. Returns the sequence number to dismiss with.
    pub fn show(&mut self, text: impl Into<String>, kind: NoticeKind) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.current = Some(Notice { seq, text: text.into(), kind });
        seq
    }

    /// Hide the message numbered `seq` if it is still the one showing.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.seq == seq) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn visible(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Banner classes; the `show` modifier is present only while visible.
    pub fn class(&self) -> String {
        match &self.current {
            Some(notice) => format!("status-message {} show", notice.kind.as_str()),
            None => "status-message".to_owned(),
        }
    }
}
