//! Single-slot status banner shown above the forms.
//!
//! Every operation ends by emitting a [`Flash`]; the app root applies it to
//! the one [`StatusState`] and arms a timer that clears the banner after
//! [`STATUS_VISIBLE_MS`]. Timers are never cancelled. Instead each applied
//! flash bumps an epoch counter and the timer carries the epoch it was armed
//! with, so a timer that outlived its message expires without effect. That
//! gives newer messages a full display window even when they arrive while an
//! older timer is still pending.

/// How long a status message stays visible.
pub const STATUS_VISIBLE_MS: u32 = 3_000;

/// Visual severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Nothing to report; the banner is blank.
    #[default]
    Idle,
    Success,
    Warning,
    Danger,
}

impl Severity {
    /// CSS class the banner renders with.
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Idle => "flash-idle",
            Severity::Success => "flash-success",
            Severity::Warning => "flash-warning",
            Severity::Danger => "flash-danger",
        }
    }
}

/// One outcome message on its way to the banner.
#[derive(Debug, Clone, PartialEq)]
pub struct Flash {
    pub severity: Severity,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Flash {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Flash {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Flash {
            severity: Severity::Danger,
            message: message.into(),
        }
    }

    /// Blanks the banner immediately, with no timer.
    pub fn clear() -> Self {
        Flash {
            severity: Severity::Idle,
            message: String::new(),
        }
    }
}

/// Current banner content plus the epoch of the most recent flash.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusState {
    severity: Severity,
    message: String,
    epoch: u32,
}

impl StatusState {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_idle(&self) -> bool {
        self.severity == Severity::Idle
    }

    /// Shows `flash` and returns the epoch a dismiss timer should carry, or
    /// `None` when the flash was a clear and no timer is wanted.
    pub fn apply(&mut self, flash: Flash) -> Option<u32> {
        if flash.severity == Severity::Idle {
            self.severity = Severity::Idle;
            self.message.clear();
            return None;
        }
        self.severity = flash.severity;
        self.message = flash.message;
        self.epoch = self.epoch.wrapping_add(1);
        Some(self.epoch)
    }

    /// Timer callback. Clears the banner only when `epoch` still names the
    /// message on display; stale timers do nothing. Returns whether anything
    /// changed.
    pub fn expire(&mut self, epoch: u32) -> bool {
        if self.epoch != epoch || self.is_idle() {
            return false;
        }
        self.severity = Severity::Idle;
        self.message.clear();
        true
    }
}
