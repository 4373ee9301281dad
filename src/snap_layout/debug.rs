use super::{SnapLayout, integrity};

impl SnapLayout {
    pub(super) fn debug_log_event(&mut self, message: impl Into<String>) {
        if !self.options.debug_event_log {
            return;
        }
        self.push_debug_log_line(message.into());
    }

    pub(super) fn debug_integrity_log_event(&mut self, message: impl Into<String>) {
        if !self.options.debug_integrity {
            return;
        }
        self.push_debug_log_line(message.into());
    }

    fn push_debug_log_line(&mut self, message: String) {
        let cap = self.options.debug_event_log_capacity.clamp(1, 10_000);
        while self.debug_log.len() >= cap {
            self.debug_log.pop_front();
        }
        let op = self.op_serial;
        self.debug_log.push_back(format!("[op {op}] {message}"));
    }

    /// Clear the recorded event log.
    pub fn debug_log_clear(&mut self) {
        self.debug_log.clear();
    }

    /// The recorded event log, oldest line first.
    pub fn debug_log_text(&self) -> String {
        self.debug_log
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(super) fn debug_check_integrity(&mut self) {
        if !self.options.debug_integrity {
            return;
        }

        let issues = integrity::layout_integrity_issues(&self.panels);
        let hash = integrity::hash_issues(&issues);
        let prev = std::mem::replace(&mut self.debug_last_integrity_hash, hash);
        if prev == hash {
            return;
        }

        if issues.is_empty() {
            self.debug_integrity_log_event("integrity OK");
            return;
        }

        let joined = issues.join("\n");
        self.debug_integrity_log_event(format!("integrity FAIL issues={}", issues.len()));
        for issue in issues {
            self.debug_integrity_log_event(issue);
        }

        if self.options.debug_integrity_panic && cfg!(debug_assertions) {
            panic!("snap layout integrity failure:\n{joined}");
        }
    }
}
