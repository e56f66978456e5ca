//! Setup outcome reporting.

/// What a single enhancement pass changed or bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnhancementReport {
    /// Tooltips and popovers activated.
    pub widgets_activated: usize,
    /// Whether the alert dismissal timer was scheduled.
    pub alert_dismissal_scheduled: bool,
    /// Navigation links marked active.
    pub active_nav_links: usize,
    /// File rows that received a click listener in this pass.
    pub file_rows_bound: usize,
    /// Theme controls that received a click listener in this pass.
    pub theme_controls_bound: usize,
    /// Whether the mobile nav auto-close listener was installed in this pass.
    pub nav_collapse_bound: bool,
    /// Whether a preview container received the fade-in class.
    pub preview_faded_in: bool,
    /// Copy controls that received a click listener in this pass.
    pub copy_controls_bound: usize,
    /// Tables wrapped in a responsive container.
    pub tables_wrapped: usize,
}

impl EnhancementReport {
    /// One-line summary for the console.
    pub fn summary(&self) -> String {
        format!(
            "page enhanced: {} widgets, {} active nav links, {} file rows, {} theme controls, \
             {} copy controls, {} tables wrapped, alert timer {}, nav auto-close {}, preview {}",
            self.widgets_activated,
            self.active_nav_links,
            self.file_rows_bound,
            self.theme_controls_bound,
            self.copy_controls_bound,
            self.tables_wrapped,
            on_off(self.alert_dismissal_scheduled),
            on_off(self.nav_collapse_bound),
            on_off(self.preview_faded_in),
        )
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_counts_and_flags() {
        let report = EnhancementReport {
            widgets_activated: 3,
            alert_dismissal_scheduled: true,
            file_rows_bound: 12,
            tables_wrapped: 1,
            ..EnhancementReport::default()
        };
        assert_eq!(
            report.summary(),
            "page enhanced: 3 widgets, 0 active nav links, 12 file rows, 0 theme controls, \
             0 copy controls, 1 tables wrapped, alert timer on, nav auto-close off, preview off"
        );
    }
}
