//! Exclusive tab selection.

/// A closed, statically known set of tabs. `Default` must be the first
/// entry of `ALL`.
pub trait TabSet: Copy + Eq + Default + 'static {
    /// Declaration order.
    const ALL: &'static [Self];

    /// Stable identifier (`data-tab` value).
    fn value(self) -> &'static str;

    /// Trigger text.
    fn label(self) -> &'static str;
}

/// Exactly one active tab out of `T::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelector<T: TabSet> {
    active: T,
}

impl<T: TabSet> Default for TabSelector<T> {
    fn default() -> Self {
        Self {
            active: T::default(),
        }
    }
}

impl<T: TabSet> TabSelector<T> {
    pub fn active(&self) -> T {
        self.active
    }

    pub fn is_active(&self, tab: T) -> bool {
        self.active == tab
    }

    /// Returns whether the active tab changed.
    pub fn select(&mut self, tab: T) -> bool {
        let changed = self.active != tab;
        self.active = tab;
        changed
    }
}

/// Case-study showcase tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CaseStudyTab {
    #[default]
    Ai,
    Dashboards,
    Infra,
}

impl TabSet for CaseStudyTab {
    const ALL: &'static [Self] = &[CaseStudyTab::Ai, CaseStudyTab::Dashboards, CaseStudyTab::Infra];

    fn value(self) -> &'static str {
        match self {
            CaseStudyTab::Ai => "ai",
            CaseStudyTab::Dashboards => "dashboards",
            CaseStudyTab::Infra => "infra",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CaseStudyTab::Ai => "AI & Data Systems",
            CaseStudyTab::Dashboards => "Dashboards & Visualization",
            CaseStudyTab::Infra => "Custom Infrastructure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_first_declared() {
        assert_eq!(CaseStudyTab::default(), CaseStudyTab::ALL[0]);
        let tabs = TabSelector::<CaseStudyTab>::default();
        assert_eq!(tabs.active(), CaseStudyTab::Ai);
    }

    #[test]
    fn selecting_activates_exactly_that_tab() {
        let mut tabs = TabSelector::<CaseStudyTab>::default();
        for &tab in CaseStudyTab::ALL {
            tabs.select(tab);
            let active: Vec<_> = CaseStudyTab::ALL
                .iter()
                .filter(|t| tabs.is_active(**t))
                .collect();
            assert_eq!(active, vec![&tab]);
        }
    }

    #[test]
    fn reselecting_reports_no_change() {
        let mut tabs = TabSelector::<CaseStudyTab>::default();
        assert!(!tabs.select(CaseStudyTab::Ai));
        assert!(tabs.select(CaseStudyTab::Infra));
        assert!(!tabs.select(CaseStudyTab::Infra));
    }

    #[test]
    fn values_are_unique() {
        let mut values: Vec<_> = CaseStudyTab::ALL.iter().map(|t| t.value()).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), CaseStudyTab::ALL.len());
    }
}
