//! Store counters

/// Point-in-time view of a store's slot table and counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoreStats {
    /// Allocated slots
    pub capacity: usize,
    /// Occupied slots (saved but not yet restored)
    pub outstanding: usize,
    /// Successful saves
    pub saves: u64,
    /// Successful restores
    pub restores: u64,
    /// Times the slot table doubled
    pub grow_events: u64,
    /// Misuse conditions reported
    pub diagnostics: u64,
}

impl StoreStats {
    /// True if every saved cursor has been restored
    pub fn is_balanced(&self) -> bool {
        self.outstanding == 0
    }

    /// Generate report
    pub fn report(&self) -> String {
        format!(
            "Slots: {} ({} outstanding)\nSaves: {}\nRestores: {}\nGrowth: {}\nDiagnostics: {}",
            self.capacity,
            self.outstanding,
            self.saves,
            self.restores,
            self.grow_events,
            self.diagnostics
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lists_counters() {
        let stats = StoreStats {
            capacity: 20,
            outstanding: 1,
            saves: 11,
            restores: 10,
            grow_events: 1,
            diagnostics: 0,
        };
        assert!(!stats.is_balanced());
        let report = stats.report();
        assert!(report.starts_with("Slots: 20 (1 outstanding)"));
        assert!(report.contains("Growth: 1"));
    }
}
