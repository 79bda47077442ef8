use serde::Serialize;

use crate::item::{EnvironmentItem, RecordKind};

/// Per-kind counts over a parse result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub temperatures: usize,
    pub power_statuses: usize,
    pub power_usages: usize,
    /// Power-status and power-usage records whose status is not healthy.
    pub unhealthy: usize,
}

impl Summary {
    #[must_use]
    pub fn from_items(items: &[EnvironmentItem]) -> Self {
        items.iter().fold(Self::default(), |mut acc, item| {
            match item.kind() {
                RecordKind::Temperature => acc.temperatures += 1,
                RecordKind::PowerStatus => acc.power_statuses += 1,
                RecordKind::PowerUsage => acc.power_usages += 1,
            }
            if item.ok() == Some(false) {
                acc.unhealthy += 1;
            }
            acc
        })
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.temperatures + self.power_statuses + self.power_usages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_kinds_and_unhealthy() {
        let items = vec![
            EnvironmentItem::temperature("1 FRONT", 32.0),
            EnvironmentItem::power_status("1 AC", true, "ok"),
            EnvironmentItem::power_status("2 AC", false, "fail"),
            EnvironmentItem::power_usage("1 N9K-C9372PX", 465.0, false),
        ];

        let summary = Summary::from_items(&items);
        assert_eq!(
            summary,
            Summary {
                temperatures: 1,
                power_statuses: 2,
                power_usages: 1,
                unhealthy: 2,
            }
        );
        assert_eq!(summary.total(), 4);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(Summary::from_items(&[]).total(), 0);
    }
}
