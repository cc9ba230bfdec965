//! Cross-record imputation keyed by IMO number
//!
//! Records of the same vessel from different years fill each other's
//! missing tonnage. Within each IMO group, in concatenation order, a null
//! takes the nearest preceding value (forward fill) and any leading nulls
//! then take the nearest following value (backward fill).

use crate::models::ShipRecord;
use std::collections::HashMap;
use tracing::debug;

/// Counts of values filled by [`impute_tonnage`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImputationStats {
    pub groups: usize,
    pub gt_filled: usize,
    pub ldt_filled: usize,
}

/// Fill GT and LDT gaps from sibling records sharing an IMO
///
/// Records without an IMO are left untouched; they are removed by the
/// final filter.
pub fn impute_tonnage(records: &mut [ShipRecord]) -> ImputationStats {
    let groups = group_by_imo(records);

    let mut stats = ImputationStats {
        groups: groups.len(),
        ..ImputationStats::default()
    };

    for indices in groups.values() {
        stats.gt_filled += fill_group(records, indices, |r| &mut r.gt);
        stats.ldt_filled += fill_group(records, indices, |r| &mut r.ldt);
    }

    debug!(
        "Imputed {} GT and {} LDT values across {} vessels",
        stats.gt_filled, stats.ldt_filled, stats.groups
    );
    stats
}

/// Row indices per IMO, each list in concatenation order
fn group_by_imo(records: &[ShipRecord]) -> HashMap<i64, Vec<usize>> {
    let mut groups: HashMap<i64, Vec<usize>> = HashMap::new();
    for (index, record) in records.iter().enumerate() {
        if let Some(imo) = record.imo {
            groups.entry(imo).or_default().push(index);
        }
    }
    groups
}

/// Forward then backward fill one field over a group; returns fills made
fn fill_group<F>(records: &mut [ShipRecord], indices: &[usize], field: F) -> usize
where
    F: Fn(&mut ShipRecord) -> &mut Option<f64>,
{
    let mut filled = 0;

    let mut last_seen = None;
    for &index in indices {
        let value = field(&mut records[index]);
        let current = *value;
        match current {
            Some(v) => last_seen = Some(v),
            None if last_seen.is_some() => {
                *value = last_seen;
                filled += 1;
            }
            None => {}
        }
    }

    let mut next_seen = None;
    for &index in indices.iter().rev() {
        let value = field(&mut records[index]);
        let current = *value;
        match current {
            Some(v) => next_seen = Some(v),
            None if next_seen.is_some() => {
                *value = next_seen;
                filled += 1;
            }
            None => {}
        }
    }

    filled
}

/// Drop records without an IMO; returns how many were removed
pub fn drop_missing_imo(records: &mut Vec<ShipRecord>) -> usize {
    let before = records.len();
    records.retain(|r| r.imo.is_some());
    before - records.len()
}
