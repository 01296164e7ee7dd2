//! Inventory aggregation for the vaccine-stock view.
//!
//! Groups flat batch rows by vaccine name in a single pass. The key is the
//! verbatim name string — "BCG" and "bcg " are distinct groups. That quirk
//! is inherited from existing data and kept on purpose; folding the key
//! would silently merge stock lines the server considers separate.

use crate::models::inventory::{BatchDetail, GroupedVaccine, VaccineBatch};

/// Reduces batch rows into one aggregate per vaccine name, preserving the
/// insertion order of first occurrence. Total stock is conserved: the sum
/// over all groups equals the sum over all input rows.
pub fn group_by_vaccine_name(batches: &[VaccineBatch]) -> Vec<GroupedVaccine> {
    let mut groups: Vec<GroupedVaccine> = Vec::new();
    for batch in batches {
        let idx = match groups.iter().position(|g| g.name == batch.name) {
            Some(idx) => idx,
            None => {
                groups.push(GroupedVaccine {
                    name: batch.name.clone(),
                    total_stock: 0,
                    details: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[idx].total_stock += u64::from(batch.stock);
        groups[idx].details.push(BatchDetail {
            label: batch_label(batch),
            batch_id: batch.batch_id.clone(),
            stock: batch.stock,
        });
    }
    groups
}

fn batch_label(batch: &VaccineBatch) -> String {
    match batch.expiration_date {
        Some(exp) => format!("{} ({})", batch.brand, exp.format("%Y-%m-%d")),
        None => format!("{} (no expiry)", batch.brand),
    }
}
