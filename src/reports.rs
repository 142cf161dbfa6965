// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregations over a ledger snapshot. Nothing here mutates or
//! persists; callers pass the reference month/year where one is needed.
//!
//! Records whose stored date no longer parses count toward the all-time
//! total but never match a month or year bucket.

use chrono::Datelike;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use crate::models::{Category, ExpenseRecord};

/// Sum of every record's amount. Zero on an empty ledger.
pub fn total_of(records: &[ExpenseRecord]) -> Decimal {
    records.iter().map(|r| r.amount).sum()
}

/// Sum of amounts whose date falls in exactly (year, month).
pub fn total_in_month(records: &[ExpenseRecord], year: i32, month: u32) -> Decimal {
    records
        .iter()
        .filter(|r| {
            r.calendar_date()
                .is_some_and(|d| d.year() == year && d.month() == month)
        })
        .map(|r| r.amount)
        .sum()
}

/// Sum of amounts whose date falls in the given year.
pub fn total_in_year(records: &[ExpenseRecord], year: i32) -> Decimal {
    records
        .iter()
        .filter(|r| r.calendar_date().is_some_and(|d| d.year() == year))
        .map(|r| r.amount)
        .sum()
}

/// Per-month totals keyed `YYYY-MM`, most recent month first. Months with no
/// records get no entry. Zero-padded keys make the lexicographic order the
/// chronological one.
pub fn monthly_breakdown(records: &[ExpenseRecord]) -> Vec<(String, Decimal)> {
    let mut buckets: BTreeMap<String, Decimal> = BTreeMap::new();
    for r in records {
        if let Some(d) = r.calendar_date() {
            let key = format!("{:04}-{:02}", d.year(), d.month());
            *buckets.entry(key).or_insert(Decimal::ZERO) += r.amount;
        }
    }
    buckets.into_iter().rev().collect()
}

/// Per-category totals for one (year, month), largest spend first. Equal
/// amounts order alphabetically by category name.
pub fn category_breakdown(
    records: &[ExpenseRecord],
    year: i32,
    month: u32,
) -> Vec<(Category, Decimal)> {
    let mut totals: HashMap<Category, Decimal> = HashMap::new();
    for r in records {
        let in_month = r
            .calendar_date()
            .is_some_and(|d| d.year() == year && d.month() == month);
        if in_month {
            *totals.entry(r.category).or_insert(Decimal::ZERO) += r.amount;
        }
    }
    let mut items: Vec<_> = totals.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));
    items
}
