// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::LedgerStore;
use crate::models::{Category, ExpenseDraft, ExpenseRecord, PaymentMethod};
use crate::utils::{fmt_amount, maybe_print_json, parse_amount, parse_date, parse_month, pretty_table, today};
use anyhow::Result;
use serde::Serialize;

pub fn handle(store: &mut LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.parse::<Category>())
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))?;
    let payment_method = sub
        .get_one::<String>("method")
        .map(|s| s.parse::<PaymentMethod>())
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))?;
    let description = sub
        .get_one::<String>("description")
        .cloned()
        .unwrap_or_default();

    let draft = ExpenseDraft {
        date: Some(date),
        amount: Some(amount),
        category,
        description,
        payment_method,
    };
    match store.add(draft)? {
        Some(record) => println!(
            "Recorded {} on {} ({}, {}) id {}",
            fmt_amount(&record.amount),
            record.date,
            record.category,
            record.payment_method,
            record.id
        ),
        None => println!("Nothing recorded: an expense needs a date and a non-negative amount"),
    }
    Ok(())
}

fn list(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store.records(), sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.category.clone(),
                    r.description.clone(),
                    r.method.clone(),
                    r.amount.clone(),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Category", "Description", "Method", "Amount", "Id"],
                rows,
            )
        );
        println!("{} of {} records", data.len(), store.len());
    }
    Ok(())
}

fn rm(store: &mut LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if store.remove(id)? {
        println!("Removed expense {}", id);
    } else {
        println!("No expense with id {}", id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct ExpenseRow {
    pub id: String,
    pub date: String,
    pub amount: String,
    pub category: String,
    pub description: String,
    pub method: String,
}

/// The listing rows for `expense list`, after the month/category filters and
/// the row limit. Kept public so tests can drive it straight from parsed
/// matches.
pub fn query_rows(records: &[ExpenseRecord], sub: &clap::ArgMatches) -> Result<Vec<ExpenseRow>> {
    let month = sub
        .get_one::<String>("month")
        .map(|s| parse_month(s))
        .transpose()?;
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.parse::<Category>())
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))?;
    let limit = sub.get_one::<usize>("limit").copied();

    let mut data = Vec::new();
    for r in records {
        if let Some(m) = &month {
            if r.date.get(0..7) != Some(m.as_str()) {
                continue;
            }
        }
        if let Some(c) = category {
            if r.category != c {
                continue;
            }
        }
        data.push(ExpenseRow {
            id: r.id.clone(),
            date: r.date.clone(),
            amount: fmt_amount(&r.amount),
            category: r.category.to_string(),
            description: r.description.clone(),
            method: r.payment_method.to_string(),
        });
    }
    if let Some(n) = limit {
        data.truncate(n);
    }
    Ok(data)
}
