// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::LedgerStore;
use crate::reports::{category_breakdown, monthly_breakdown, total_in_month, total_in_year, total_of};
use crate::utils::{fmt_amount, maybe_print_json, month_parts, parse_month, pretty_table, this_month};
use anyhow::Result;
use rust_decimal::Decimal;

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("monthly", sub)) => monthly(store, sub)?,
        Some(("categories", sub)) => categories(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (year, month) = this_month();
    let records = store.records();
    let data = vec![
        vec![
            "This Month".to_string(),
            fmt_amount(&total_in_month(records, year, month)),
        ],
        vec![
            "This Year".to_string(),
            fmt_amount(&total_in_year(records, year)),
        ],
        vec!["All Time".to_string(), fmt_amount(&total_of(records))],
    ];
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Period", "Spent"], data));
    }
    Ok(())
}

fn monthly(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data: Vec<Vec<String>> = monthly_breakdown(store.records())
        .into_iter()
        .map(|(key, amount)| vec![key, fmt_amount(&amount)])
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Month", "Spent"], data));
    }
    Ok(())
}

fn categories(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (year, month) = match sub.get_one::<String>("month") {
        Some(s) => month_parts(&parse_month(s)?)?,
        None => this_month(),
    };
    let records = store.records();
    let month_total = total_in_month(records, year, month);
    let hundred = Decimal::from(100);
    let mut data = Vec::new();
    for (category, amount) in category_breakdown(records, year, month) {
        let share = if month_total.is_zero() {
            Decimal::ZERO
        } else {
            (amount * hundred / month_total).round_dp(1)
        };
        data.push(vec![
            category.to_string(),
            fmt_amount(&amount),
            format!("{:.1}%", share),
        ]);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Category", "Spent", "Share"], data));
    }
    Ok(())
}
