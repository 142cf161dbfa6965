// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spending category. The wire names are fixed; anything else is rejected
/// when a slot is parsed or a command-line value is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Housing,
    Utilities,
    Health,
    Entertainment,
    Shopping,
    Investment,
    Education,
    Other,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Food,
        Category::Transport,
        Category::Housing,
        Category::Utilities,
        Category::Health,
        Category::Entertainment,
        Category::Shopping,
        Category::Investment,
        Category::Education,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Housing => "Housing",
            Category::Utilities => "Utilities",
            Category::Health => "Health",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Investment => "Investment",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Food
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .find(|c| c.as_str().to_lowercase() == lower)
            .copied()
            .ok_or_else(|| format!("Unknown category '{}'", s))
    }
}

/// How an expense was paid. Wire names match the stored strings exactly
/// ("Credit Card", "UPI/Digital", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "UPI/Digital")]
    UpiDigital,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Cash,
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::UpiDigital,
        PaymentMethod::BankTransfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::UpiDigital => "UPI/Digital",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cash
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept "Credit Card", "credit-card", "upi", etc. from the command line.
        let folded: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match folded.as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "creditcard" => Ok(PaymentMethod::CreditCard),
            "debitcard" => Ok(PaymentMethod::DebitCard),
            "upi" | "upidigital" | "digital" => Ok(PaymentMethod::UpiDigital),
            "banktransfer" => Ok(PaymentMethod::BankTransfer),
            _ => Err(format!("Unknown payment method '{}'", s)),
        }
    }
}

/// One recorded expense, exactly as it sits in the persisted slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: String,
    /// ISO `YYYY-MM-DD`. Kept as a string: a slot written by an older build
    /// may hold a date that no longer parses, and such records stay in the
    /// ledger (and in the all-time total) but never match a month or year.
    pub date: String,
    pub amount: Decimal,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    pub payment_method: PaymentMethod,
}

impl ExpenseRecord {
    /// The record's calendar date, if it still parses.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// A not-yet-stored expense as it comes off the form: no id, nothing
/// validated beyond its types. `LedgerStore::add` rejects drafts with a
/// missing date or amount and fills in the category/method defaults.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
    pub category: Option<Category>,
    pub description: String,
    pub payment_method: Option<PaymentMethod>,
}
