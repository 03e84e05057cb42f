//! Expense claim validation.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::fields::{check_one_of, parse_date_field, require_str, NumberOrString};
use crate::ValidationErrors;

pub const EXPENSE_CATEGORIES: &[&str] =
    &["travel", "food", "accommodation", "office_supplies", "other"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseBody {
    pub title: Option<String>,
    pub amount: Option<NumberOrString>,
    pub category: Option<String>,
    pub date: Option<String>,
}

/// Check an expense claim. Expense dates may not lie after `today`.
pub fn validate_expense(body: &ExpenseBody, today: NaiveDate) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    require_str(&mut errors, body.title.as_deref(), "Title is required");

    match &body.amount {
        None => errors.push("Amount is required"),
        Some(raw) => match raw.as_f64() {
            Some(amount) if amount > 0.0 => {}
            _ => errors.push("Amount must be a positive number"),
        },
    }

    if let Some(category) = require_str(&mut errors, body.category.as_deref(), "Category is required") {
        check_one_of(&mut errors, category, EXPENSE_CATEGORIES, "category");
    }

    let date = require_str(&mut errors, body.date.as_deref(), "Date is required")
        .and_then(|s| parse_date_field(&mut errors, s, "date"));
    if let Some(date) = date {
        if date > today {
            errors.push("Expense date cannot be in the future");
        }
    }

    errors.into_result()
}
