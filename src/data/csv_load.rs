use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::{BudgetCategory, Transaction};

/// Load budget categories from a CSV with `name,spent,limit` columns.
/// Column order does not matter; header names are matched case-insensitively.
pub(crate) fn load_budgets(path: &Path) -> Result<Vec<BudgetCategory>> {
    let (headers, rows) = read_rows(path)?;
    let name_col = column_index(&headers, "name")?;
    let spent_col = column_index(&headers, "spent")?;
    let limit_col = column_index(&headers, "limit")?;

    let mut categories = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let name = field(row, name_col);
        if name.is_empty() {
            continue;
        }
        let spent = parse_decimal(field(row, spent_col))
            .with_context(|| format!("Row {}: failed to parse spent", i + 2))?;
        let limit = parse_decimal(field(row, limit_col))
            .with_context(|| format!("Row {}: failed to parse limit", i + 2))?;
        categories.push(BudgetCategory::new(name.to_string(), spent, limit));
    }

    tracing::info!(path = %path.display(), count = categories.len(), "loaded budget categories");
    Ok(categories)
}

/// Load transactions from a CSV with `date,description,category,amount` columns.
/// `category` is optional and defaults to "Uncategorized".
pub(crate) fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let (headers, rows) = read_rows(path)?;
    let date_col = column_index(&headers, "date")?;
    let desc_col = column_index(&headers, "description")?;
    let amount_col = column_index(&headers, "amount")?;
    let category_col = column_index(&headers, "category").ok();

    let mut transactions = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let date_str = field(row, date_col);
        if date_str.is_empty() {
            continue;
        }
        let date = parse_date(date_str)
            .with_context(|| format!("Row {}: failed to parse date '{date_str}'", i + 2))?;
        let amount = parse_decimal(field(row, amount_col))
            .with_context(|| format!("Row {}: failed to parse amount", i + 2))?;
        let category = category_col
            .map(|c| field(row, c))
            .filter(|c| !c.is_empty())
            .unwrap_or("Uncategorized");

        transactions.push(Transaction::new(
            date,
            field(row, desc_col).to_string(),
            category.to_string(),
            amount,
        ));
    }

    tracing::info!(path = %path.display(), count = transactions.len(), "loaded transactions");
    Ok(transactions)
}

fn read_rows(path: &Path) -> Result<(Vec<String>, Vec<csv::StringRecord>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let headers = rdr
        .headers()
        .context("Failed to read CSV header")?
        .iter()
        .map(|h| h.to_lowercase())
        .collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        rows.push(result.context("Failed to read CSV record")?);
    }
    if rows.is_empty() {
        anyhow::bail!("CSV file has no data rows: {}", path.display());
    }
    Ok((headers, rows))
}

fn column_index(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| anyhow::anyhow!("CSV is missing a '{name}' column"))
}

fn field(row: &csv::StringRecord, col: usize) -> &str {
    row.get(col).unwrap_or("")
}

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    for fmt in &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y", "%m/%d/%y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    anyhow::bail!("Could not parse date: {}", s)
}

/// Parse a currency amount, tolerating `₹`/`$` symbols, thousands separators
/// and accounting-style parentheses for negatives. Blank means zero.
pub(crate) fn parse_decimal(s: &str) -> Result<Decimal> {
    let cleaned = s
        .replace(['₹', '$', ',', '"'], "")
        .replace('(', "-")
        .replace(')', "")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&cleaned).with_context(|| format!("Failed to parse '{s}' as an amount"))
}

#[cfg(test)]
#[path = "csv_load_tests.rs"]
mod tests;
