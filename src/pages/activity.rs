//! Activity page - the transaction feed with a Sent/Received filter.

use chrono::DateTime;
use dioxus::prelude::*;
use pocketpay_ui::SegmentedControl;

/// One line of the feed. Amounts are in cents; negative means sent.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    pub counterparty: &'static str,
    pub note: &'static str,
    pub amount_cents: i64,
    /// Unix milliseconds
    pub at: i64,
}

/// Demo feed, newest first.
pub(crate) const TRANSACTIONS: [Transaction; 6] = [
    Transaction { counterparty: "Ana Ruiz", note: "Dinner split", amount_cents: -2_450, at: 1_760_600_000_000 },
    Transaction { counterparty: "Payroll", note: "October salary", amount_cents: 310_000, at: 1_760_400_000_000 },
    Transaction { counterparty: "Coffee Lab", note: "Flat white", amount_cents: -475, at: 1_760_300_000_000 },
    Transaction { counterparty: "Jon Park", note: "Concert tickets", amount_cents: 6_000, at: 1_760_100_000_000 },
    Transaction { counterparty: "City Power", note: "Electricity", amount_cents: -8_912, at: 1_759_900_000_000 },
    Transaction { counterparty: "Mia Chen", note: "Birthday gift", amount_cents: -3_000, at: 1_759_700_000_000 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Filter {
    All,
    Sent,
    Received,
}

impl Filter {
    const ALL: [Filter; 3] = [Filter::All, Filter::Sent, Filter::Received];

    fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Sent => "Sent",
            Filter::Received => "Received",
        }
    }

    fn matches(&self, tx: &Transaction) -> bool {
        match self {
            Filter::All => true,
            Filter::Sent => tx.amount_cents < 0,
            Filter::Received => tx.amount_cents > 0,
        }
    }
}

/// `-$24.50` / `+$3,100.00`
pub(crate) fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "+" };
    format!("{}{}", sign, format_money(cents.unsigned_abs()))
}

/// `$1,240.50`
pub(crate) fn format_money(cents: u64) -> String {
    let dollars = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, c) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}.{:02}", grouped, cents % 100)
}

pub(crate) fn format_day(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|d| d.format("%b %-d").to_string())
        .unwrap_or_default()
}

/// A single feed row, shared with the home page.
#[component]
pub(crate) fn TransactionRow(tx: Transaction) -> Element {
    let class = if tx.amount_cents < 0 { "tx-amount debit" } else { "tx-amount credit" };
    let initial = tx.counterparty.chars().next().unwrap_or('?');

    rsx! {
        li { class: "tx-row",
            span { class: "tx-avatar", "aria-hidden": "true", "{initial}" }
            div { class: "tx-text",
                span { class: "tx-name", "{tx.counterparty}" }
                span { class: "tx-note", "{tx.note} · {format_day(tx.at)}" }
            }
            span { class: "{class}", "{format_amount(tx.amount_cents)}" }
        }
    }
}

#[component]
pub fn Activity() -> Element {
    let mut filter = use_signal(|| 0usize);
    let active = Filter::ALL[filter().min(Filter::ALL.len() - 1)];

    rsx! {
        section { class: "activity",
            h1 { class: "page-title", "Activity" }
            SegmentedControl {
                options: Filter::ALL.iter().map(|f| f.label().to_string()).collect::<Vec<_>>(),
                selected: filter(),
                on_select: move |i| filter.set(i),
                aria_label: "Filter transactions".to_string(),
            }
            ul { class: "tx-list",
                for (i, tx) in TRANSACTIONS.iter().filter(|tx| active.matches(tx)).enumerate() {
                    TransactionRow { key: "{i}-{tx.at}", tx: tx.clone() }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_formatting() {
        assert_eq!(format_money(0), "$0.00");
        assert_eq!(format_money(475), "$4.75");
        assert_eq!(format_money(124_050), "$1,240.50");
        assert_eq!(format_money(123_456_789), "$1,234,567.89");
        assert_eq!(format_amount(-2_450), "-$24.50");
        assert_eq!(format_amount(310_000), "+$3,100.00");
    }

    #[test]
    fn filters_split_the_feed() {
        let sent = TRANSACTIONS.iter().filter(|t| Filter::Sent.matches(t)).count();
        let received = TRANSACTIONS.iter().filter(|t| Filter::Received.matches(t)).count();
        assert_eq!(sent + received, TRANSACTIONS.len());
    }

    #[test]
    fn day_formatting() {
        assert_eq!(format_day(0), "Jan 1");
    }
}
