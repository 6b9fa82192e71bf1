//! Shared helpers for integration tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use chrono::NaiveDate;
use payment_files::PaymentReceiver;
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};

/// One observed receiver call.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Start {
        account: String,
        date: Option<NaiveDate>,
        currency: Option<String>,
    },
    Payment {
        amount: Decimal,
        reference: String,
    },
    End,
}

/// A receiver that records every call for later assertions.
#[derive(Debug, Default)]
pub struct RecordingReceiver {
    pub events: Vec<Event>,
}

impl PaymentReceiver for RecordingReceiver {
    fn start_payment_bundle(
        &mut self,
        account_number: &str,
        payment_date: Option<NaiveDate>,
        currency: Option<&str>,
    ) {
        self.events.push(Event::Start {
            account: account_number.to_string(),
            date: payment_date,
            currency: currency.map(str::to_string),
        });
    }

    fn payment(&mut self, amount: Decimal, reference: &str) {
        self.events.push(Event::Payment {
            amount,
            reference: reference.to_string(),
        });
    }

    fn end_payment_bundle(&mut self) {
        self.events.push(Event::End);
    }
}

/// Writes `lines` to `dir/name` encoded as ISO-8859-1.
pub fn write_latin1_file(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut bytes = Vec::new();

    for line in lines {
        for c in line.chars() {
            assert!((c as u32) < 256, "test data must be Latin-1 encodable");
            bytes.push(c as u32 as u8);
        }
        bytes.push(b'\n');
    }

    fs::write(&path, bytes).unwrap();
    path
}

/// Builds a 51-character betalningsservice opening post.
pub fn bs_opening(account: &str, sum: &str, count: &str, date: &str, currency: &str) -> String {
    let line = format!("O{account:<15}{sum:>14}{count:>10}{date}{currency:<3}");
    assert_eq!(line.chars().count(), 51);
    line
}

/// Builds a 50-character betalningsservice payment post.
pub fn bs_payment(amount: &str, reference: &str) -> String {
    let line = format!("B{amount:>14}{reference:<35}");
    assert_eq!(line.chars().count(), 50);
    line
}

/// Builds an 80-character inbetalningstjansten opening post.
pub fn ib_opening(clearing: &str, account: &str) -> String {
    let line = format!("00{:<8}{clearing}{account}{:<56}", "", "");
    assert_eq!(line.chars().count(), 80);
    line
}

/// Builds an 80-character inbetalningstjansten payment post.
pub fn ib_payment(amount: &str, reference: &str) -> String {
    let line = format!("30{amount:0>20}{:<18}{reference:<25}{:<15}", "", "");
    assert_eq!(line.chars().count(), 80);
    line
}

/// Builds an 80-character inbetalningstjansten closing post.
pub fn ib_closing(sum: &str, count: &str) -> String {
    let line = format!("99{sum:0>20}{:<8}{count:0>8}{:<42}", "", "");
    assert_eq!(line.chars().count(), 80);
    line
}
