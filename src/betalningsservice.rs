//! Betalningsservice format processor.
//!
//! Files carry one 51-character opening post followed by one 50-character
//! payment post per payment. The opening post declares the account, the total
//! amount, the payment count, a value date and a currency; the declarations
//! are cross-checked against the payment posts before anything is emitted.
//!
//! Layout (half-open column ranges):
//!
//! | Record  | Columns | Field          |
//! |---------|---------|----------------|
//! | opening | 0–1     | type, `O`      |
//! | opening | 1–16    | account number |
//! | opening | 16–30   | declared sum   |
//! | opening | 30–40   | declared count |
//! | opening | 40–48   | date, yyyymmdd |
//! | opening | 48–51   | currency       |
//! | payment | 0–1     | type, `B`      |
//! | payment | 1–15    | amount         |
//! | payment | 15–50   | reference      |

use crate::amount::parse_comma_decimal;
use crate::error::{ProcessError, RecordKind, Result};
use crate::field::{
    self, columns, ACCOUNT_FIELD, DATE_FIELD, DECIMAL_FIELD, INTEGER_FIELD, STRING_FIELD,
};
use crate::latin1;
use crate::processor::PaymentFileProcessor;
use crate::receiver::PaymentReceiver;
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::path::Path;

const FILENAME_SUFFIX: &str = "_betalningsservice.txt";
const OPENING_LINE_WIDTH: usize = 51;
const PAYMENT_LINE_WIDTH: usize = 50;
const DATE_FORMAT: &str = "%Y%m%d";

/// Processor for the Betalningsservice fixed-width format.
///
/// Stateless; a single instance may be shared across concurrent callers.
#[derive(Debug, Default)]
pub struct BetalningsserviceProcessor;

impl PaymentFileProcessor for BetalningsserviceProcessor {
    fn process_file(&self, file: &Path, receiver: &mut dyn PaymentReceiver) -> Result<bool> {
        if !file.to_string_lossy().ends_with(FILENAME_SUFFIX) {
            return Ok(false);
        }

        let lines = latin1::read_lines(file)?;
        validate_syntax(&lines)?;
        validate_semantics(&lines)?;
        emit(&lines, receiver)?;

        debug!(
            "betalningsservice: processed {} with {} payments",
            file.display(),
            lines.len() - 1
        );
        Ok(true)
    }
}

fn validate_syntax(lines: &[String]) -> Result<()> {
    if lines.len() < 2 {
        return Err(ProcessError::LineCount {
            min: 2,
            actual: lines.len(),
        });
    }

    let opening = &lines[0];

    if field::width(opening) != OPENING_LINE_WIDTH {
        return Err(ProcessError::LineLength {
            record: RecordKind::Opening,
            line: 1,
            expected: OPENING_LINE_WIDTH,
            actual: field::width(opening),
        });
    }

    let kind = RecordKind::Opening;
    field::validate_literal(opening, kind, 0, 1, "O", "type")?;
    field::validate(opening, kind, 1, 16, &ACCOUNT_FIELD, "account number")?;
    field::validate(opening, kind, 16, 30, &DECIMAL_FIELD, "sum")?;
    field::validate(opening, kind, 30, 40, &INTEGER_FIELD, "count")?;
    field::validate(opening, kind, 40, 48, &DATE_FIELD, "date")?;
    field::validate(opening, kind, 48, 51, &STRING_FIELD, "currency")?;

    for (index, payment) in lines.iter().enumerate().skip(1) {
        if field::width(payment) != PAYMENT_LINE_WIDTH {
            return Err(ProcessError::LineLength {
                record: RecordKind::Payment,
                line: index + 1,
                expected: PAYMENT_LINE_WIDTH,
                actual: field::width(payment),
            });
        }

        let kind = RecordKind::Payment;
        field::validate_literal(payment, kind, 0, 1, "B", "type")?;
        field::validate(payment, kind, 1, 15, &DECIMAL_FIELD, "amount")?;
        field::validate(payment, kind, 15, 50, &STRING_FIELD, "reference")?;
    }

    Ok(())
}

fn validate_semantics(lines: &[String]) -> Result<()> {
    let opening = &lines[0];

    let declared_count: usize =
        columns(opening, 30, 40)
            .trim()
            .parse()
            .map_err(|_| ProcessError::Semantic {
                offset: 30,
                message: format!(
                    "opening post count could not be parsed: {}",
                    columns(opening, 30, 40).trim()
                ),
            })?;

    if declared_count != lines.len() - 1 {
        return Err(ProcessError::Semantic {
            offset: 30,
            message: format!(
                "opening post count does not match number of payment lines: {declared_count}"
            ),
        });
    }

    parse_date(opening)?;

    let mut payments_sum = Decimal::ZERO;
    for payment in &lines[1..] {
        payments_sum += parse_comma_decimal(columns(payment, 1, 15), 1)?;
    }

    let declared_sum = parse_comma_decimal(columns(opening, 16, 30), 16)?;
    if declared_sum != payments_sum {
        return Err(ProcessError::Semantic {
            offset: 16,
            message: format!(
                "opening post sum does not match payment amounts: {declared_sum}"
            ),
        });
    }

    if columns(opening, 48, 51).trim().is_empty() {
        return Err(ProcessError::Semantic {
            offset: 48,
            message: "opening post currency is empty".to_string(),
        });
    }

    Ok(())
}

fn emit(lines: &[String], receiver: &mut dyn PaymentReceiver) -> Result<()> {
    let opening = &lines[0];
    let account_number = columns(opening, 1, 16).trim();
    let payment_date = parse_date(opening)?;
    let currency = columns(opening, 48, 51).trim();
    receiver.start_payment_bundle(account_number, Some(payment_date), Some(currency));

    for payment in &lines[1..] {
        let amount = parse_comma_decimal(columns(payment, 1, 15), 1)?;
        // Reference is the raw fixed-width field, trailing blanks and all
        receiver.payment(amount, columns(payment, 15, 50));
    }

    receiver.end_payment_bundle();
    Ok(())
}

fn parse_date(opening: &str) -> Result<NaiveDate> {
    let text = columns(opening, 40, 48);
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| ProcessError::Semantic {
        offset: 40,
        message: format!("opening post date could not be parsed: {text}"),
    })
}
