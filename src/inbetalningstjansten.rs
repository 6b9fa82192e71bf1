//! Inbetalningstjansten format processor.
//!
//! Every line is 80 characters: one opening post, one payment post per
//! payment, and a closing post that restates the total and the count for
//! cross-validation. Amounts are integers in minor units (hundredths); this
//! format carries neither a value date nor a currency.
//!
//! Layout (half-open column ranges):
//!
//! | Record  | Columns | Field           |
//! |---------|---------|-----------------|
//! | opening | 0–2     | type, `00`      |
//! | opening | 10–14   | clearing number |
//! | opening | 14–24   | account number  |
//! | payment | 0–2     | type, `30`      |
//! | payment | 2–22    | amount          |
//! | payment | 40–65   | reference       |
//! | closing | 0–2     | type, `99`      |
//! | closing | 2–22    | declared sum    |
//! | closing | 30–38   | declared count  |

use crate::amount::parse_minor_units;
use crate::error::{ProcessError, RecordKind, Result};
use crate::field::{self, columns, NUMBER_FIELD, STRING_FIELD};
use crate::latin1;
use crate::processor::PaymentFileProcessor;
use crate::receiver::PaymentReceiver;
use log::debug;
use rust_decimal::Decimal;
use std::path::Path;

const FILENAME_SUFFIX: &str = "_inbetalningstjansten.txt";
const LINE_WIDTH: usize = 80;

/// Processor for the Inbetalningstjansten fixed-width format.
///
/// Stateless; a single instance may be shared across concurrent callers.
#[derive(Debug, Default)]
pub struct InbetalningstjanstenProcessor;

impl PaymentFileProcessor for InbetalningstjanstenProcessor {
    fn process_file(&self, file: &Path, receiver: &mut dyn PaymentReceiver) -> Result<bool> {
        if !file.to_string_lossy().ends_with(FILENAME_SUFFIX) {
            return Ok(false);
        }

        let lines = latin1::read_lines(file)?;
        validate_syntax(&lines)?;
        validate_semantics(&lines)?;
        emit(&lines, receiver)?;

        debug!(
            "inbetalningstjansten: processed {} with {} payments",
            file.display(),
            lines.len() - 2
        );
        Ok(true)
    }
}

fn check_width(line: &str, record: RecordKind, index: usize) -> Result<()> {
    if field::width(line) != LINE_WIDTH {
        return Err(ProcessError::LineLength {
            record,
            line: index + 1,
            expected: LINE_WIDTH,
            actual: field::width(line),
        });
    }

    Ok(())
}

fn validate_syntax(lines: &[String]) -> Result<()> {
    if lines.len() < 3 {
        return Err(ProcessError::LineCount {
            min: 3,
            actual: lines.len(),
        });
    }

    let opening = &lines[0];
    check_width(opening, RecordKind::Opening, 0)?;

    let kind = RecordKind::Opening;
    field::validate_literal(opening, kind, 0, 2, "00", "type")?;
    field::validate(opening, kind, 10, 14, &NUMBER_FIELD, "clearing number")?;
    field::validate(opening, kind, 14, 24, &NUMBER_FIELD, "account number")?;

    for (index, payment) in lines.iter().enumerate().take(lines.len() - 1).skip(1) {
        check_width(payment, RecordKind::Payment, index)?;

        let kind = RecordKind::Payment;
        field::validate_literal(payment, kind, 0, 2, "30", "type")?;
        field::validate(payment, kind, 2, 22, &NUMBER_FIELD, "amount")?;
        field::validate(payment, kind, 40, 65, &STRING_FIELD, "reference")?;
    }

    let closing = &lines[lines.len() - 1];
    check_width(closing, RecordKind::Closing, lines.len() - 1)?;

    let kind = RecordKind::Closing;
    field::validate_literal(closing, kind, 0, 2, "99", "type")?;
    field::validate(closing, kind, 2, 22, &NUMBER_FIELD, "sum")?;
    field::validate(closing, kind, 30, 38, &NUMBER_FIELD, "count")?;

    Ok(())
}

fn validate_semantics(lines: &[String]) -> Result<()> {
    let closing = &lines[lines.len() - 1];

    let declared_count: usize =
        columns(closing, 30, 38)
            .trim()
            .parse()
            .map_err(|_| ProcessError::Semantic {
                offset: 30,
                message: format!(
                    "closing post count could not be parsed: {}",
                    columns(closing, 30, 38).trim()
                ),
            })?;

    if declared_count != lines.len() - 2 {
        return Err(ProcessError::Semantic {
            offset: 30,
            message: format!(
                "closing post count does not match number of payment lines: {declared_count}"
            ),
        });
    }

    let mut payments_sum = Decimal::ZERO;
    for payment in &lines[1..lines.len() - 1] {
        payments_sum += parse_minor_units(columns(payment, 2, 22), 2)?;
    }

    let declared_sum = parse_minor_units(columns(closing, 2, 22), 2)?;
    if declared_sum != payments_sum {
        return Err(ProcessError::Semantic {
            offset: 2,
            message: format!(
                "closing post sum does not match payment amounts: {declared_sum}"
            ),
        });
    }

    Ok(())
}

fn emit(lines: &[String], receiver: &mut dyn PaymentReceiver) -> Result<()> {
    let opening = &lines[0];
    // Clearing number and account number are joined with a space; leading
    // zeros are retained as they appear in the file.
    let account_number = format!(
        "{} {}",
        columns(opening, 10, 14),
        columns(opening, 14, 24)
    );
    // This format carries no date or currency; the receiver must tolerate
    // their absence.
    receiver.start_payment_bundle(&account_number, None, None);

    for payment in &lines[1..lines.len() - 1] {
        let amount = parse_minor_units(columns(payment, 2, 22), 2)?;
        receiver.payment(amount, columns(payment, 40, 65));
    }

    receiver.end_payment_bundle();
    Ok(())
}
