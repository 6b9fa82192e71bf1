//! The receiver side of the payment event stream.

use chrono::NaiveDate;
use log::info;
use rust_decimal::Decimal;

/// Receives normalized payment events from a file processor.
///
/// For each processed file the calls arrive in a fixed order:
/// `start_payment_bundle`, zero or more `payment`s in file order, then
/// `end_payment_bundle`. Processors depend on this trait but never construct
/// a receiver, so alternate sinks (a test-recording receiver, a ledger
/// writer) can be substituted without touching engine logic.
pub trait PaymentReceiver {
    /// Opens a bundle of payments belonging to one opening post.
    ///
    /// `payment_date` and `currency` are `None` for formats that do not carry
    /// them.
    fn start_payment_bundle(
        &mut self,
        account_number: &str,
        payment_date: Option<NaiveDate>,
        currency: Option<&str>,
    );

    /// One payment: an exact decimal amount and the raw, fixed-width
    /// reference field (trailing blanks preserved).
    fn payment(&mut self, amount: Decimal, reference: &str);

    /// Closes the current bundle.
    fn end_payment_bundle(&mut self);
}

/// A receiver that logs every event at info level.
#[derive(Debug, Default)]
pub struct LoggingReceiver;

impl PaymentReceiver for LoggingReceiver {
    fn start_payment_bundle(
        &mut self,
        account_number: &str,
        payment_date: Option<NaiveDate>,
        currency: Option<&str>,
    ) {
        info!(
            "start payment bundle: account {account_number}, date {payment_date:?}, currency {currency:?}"
        );
    }

    fn payment(&mut self, amount: Decimal, reference: &str) {
        info!("payment: {amount} reference {reference:?}");
    }

    fn end_payment_bundle(&mut self) {
        info!("end payment bundle");
    }
}
