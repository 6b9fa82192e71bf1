//! The processor capability and the multi-format dispatcher.

use crate::betalningsservice::BetalningsserviceProcessor;
use crate::error::Result;
use crate::inbetalningstjansten::InbetalningstjanstenProcessor;
use crate::receiver::PaymentReceiver;
use log::debug;
use std::path::Path;

/// Validates and parses payments from a file, sending them to a receiver.
pub trait PaymentFileProcessor {
    /// Processes one payment file.
    ///
    /// Returns `Ok(true)` if this processor claimed the file and emitted its
    /// payments, `Ok(false)` if the filename does not match this processor's
    /// naming convention (the file is not read in that case). A claimed file
    /// that fails validation is an error; nothing is emitted for it.
    fn process_file(&self, file: &Path, receiver: &mut dyn PaymentReceiver) -> Result<bool>;
}

/// Dispatches a file to the first registered processor that claims it.
///
/// Format selection is purely by filename convention; file content is never
/// sniffed. Registered conventions are expected to be mutually exclusive,
/// which is a configuration precondition rather than something enforced here.
pub struct MultiFormatProcessor {
    processors: Vec<Box<dyn PaymentFileProcessor>>,
}

impl MultiFormatProcessor {
    /// Creates a dispatcher over the given processors, tried in order.
    pub fn new(processors: Vec<Box<dyn PaymentFileProcessor>>) -> Self {
        if processors.is_empty() {
            debug!("MultiFormatProcessor constructed without any processors");
        }

        MultiFormatProcessor { processors }
    }

    /// Creates a dispatcher over both known legacy formats.
    pub fn with_default_formats() -> Self {
        Self::new(vec![
            Box::new(BetalningsserviceProcessor),
            Box::new(InbetalningstjanstenProcessor),
        ])
    }
}

impl PaymentFileProcessor for MultiFormatProcessor {
    fn process_file(&self, file: &Path, receiver: &mut dyn PaymentReceiver) -> Result<bool> {
        for processor in &self.processors {
            // A validation error from a claiming processor propagates; only
            // "not handled" falls through to the next format.
            if processor.process_file(file, receiver)? {
                return Ok(true);
            }
        }

        debug!("no payment file processor available for {}", file.display());
        Ok(false)
    }
}
