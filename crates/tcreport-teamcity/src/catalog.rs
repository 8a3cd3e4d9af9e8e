//! Catalog emission: publish every diagnostic kind the analysis can
//! produce as `inspectionType` service messages.

use crate::message::format_service_message;
use crate::reporter::TeamCityReporter;
use std::collections::BTreeMap;
use std::io::{self, Write};
use tcreport_types::{DescriptionSink, DiagnosticDescription, DiagnosticSource};

/// One-shot sink used solely during catalog emission. Discards plain text
/// and buffers formatted lines, so enumeration never touches the
/// reporter's dedup state and never needs a full diagnostic record.
struct InspectionTypeLines {
    verbose: bool,
    lines: Vec<String>,
}

impl DescriptionSink for InspectionTypeLines {
    fn accept_plain_text(&mut self, _text: &str) {}

    fn accept_description(&mut self, description: &DiagnosticDescription) {
        let message = if self.verbose {
            &description.verbose
        } else {
            &description.short
        };
        let mut values = BTreeMap::new();
        values.insert("id".to_string(), description.kind.clone());
        values.insert("name".to_string(), description.kind.clone());
        values.insert("description".to_string(), message.clone());
        values.insert(
            "category".to_string(),
            format!("cppcheck {}", description.severity),
        );
        self.lines
            .push(format_service_message("inspectionType", &values));
    }
}

impl<W: Write> TeamCityReporter<W> {
    /// Emit an `inspectionType` line for every kind the given sources
    /// describe. Sources are an explicit collection so callers decide what
    /// counts as "registered" (checks, the preprocessor, plugins).
    pub fn report_inspection_types(
        &mut self,
        sources: &[&dyn DiagnosticSource],
    ) -> io::Result<()> {
        let mut sink = InspectionTypeLines {
            verbose: self.settings().verbose,
            lines: Vec::new(),
        };
        for source in sources {
            source.describe(&mut sink);
        }
        for line in &sink.lines {
            self.write_line(line)?;
        }
        Ok(())
    }
}
