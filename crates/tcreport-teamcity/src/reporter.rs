use crate::message::{format_service_message, format_service_message_value};
use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};
use tcreport_settings::Settings;
use tcreport_types::{path, Diagnostic, Reporter, Severity};

/// File attribute used for internal diagnostics that have no source
/// location. Prevents TeamCity from grouping them under an empty label.
pub const INTERNAL_FILE_MARKER: &str = "<cppcheck>";

/// A [`Reporter`] that writes TeamCity service messages to an output stream.
///
/// The writer is injected so tests can capture output; production callers
/// hand over stdout. Suppression state (last progress pair, fingerprints of
/// emitted diagnostics) lives in the reporter and resets only when a new
/// one is constructed.
pub struct TeamCityReporter<W: Write> {
    settings: Settings,
    out: W,
    last_progress_subject: String,
    last_progress_stage: String,
    emitted: BTreeSet<String>,
}

impl<W: Write> TeamCityReporter<W> {
    pub fn new(settings: Settings, out: W) -> Self {
        Self {
            settings,
            out,
            last_progress_subject: String::new(),
            last_progress_stage: String::new(),
            emitted: BTreeSet::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Consume the reporter and hand back the output stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    pub(crate) fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    /// The `file` attribute for a diagnostic: primary frame's file when
    /// frames exist, else the diagnostic-level fallback, normalized and
    /// rewritten relative to the configured base paths.
    fn file_attribute(&self, diagnostic: &Diagnostic) -> String {
        let raw = match diagnostic.primary_frame() {
            Some(frame) => frame.file.as_str(),
            None => diagnostic.file.as_str(),
        };
        if raw.is_empty() {
            return INTERNAL_FILE_MARKER.to_string();
        }
        let mut file = path::from_native_separators(raw);
        // Some checks produce absolute paths; TeamCity needs them relative.
        if path::is_absolute(&file) {
            file = path::relative_to(&file, &self.settings.base_paths);
        }
        // Prefix . to prevent empty folder labels in TeamCity.
        format!("./{file}")
    }
}

fn severity_attribute(severity: Severity) -> Option<&'static str> {
    match severity {
        Severity::Error => Some("ERROR"),
        Severity::Warning => Some("WARNING"),
        Severity::Information | Severity::Debug | Severity::Style => Some("INFO"),
        Severity::Performance | Severity::Portability => Some("WEAK WARNING"),
        Severity::None => None,
    }
}

impl<W: Write> Reporter for TeamCityReporter<W> {
    fn report_message(&mut self, text: &str) -> io::Result<()> {
        let mut values = BTreeMap::new();
        values.insert("text".to_string(), text.to_string());
        let line = format_service_message("message", &values);
        self.write_line(&line)
    }

    fn report_progress(&mut self, subject: &str, stage: &str, _value: usize) -> io::Result<()> {
        // Only report when a new stage or subject is reached.
        if self.last_progress_subject == subject && self.last_progress_stage == stage {
            return Ok(());
        }
        self.last_progress_subject = subject.to_string();
        self.last_progress_stage = stage.to_string();

        let body = format!("inspecting '{subject}' stage: {stage}");
        let line = format_service_message_value("progressMessage", &body);
        self.write_line(&line)
    }

    fn report_diagnostic(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        // Alert only about unique diagnostics.
        if !self.emitted.insert(diagnostic.fingerprint()) {
            return Ok(());
        }

        let mut values = BTreeMap::new();
        values.insert("typeId".to_string(), diagnostic.kind.clone());

        let message = if self.settings.verbose {
            &diagnostic.verbose
        } else {
            &diagnostic.short
        };
        values.insert("message".to_string(), message.clone());

        values.insert("file".to_string(), self.file_attribute(diagnostic));
        if let Some(frame) = diagnostic.primary_frame() {
            values.insert("line".to_string(), frame.line.to_string());
            values.insert("column".to_string(), frame.column.to_string());
        }

        if let Some(cwe) = diagnostic.cwe_id() {
            values.insert("cwe".to_string(), cwe.to_string());
        }
        if diagnostic.inconclusive {
            values.insert("inconclusive".to_string(), "true".to_string());
        }
        if let Some(severity) = severity_attribute(diagnostic.severity) {
            values.insert("SEVERITY".to_string(), severity.to_string());
        }

        let line = format_service_message("inspection", &values);
        self.write_line(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tcreport_types::FileLocation;

    fn reporter(settings: Settings) -> TeamCityReporter<Vec<u8>> {
        TeamCityReporter::new(settings, Vec::new())
    }

    fn output(reporter: TeamCityReporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    fn diagnostic(kind: &str, severity: Severity) -> Diagnostic {
        Diagnostic {
            kind: kind.to_string(),
            short: "short message".to_string(),
            verbose: "verbose message".to_string(),
            severity,
            inconclusive: false,
            cwe: None,
            file: String::new(),
            frames: vec![FileLocation {
                file: "src/a.cpp".to_string(),
                line: 12,
                column: 5,
            }],
        }
    }

    #[test]
    fn plain_message_always_emits() {
        let mut r = reporter(Settings::default());
        r.report_message("checking a.cpp").unwrap();
        r.report_message("checking a.cpp").unwrap();
        assert_eq!(
            output(r),
            "##teamcity[message text='checking a.cpp']\n\
             ##teamcity[message text='checking a.cpp']\n"
        );
    }

    #[test]
    fn progress_suppresses_consecutive_duplicates() {
        let mut r = reporter(Settings::default());
        r.report_progress("a.cpp", "parse", 0).unwrap();
        r.report_progress("a.cpp", "parse", 50).unwrap();
        assert_eq!(
            output(r),
            "##teamcity[progressMessage 'inspecting |'a.cpp|' stage: parse']\n"
        );
    }

    #[test]
    fn progress_reemits_when_stage_changes() {
        let mut r = reporter(Settings::default());
        r.report_progress("a.cpp", "parse", 0).unwrap();
        r.report_progress("a.cpp", "check", 0).unwrap();
        let out = output(r);
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("stage: parse"));
        assert!(out.contains("stage: check"));
    }

    #[test]
    fn progress_reemits_when_subject_changes() {
        let mut r = reporter(Settings::default());
        r.report_progress("a.cpp", "parse", 0).unwrap();
        r.report_progress("b.cpp", "parse", 0).unwrap();
        assert_eq!(output(r).lines().count(), 2);
    }

    #[test]
    fn duplicate_diagnostics_emit_once() {
        let mut r = reporter(Settings::default());
        let d = diagnostic("nullPointer", Severity::Error);
        r.report_diagnostic(&d).unwrap();
        r.report_diagnostic(&d).unwrap();
        assert_eq!(output(r).lines().count(), 1);
    }

    #[test]
    fn distinct_diagnostics_both_emit() {
        let mut r = reporter(Settings::default());
        let a = diagnostic("nullPointer", Severity::Error);
        let mut b = diagnostic("nullPointer", Severity::Error);
        b.frames[0].line = 13;
        r.report_diagnostic(&a).unwrap();
        r.report_diagnostic(&b).unwrap();
        assert_eq!(output(r).lines().count(), 2);
    }

    #[test]
    fn inspection_line_shape() {
        let mut r = reporter(Settings::default());
        r.report_diagnostic(&diagnostic("nullPointer", Severity::Error))
            .unwrap();
        assert_eq!(
            output(r),
            "##teamcity[inspection SEVERITY='ERROR' column='5' file='./src/a.cpp' \
             line='12' message='short message' typeId='nullPointer']\n"
        );
    }

    #[test]
    fn verbose_setting_picks_verbose_message() {
        let mut r = reporter(Settings {
            verbose: true,
            base_paths: Vec::new(),
        });
        r.report_diagnostic(&diagnostic("nullPointer", Severity::Error))
            .unwrap();
        assert!(output(r).contains("message='verbose message'"));
    }

    #[test]
    fn severity_mapping_table() {
        let cases = [
            (Severity::Error, Some("ERROR")),
            (Severity::Warning, Some("WARNING")),
            (Severity::Information, Some("INFO")),
            (Severity::Debug, Some("INFO")),
            (Severity::Style, Some("INFO")),
            (Severity::Performance, Some("WEAK WARNING")),
            (Severity::Portability, Some("WEAK WARNING")),
            (Severity::None, None),
        ];
        for (severity, expected) in cases {
            assert_eq!(severity_attribute(severity), expected, "{severity}");
        }
    }

    #[test]
    fn none_severity_omits_the_attribute() {
        let mut r = reporter(Settings::default());
        r.report_diagnostic(&diagnostic("internalNotice", Severity::None))
            .unwrap();
        assert!(!output(r).contains("SEVERITY"));
    }

    #[test]
    fn cwe_and_inconclusive_attributes() {
        let mut r = reporter(Settings::default());
        let mut d = diagnostic("nullPointer", Severity::Error);
        d.cwe = Some(476);
        d.inconclusive = true;
        r.report_diagnostic(&d).unwrap();
        let out = output(r);
        assert!(out.contains("cwe='476'"));
        assert!(out.contains("inconclusive='true'"));
    }

    #[test]
    fn zero_cwe_is_omitted() {
        let mut r = reporter(Settings::default());
        let mut d = diagnostic("nullPointer", Severity::Error);
        d.cwe = Some(0);
        r.report_diagnostic(&d).unwrap();
        assert!(!output(r).contains("cwe="));
    }

    #[test]
    fn absolute_path_is_rewritten_against_base_paths() {
        let mut r = reporter(Settings {
            verbose: false,
            base_paths: vec!["/proj".to_string()],
        });
        let mut d = diagnostic("nullPointer", Severity::Error);
        d.frames[0].file = "/proj/src/a.cpp".to_string();
        r.report_diagnostic(&d).unwrap();
        assert!(output(r).contains("file='./src/a.cpp'"));
    }

    #[test]
    fn native_separators_are_normalized() {
        let mut r = reporter(Settings::default());
        let mut d = diagnostic("nullPointer", Severity::Error);
        d.frames[0].file = "src\\a.cpp".to_string();
        r.report_diagnostic(&d).unwrap();
        assert!(output(r).contains("file='./src/a.cpp'"));
    }

    #[test]
    fn missing_location_uses_fallback_file() {
        let mut r = reporter(Settings::default());
        let mut d = diagnostic("toolError", Severity::Error);
        d.frames.clear();
        d.file = "a.cpp".to_string();
        r.report_diagnostic(&d).unwrap();
        let out = output(r);
        assert!(out.contains("file='./a.cpp'"));
        assert!(!out.contains("line="));
        assert!(!out.contains("column="));
    }

    #[test]
    fn no_location_at_all_uses_internal_marker() {
        let mut r = reporter(Settings::default());
        let mut d = diagnostic("internalError", Severity::Error);
        d.frames.clear();
        r.report_diagnostic(&d).unwrap();
        // Marker verbatim, no ./ prefix; angle brackets are not reserved.
        assert!(output(r).contains("file='<cppcheck>'"));
    }

    #[test]
    fn state_resets_with_a_new_reporter() {
        let d = diagnostic("nullPointer", Severity::Error);
        let mut first = reporter(Settings::default());
        first.report_diagnostic(&d).unwrap();
        let mut second = reporter(Settings::default());
        second.report_diagnostic(&d).unwrap();
        assert_eq!(output(second).lines().count(), 1);
    }
}
