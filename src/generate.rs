//! The Generate action: validate the form, run the conversion, write the
//! library table and report, then persist the inputs.

use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::working_dir;
use crate::discover::APPLICATION_LIBRARIES_FILE;
use crate::error::ConvertError;
use crate::form::{CLASSPATH_FILE, Defaults, Form};
use crate::report::{ReportLog, serialize_missing_report, serialize_settings_report};
use crate::settings::SettingsStore;
use crate::{convert, library_xml};

#[derive(Debug, Serialize)]
pub struct GenerateSummary {
    pub classpath_file: String,
    pub output_file: String,
    pub report_file: String,
    pub libraries: usize,
    pub missing_jars: Vec<String>,
    pub duration_ms: u64,
}

pub fn generate(
    mut form: Form,
    defaults: &Defaults,
    store: &SettingsStore,
    report: &ReportLog,
) -> Result<GenerateSummary> {
    let start = Instant::now();
    form.fill_blanks(defaults);

    let config = form.conversion_config();
    config.validate()?;

    report.clear()?;
    apply_path_fallbacks(&mut form)?;

    let classpath_text = convert::read_classpath(&form.classpath_file)?;
    let result = config.convert(&classpath_text);
    let xml = library_xml::serialize_library_table(&result.records)?;
    write_output(&form.application_libraries_file, &xml)?;

    if !result.missing.is_empty() {
        report.overwrite(&serialize_missing_report(&result.missing))?;
    }

    store.save(&form.to_settings())?;
    report.append(&serialize_settings_report(&form))?;

    log::info!(
        "wrote {} libraries to {} ({} missing jars)",
        result.records.len(),
        form.application_libraries_file.display(),
        result.missing.len()
    );

    Ok(GenerateSummary {
        classpath_file: form.classpath_file.to_string_lossy().to_string(),
        output_file: form.application_libraries_file.to_string_lossy().to_string(),
        report_file: report.path().to_string_lossy().to_string(),
        libraries: result.records.len(),
        missing_jars: result.missing,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

fn apply_path_fallbacks(form: &mut Form) -> Result<()> {
    if !form.classpath_file.exists() {
        let fallback = working_dir()?.join(CLASSPATH_FILE);
        log::warn!(
            "classpath file {} not found, using {}",
            form.classpath_file.display(),
            fallback.display()
        );
        form.classpath_file = fallback;
    }

    if !parent_exists(&form.application_libraries_file) {
        let fallback = working_dir()?.join(APPLICATION_LIBRARIES_FILE);
        log::warn!(
            "output directory for {} not found, using {}",
            form.application_libraries_file.display(),
            fallback.display()
        );
        form.application_libraries_file = fallback;
    }

    Ok(())
}

fn parent_exists(path: &Path) -> bool {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.is_dir(),
        _ => true,
    }
}

fn write_output(path: &Path, xml: &str) -> Result<(), ConvertError> {
    std::fs::write(path, xml).map_err(|source| ConvertError::DestinationUnwritable {
        path: PathBuf::from(path),
        source,
    })
}
