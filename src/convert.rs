use crate::Result;
use crate::error::Error;
use anyhow::anyhow;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{Builder, TempDir};
use tracing::{debug, info};

// Standard install locations, probed when settings do not pin a path.
#[cfg(target_os = "windows")]
const SOFFICE_GLOBS: &[&str] = &[
    r"C:\Program Files\LibreOffice\program\soffice.com",
    r"C:\Program Files (x86)\LibreOffice\program\soffice.com",
];
#[cfg(not(target_os = "windows"))]
const SOFFICE_GLOBS: &[&str] = &[
    "/usr/bin/soffice",
    "/usr/local/bin/soffice",
    "/opt/libreoffice*/program/soffice",
    "/Applications/LibreOffice.app/Contents/MacOS/soffice",
];

pub enum ReportFile {
    // Already modern format, read in place.
    Native(PathBuf),
    // Converted copy living in a temp dir that is removed on drop.
    Converted { path: PathBuf, _dir: TempDir },
}

impl ReportFile {
    pub fn path(&self) -> &Path {
        match self {
            ReportFile::Native(path) => path,
            ReportFile::Converted { path, .. } => path,
        }
    }
}

pub fn prepare_report(source: &Path, configured_soffice: &str) -> Result<ReportFile> {
    let extension = source
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    if extension == "xlsx" {
        return Ok(ReportFile::Native(source.to_path_buf()));
    }
    info!("converting due-in report");
    let soffice = locate_soffice(configured_soffice)?;
    convert_to_xlsx(source, &soffice)
}

fn locate_soffice(configured: &str) -> Result<PathBuf> {
    if !configured.is_empty() {
        return Ok(PathBuf::from(configured));
    }
    for pattern in SOFFICE_GLOBS {
        if let Some(Ok(path)) = glob::glob(pattern)?.next() {
            debug!("found soffice at {}", path.display());
            return Ok(path);
        }
    }
    Err(Error::Conversion(
        "LibreOffice not found; set sofficePath in settings.json".to_string(),
    ))
}

fn convert_to_xlsx(source: &Path, soffice: &Path) -> Result<ReportFile> {
    let temp_dir = Builder::new()
        .prefix("due_in_conversion")
        .tempdir()
        .map_err(|_| Error::Conversion("cannot create a temporary directory".to_string()))?;

    let output = Command::new(soffice)
        .arg("--headless")
        .arg("--convert-to")
        .arg("xlsx")
        .arg("--outdir")
        .arg(temp_dir.path())
        .arg(source)
        .output()?;

    if !output.status.success() {
        return Err(Error::Conversion(format!(
            "LibreOffice conversion failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )));
    }

    let mut path = temp_dir.path().join(
        source
            .file_name()
            .ok_or_else(|| anyhow!("due-in report path has no file name"))?,
    );
    path.set_extension("xlsx");
    if !path.exists() {
        return Err(Error::Conversion(format!(
            "converted report not found at {}",
            path.display()
        )));
    }

    info!("due-in report converted");
    Ok(ReportFile::Converted {
        path,
        _dir: temp_dir,
    })
}
