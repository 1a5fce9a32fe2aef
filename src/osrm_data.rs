//! OSRM dataset preparation helpers (download + preprocess).
//!
//! Used by the integration tests to stand up a routable OSRM dataset for
//! a small region. Extraction is profile-aware: walking tours route on
//! the foot profile, driving tours on the car profile, and the two
//! produce different graphs, so each gets its own data directory.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::directions::Profile;

/// Geofabrik extract to prepare, e.g. "europe/monaco".
#[derive(Debug, Clone)]
pub struct OsrmRegion {
    pub geofabrik_path: String,
}

impl OsrmRegion {
    pub fn new(geofabrik_path: impl Into<String>) -> Self {
        Self {
            geofabrik_path: geofabrik_path.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.geofabrik_path
            .rsplit('/')
            .next()
            .unwrap_or("region")
    }

    pub fn download_url(&self) -> String {
        format!(
            "https://download.geofabrik.de/{}-latest.osm.pbf",
            self.geofabrik_path
        )
    }
}

#[derive(Debug, Clone)]
pub struct OsrmDataConfig {
    pub region: OsrmRegion,
    pub profile: Profile,
    pub data_root: PathBuf,
}

impl OsrmDataConfig {
    pub fn new(region: OsrmRegion, profile: Profile, data_root: impl Into<PathBuf>) -> Self {
        Self {
            region,
            profile,
            data_root: data_root.into(),
        }
    }
}

/// A prepared, MLD-ready OSRM dataset on disk.
#[derive(Debug, Clone)]
pub struct OsrmData {
    pub data_dir: PathBuf,
    pub osrm_base: PathBuf,
}

#[derive(Debug)]
pub enum OsrmDataError {
    Io(io::Error),
    Http(reqwest::Error),
    ProcessFailure(String),
}

impl From<io::Error> for OsrmDataError {
    fn from(err: io::Error) -> Self {
        OsrmDataError::Io(err)
    }
}

impl From<reqwest::Error> for OsrmDataError {
    fn from(err: reqwest::Error) -> Self {
        OsrmDataError::Http(err)
    }
}

fn extraction_lua(profile: Profile) -> &'static str {
    match profile {
        Profile::Walking => "/opt/foot.lua",
        Profile::Driving => "/opt/car.lua",
    }
}

fn profile_dir_name(profile: Profile) -> &'static str {
    match profile {
        Profile::Walking => "foot",
        Profile::Driving => "car",
    }
}

impl OsrmData {
    /// Downloads and preprocesses the dataset if any stage is missing.
    /// Idempotent: completed stages are detected and skipped.
    pub fn ensure(config: &OsrmDataConfig) -> Result<Self, OsrmDataError> {
        let data_root = if config.data_root.is_absolute() {
            config.data_root.clone()
        } else {
            std::env::current_dir()?.join(&config.data_root)
        };
        let data_dir = data_root
            .join(config.region.name())
            .join(profile_dir_name(config.profile));
        fs::create_dir_all(&data_dir)?;

        let pbf_path = data_dir.join(format!("{}-latest.osm.pbf", config.region.name()));
        if !pbf_path.exists() {
            download_pbf(&config.region.download_url(), &pbf_path)?;
        }

        let osrm_base = data_dir.join(format!("{}-latest.osrm", config.region.name()));
        if !osrm_base.exists() {
            run_osrm_backend(
                &[
                    "osrm-extract",
                    "-p",
                    extraction_lua(config.profile),
                    &format!("/data/{}", file_name(&pbf_path)),
                ],
                &data_dir,
            )?;
        }

        if !mld_ready(&osrm_base) {
            run_osrm_backend(
                &["osrm-partition", &format!("/data/{}", file_name(&osrm_base))],
                &data_dir,
            )?;
            run_osrm_backend(
                &["osrm-customize", &format!("/data/{}", file_name(&osrm_base))],
                &data_dir,
            )?;
        }

        Ok(Self {
            data_dir,
            osrm_base,
        })
    }
}

fn download_pbf(url: &str, dest: &Path) -> Result<(), OsrmDataError> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let tmp_path = dest.with_extension("tmp");
    let mut writer = BufWriter::new(File::create(&tmp_path)?);
    let bytes = response.bytes()?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    fs::rename(tmp_path, dest)?;
    Ok(())
}

fn mld_ready(osrm_base: &Path) -> bool {
    osrm_base.exists()
        && osrm_base.with_extension("osrm.partition").exists()
        && osrm_base.with_extension("osrm.cells").exists()
        && osrm_base.with_extension("osrm.mldgr").exists()
}

fn run_osrm_backend(args: &[&str], data_dir: &Path) -> Result<(), OsrmDataError> {
    let status = Command::new("docker")
        .arg("run")
        .arg("--rm")
        .arg("-t")
        .arg("-v")
        .arg(format!("{}:/data", data_dir.display()))
        .arg("osrm/osrm-backend")
        .args(args)
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(OsrmDataError::ProcessFailure(format!(
            "docker exited with status {}",
            status
        )))
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string()
}
