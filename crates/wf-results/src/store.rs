//! Curve storage API.
//!
//! Layout: `<root>/<curve_id>/{manifest.json, input.json, curve.json}`.

use crate::types::{CurveManifest, CurveRecord};
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::{Path, PathBuf};
use wf_project::schema::WellDef;

#[derive(Debug, Clone)]
pub struct CurveStore {
    root_dir: PathBuf,
}

impl CurveStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Store kept next to a well input file, under `.wellflow/curves`.
    pub fn for_input(input_path: &Path) -> ResultsResult<Self> {
        let input_dir = input_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: "input path has no parent directory".to_string(),
            })?;
        Self::new(input_dir.join(".wellflow").join("curves"))
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Directory of one curve. Only well-formed IDs map into the store.
    fn curve_dir(&self, curve_id: &str) -> ResultsResult<PathBuf> {
        if !is_valid_curve_id(curve_id) {
            return Err(ResultsError::InvalidPath {
                message: format!("'{curve_id}' is not a curve ID"),
            });
        }
        Ok(self.root_dir.join(curve_id))
    }

    pub fn has_curve(&self, curve_id: &str) -> bool {
        self.curve_dir(curve_id).is_ok_and(|dir| {
            dir.join("manifest.json").exists() && dir.join("curve.json").exists()
        })
    }

    pub fn save_curve(
        &self,
        manifest: &CurveManifest,
        input: &WellDef,
        curve: &CurveRecord,
    ) -> ResultsResult<()> {
        if curve.q_liq.len() != curve.p_wf.len() {
            return Err(ResultsError::Malformed {
                curve_id: manifest.curve_id.clone(),
                what: "rate and pressure columns differ in length".to_string(),
            });
        }

        let curve_dir = self.curve_dir(&manifest.curve_id)?;
        fs::create_dir_all(&curve_dir)?;

        fs::write(
            curve_dir.join("input.json"),
            serde_json::to_string_pretty(input)?,
        )?;
        fs::write(
            curve_dir.join("curve.json"),
            serde_json::to_string_pretty(curve)?,
        )?;
        // Manifest last: its presence marks a complete entry.
        fs::write(
            curve_dir.join("manifest.json"),
            serde_json::to_string_pretty(manifest)?,
        )?;

        Ok(())
    }

    fn read_json<T: serde::de::DeserializeOwned>(
        &self,
        curve_id: &str,
        file: &str,
    ) -> ResultsResult<T> {
        let path = self.curve_dir(curve_id)?.join(file);
        if !path.exists() {
            return Err(ResultsError::CurveNotFound {
                curve_id: curve_id.to_string(),
            });
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn load_manifest(&self, curve_id: &str) -> ResultsResult<CurveManifest> {
        self.read_json(curve_id, "manifest.json")
    }

    pub fn load_input(&self, curve_id: &str) -> ResultsResult<WellDef> {
        self.read_json(curve_id, "input.json")
    }

    pub fn load_curve(&self, curve_id: &str) -> ResultsResult<CurveRecord> {
        let curve: CurveRecord = self.read_json(curve_id, "curve.json")?;
        if curve.q_liq.len() != curve.p_wf.len() {
            return Err(ResultsError::Malformed {
                curve_id: curve_id.to_string(),
                what: "rate and pressure columns differ in length".to_string(),
            });
        }
        Ok(curve)
    }

    /// Manifests of stored curves, oldest first. `well_name` filters by input.
    pub fn list_curves(&self, well_name: Option<&str>) -> ResultsResult<Vec<CurveManifest>> {
        let mut curves = Vec::new();

        if !self.root_dir.exists() {
            return Ok(curves);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            let curve_id = entry.file_name().to_string_lossy().to_string();
            if let Ok(manifest) = self.load_manifest(&curve_id) {
                if well_name.is_none_or(|name| manifest.well_name == name) {
                    curves.push(manifest);
                }
            }
        }

        curves.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(curves)
    }

    pub fn delete_curve(&self, curve_id: &str) -> ResultsResult<()> {
        let curve_dir = self.curve_dir(curve_id)?;
        if !curve_dir.is_dir() {
            return Err(ResultsError::CurveNotFound {
                curve_id: curve_id.to_string(),
            });
        }
        fs::remove_dir_all(curve_dir)?;
        Ok(())
    }
}

/// Curve IDs are lowercase hex SHA-256 digests.
pub fn is_valid_curve_id(curve_id: &str) -> bool {
    curve_id.len() == 64
        && curve_id
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}
