//! JSON and SVG report writer.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use stringency_core::{Chart, DateWindow, EngineKind, RankedCountry};
use tracing::{debug, info, instrument};

use crate::chart::SvgChart;
use crate::domain::RunName;
use crate::LoadError;

/// Writes per-engine comparison reports.
///
/// Creates the output directory on construction if it does not exist.
/// Output files are named `{run}_{engine}.json` and `{run}_{engine}.svg`.
pub struct ReportWriter {
    output_dir: PathBuf,
    run: RunName,
}

#[derive(Serialize)]
struct RankingArtifact<'a> {
    run: &'a str,
    engine: EngineKind,
    focal: &'a str,
    window: DateWindow,
    n_ranked: usize,
    ranked: &'a [RankedCountry],
}

impl ReportWriter {
    /// Create a new writer targeting the given directory and run name.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::OutputDirCreate`] if the directory cannot be created.
    #[instrument(skip_all, fields(dir = %output_dir.display(), run = %run))]
    pub fn new(output_dir: &Path, run: RunName) -> Result<Self, LoadError> {
        fs::create_dir_all(output_dir).map_err(|e| LoadError::OutputDirCreate {
            path: output_dir.to_path_buf(),
            source: e,
        })?;
        debug!("output directory ready");
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            run,
        })
    }

    /// Path of an artifact for `kind` with the given extension.
    #[must_use]
    pub fn path_for(&self, kind: EngineKind, extension: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}.{extension}", self.run.as_str(), kind.as_str()))
    }

    /// Write a selected ranking to `{run}_{engine}.json`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`LoadError::Serialize`] | The ranking cannot be encoded |
    /// | [`LoadError::WriteFile`] | The file cannot be written |
    #[instrument(skip(self, window, ranked), fields(n_ranked = ranked.len()))]
    pub fn write_ranking(
        &self,
        kind: EngineKind,
        focal: &str,
        window: DateWindow,
        ranked: &[RankedCountry],
    ) -> Result<PathBuf, LoadError> {
        let path = self.path_for(kind, "json");
        let artifact = RankingArtifact {
            run: self.run.as_str(),
            engine: kind,
            focal,
            window,
            n_ranked: ranked.len(),
            ranked,
        };

        let json = serde_json::to_string_pretty(&artifact).map_err(|e| LoadError::Serialize {
            path: path.clone(),
            source: e,
        })?;
        fs::write(&path, &json).map_err(|e| LoadError::WriteFile {
            path: path.clone(),
            source: e,
        })?;

        info!(path = %path.display(), "ranking written");
        Ok(path)
    }

    /// Render `chart` and write it to `{run}_{engine}.svg`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::WriteFile`] if the file cannot be written.
    #[instrument(skip(self, chart, renderer), fields(n_lines = chart.lines.len()))]
    pub fn write_chart(
        &self,
        kind: EngineKind,
        chart: &Chart,
        renderer: &SvgChart,
    ) -> Result<PathBuf, LoadError> {
        let path = self.path_for(kind, "svg");
        renderer.write(chart, &path)?;
        info!(path = %path.display(), "chart written");
        Ok(path)
    }
}
