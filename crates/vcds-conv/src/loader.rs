//! Loading cleaned measurement tables

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use vcds_core::{Measurement, ParsedData};

use crate::clean::list_csv_files;
use crate::config::VehicleConfig;
use crate::csv::split_csv_line;
use crate::error::{ConvError, ConvResult};

/// Find the first `*<keyword>*.csv` file in a directory
pub fn find_file(dir: &Path, keyword: &str) -> ConvResult<Option<PathBuf>> {
    let found = list_csv_files(dir)?.into_iter().find(|path| {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.contains(keyword))
    });
    debug!("Searching for '{}' in {} -> {:?}", keyword, dir.display(), found);
    Ok(found)
}

/// Parse the text of a cleaned table
///
/// The first line is the header. Rows with fewer than three columns are dropped.
pub fn parse_measurements(text: &str) -> Vec<Measurement> {
    text.lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(split_csv_line)
        .filter(|fields| fields.len() >= 3)
        .map(|mut fields| {
            let actual = fields.swap_remove(2);
            let description = fields.swap_remove(1);
            let group = fields.swap_remove(0);
            Measurement {
                group,
                description,
                actual,
            }
        })
        .collect()
}

/// Load a cleaned table; a missing file yields no measurements
pub fn load_measurements(path: &Path) -> ConvResult<Vec<Measurement>> {
    if !path.exists() {
        warn!("File not found: {}", path.display());
        return Ok(Vec::new());
    }
    let text = std::fs::read_to_string(path).map_err(|e| ConvError::io(path, e))?;
    let measurements = parse_measurements(&text);
    if measurements.is_empty() {
        warn!("No measurements in {}", path.display());
    }
    debug!("Parsed {} measurement(s) from {}", measurements.len(), path.display());
    Ok(measurements)
}

/// Load every configured module's measurements into report sections
pub fn load_vehicle_data(data_dir: &Path, config: &VehicleConfig) -> ConvResult<ParsedData> {
    let mut parsed = ParsedData::default();

    for (module, module_config) in &config.modules {
        let Some(file) = module_config.file.as_deref() else {
            warn!("No file specified for {}", module);
            continue;
        };

        let path = data_dir.join(file);
        if !path.exists() {
            warn!("File not found for {}: {}", module, path.display());
            continue;
        }

        let Some(kind) = module_config.resolved_kind() else {
            info!("Skipped {} (no report section for {})", module, file);
            continue;
        };

        debug!("Loading module '{}' from {}", module, path.display());
        parsed.extend(kind, load_measurements(&path)?);
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_measurements() {
        let text = "\
Group,Description,Actual,Unit
IDE00021,Engine speed,820,/min
IDE00100,\"Load, status\",,--
short,row
";
        let measurements = parse_measurements(text);
        assert_eq!(
            measurements,
            vec![
                Measurement::new("IDE00021", "Engine speed", "820"),
                Measurement::new("IDE00100", "Load, status", ""),
            ]
        );
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let measurements = load_measurements(&dir.path().join("nope.csv")).unwrap();
        assert!(measurements.is_empty());
    }

    #[test]
    fn test_find_file_by_keyword() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("01_engine_blockmap.CSV"), "x").unwrap();
        std::fs::write(dir.path().join("02_gearbox.csv"), "x").unwrap();
        std::fs::write(dir.path().join("blockmap_notes.txt"), "x").unwrap();

        let found = find_file(dir.path(), "blockmap").unwrap().unwrap();
        assert!(found.ends_with("01_engine_blockmap.CSV"));
        assert!(find_file(dir.path(), "adaptation").unwrap().is_none());
    }
}
