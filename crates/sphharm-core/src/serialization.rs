use crate::domain::VisualizationMode;
use crate::surface::{SurfaceField, SurfacePoint};
use std::fs;
use std::path::Path;

const COLUMN_WIDTH: usize = 24;
const COLUMN_PRECISION: usize = 15;

pub fn format_scientific_f64(value: f64, width: usize, precision: usize) -> String {
    format!(
        "{value:>width$.precision$E}",
        width = width,
        precision = precision
    )
}

pub fn normalize_text_artifact(content: &str) -> String {
    let mut normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    if !normalized.is_empty() && !normalized.ends_with('\n') {
        normalized.push('\n');
    }
    normalized
}

pub fn write_text_artifact(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, normalize_text_artifact(content))
}

/// Column set a front-end needs for `mode`.
pub fn columns_for_mode(mode: VisualizationMode) -> &'static [&'static str] {
    if mode.uses_angle_axes() {
        &["phi", "theta", "color"]
    } else {
        &["x", "y", "z", "color"]
    }
}

fn point_columns(point: &SurfacePoint, mode: VisualizationMode) -> Vec<f64> {
    if mode.uses_angle_axes() {
        vec![point.phi, point.theta, point.color]
    } else {
        vec![point.x, point.y, point.z, point.color]
    }
}

/// Whitespace-delimited table, one row per grid sample in row-major order.
pub fn render_text_table(field: &SurfaceField, mode: VisualizationMode) -> String {
    let (rows, cols) = field.shape();
    let mut table = format!(
        "# {} profile={} mode={} shape={}x{} columns={}\n",
        field.quantum_numbers,
        field.profile,
        mode,
        rows,
        cols,
        columns_for_mode(mode).join(",")
    );

    for point in field.points() {
        for value in point_columns(&point, mode) {
            table.push_str(&format_scientific_f64(value, COLUMN_WIDTH, COLUMN_PRECISION));
        }
        table.push('\n');
    }
    table
}

pub fn render_json(field: &SurfaceField) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(field)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::{
        columns_for_mode, format_scientific_f64, normalize_text_artifact, render_json,
        render_text_table, write_text_artifact,
    };
    use crate::domain::VisualizationMode;
    use crate::surface::generate_surface;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn scientific_formatting_is_fixed_width() {
        assert_eq!(format_scientific_f64(1.5, 12, 3), "     1.500E0");
        assert_eq!(format_scientific_f64(-0.00125, 12, 2), "    -1.25E-3");
    }

    #[test]
    fn normalize_text_artifact_uses_canonical_line_endings() {
        assert_eq!(
            normalize_text_artifact("alpha\r\nbeta\rgamma"),
            "alpha\nbeta\ngamma\n"
        );
        assert_eq!(normalize_text_artifact(""), "");
    }

    #[test]
    fn text_table_has_header_and_one_row_per_sample() {
        let field = generate_surface(1, 0, 4).expect("valid input");
        let table = render_text_table(&field, VisualizationMode::Markers);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(
            lines[0],
            "# Y(1, 0) profile=compressed_magnitude mode=markers shape=8x4 columns=x,y,z,color"
        );
        assert_eq!(lines.len(), 1 + 32);
        assert!(lines[1..]
            .iter()
            .all(|line| line.split_whitespace().count() == 4));
    }

    #[test]
    fn contour_mode_exports_angle_axes() {
        let field = generate_surface(2, 1, 3).expect("valid input");
        let table = render_text_table(&field, VisualizationMode::Contour);
        let first_row: Vec<f64> = table
            .lines()
            .nth(1)
            .expect("data row")
            .split_whitespace()
            .map(|token| token.parse().expect("numeric column"))
            .collect();

        assert_eq!(columns_for_mode(VisualizationMode::Contour), ["phi", "theta", "color"]);
        assert_eq!(first_row.len(), 3);
        assert_eq!(first_row[..2], [0.0, 0.0]);
        assert!((first_row[2] - field.color.values()[0]).abs() < 1.0e-12);
    }

    #[test]
    fn repeated_text_writes_produce_identical_bytes() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("surface.dat");
        let field = generate_surface(3, -1, 5).expect("valid input");
        let table = render_text_table(&field, VisualizationMode::Surface);

        write_text_artifact(&path, &table).expect("first write should succeed");
        let first = fs::read(&path).expect("artifact should be readable");
        write_text_artifact(&path, &table).expect("second write should succeed");
        let second = fs::read(&path).expect("artifact should be readable");

        assert_eq!(first, second);
        assert_eq!(first, table.as_bytes());
    }

    #[test]
    fn json_export_carries_every_grid_and_labels() {
        let field = generate_surface(1, -1, 2).expect("valid input");
        let value: serde_json::Value =
            serde_json::from_str(&render_json(&field).expect("serialize")).expect("parse");

        assert_eq!(value["quantum_numbers"]["degree"], 1);
        assert_eq!(value["quantum_numbers"]["order"], -1);
        assert_eq!(value["profile"], "compressed_magnitude");
        for name in ["x", "y", "z", "color", "radius", "theta", "phi"] {
            assert_eq!(value[name]["rows"], 4, "{name} rows");
            assert_eq!(value[name]["cols"], 2, "{name} cols");
            assert_eq!(
                value[name]["values"].as_array().map(Vec::len),
                Some(8),
                "{name} values"
            );
        }
    }
}
