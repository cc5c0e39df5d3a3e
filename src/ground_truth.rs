//! Ground-truth file parser for MOTChallenge format.
//!
//! Every non-blank line is `frame,id,bb_left,bb_top,bb_width,bb_height,conf,class,visibility`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{GroundTruthRow, GROUND_TRUTH_COLUMNS, INTEGER_COLUMNS};

/// Read every row of a ground-truth file, in file order
pub fn read_ground_truth<P: AsRef<Path>>(path: P) -> Result<Vec<GroundTruthRow>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::data_read(path, None, format!("cannot open file: {}", e)))?;

    let mut rows = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| Error::data_read(path, Some(line_number), e.to_string()))?;
        if line.trim().is_empty() {
            continue;
        }
        let row = parse_row(&line)
            .map_err(|message| Error::data_read(path, Some(line_number), message))?;
        rows.push(row);
    }

    Ok(rows)
}

/// Parse one comma separated row
pub fn parse_row(line: &str) -> std::result::Result<GroundTruthRow, String> {
    let mut columns = [0.0_f64; GROUND_TRUTH_COLUMNS];
    let mut count = 0;

    for field in line.split(',') {
        if count == GROUND_TRUTH_COLUMNS {
            count += 1;
            break;
        }
        let field = field.trim();
        columns[count] = field
            .parse()
            .map_err(|_| format!("column {} is not numeric: '{}'", count + 1, field))?;
        count += 1;
    }

    if count != GROUND_TRUTH_COLUMNS {
        return Err(format!(
            "expected {} columns, found {}",
            GROUND_TRUTH_COLUMNS,
            line.split(',').count()
        ));
    }

    if let Some(&index) = INTEGER_COLUMNS.iter().find(|&&i| !columns[i].is_finite()) {
        return Err(format!(
            "column {} must be an integer, found {}",
            index + 1,
            columns[index]
        ));
    }

    Ok(GroundTruthRow::from_columns(&columns))
}
