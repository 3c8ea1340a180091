//! Reading and writing of whitespace separated numeric tables (optional)
//!
//! The Cartesian path is a table of two columns (x y), one waypoint per row. The joint
//! trajectory is a table of three columns (θ1 θ2 θ3), one sample per row, written in
//! scientific notation. Text after `#` and empty lines are ignored when reading.

use std::fs;
use std::path::Path;

use crate::kinematic_traits::{Joints, Point};
use crate::parameter_error::ParameterError;
use crate::utils::format_scientific;

/// Parse rows of exactly `N` finite numbers. At least one row is required.
pub fn parse_table<const N: usize>(contents: &str) -> Result<Vec<[f64; N]>, ParameterError> {
    let mut rows = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let data = match line.split_once('#') {
            Some((data, _comment)) => data,
            None => line,
        };
        let tokens: Vec<&str> = data.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != N {
            return Err(ParameterError::InvalidColumns { line: index + 1, expected: N, found: tokens.len() });
        }
        let mut row = [0.0; N];
        for (value, token) in row.iter_mut().zip(&tokens) {
            let parsed: f64 = token.parse().map_err(|_| ParameterError::ParseError {
                line: index + 1,
                message: format!("'{}' is not a number", token),
            })?;
            if !parsed.is_finite() {
                return Err(ParameterError::ParseError {
                    line: index + 1,
                    message: format!("'{}' is not a finite number", token),
                });
            }
            *value = parsed;
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(ParameterError::EmptyTable);
    }
    Ok(rows)
}

/// Parse the waypoints of a Cartesian path (two columns).
pub fn parse_path(contents: &str) -> Result<Vec<Point>, ParameterError> {
    Ok(parse_table::<2>(contents)?
        .into_iter()
        .map(|[x, y]| Point::new(x, y))
        .collect())
}

pub fn read_path_file<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, ParameterError> {
    parse_path(&fs::read_to_string(path)?)
}

/// Parse a joint trajectory (three columns).
pub fn parse_trajectory(contents: &str) -> Result<Vec<Joints>, ParameterError> {
    parse_table::<3>(contents)
}

pub fn read_trajectory_file<P: AsRef<Path>>(path: P) -> Result<Vec<Joints>, ParameterError> {
    parse_trajectory(&fs::read_to_string(path)?)
}

/// One row per sample, columns separated by a single space.
pub fn format_trajectory(joints: &[Joints]) -> String {
    let mut text = String::with_capacity(joints.len() * 72);
    for row in joints {
        let columns: Vec<String> = row.iter().map(|&q| format_scientific(q)).collect();
        text.push_str(&columns.join(" "));
        text.push('\n');
    }
    text
}

pub fn write_trajectory_file<P: AsRef<Path>>(path: P, joints: &[Joints]) -> Result<(), ParameterError> {
    fs::write(path, format_trajectory(joints))?;
    Ok(())
}
