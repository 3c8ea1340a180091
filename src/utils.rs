//! Helper functions

use crate::kinematic_traits::Joints;

/// Checks if all elements in the array are finite
pub fn is_valid(qs: &Joints) -> bool {
    qs.iter().all(|&q| q.is_finite())
}

/// Joint values in degrees, like `[17.19 -28.65 45.00]`
pub fn format_joints_degrees(joints: &Joints) -> String {
    let row: Vec<String> = joints.iter().map(|q| format!("{:5.2}", q.to_degrees())).collect();
    format!("[{}]", row.join(" "))
}

/// Allows to specify joint values in degrees (converts to radians)
pub fn as_radians(degrees: [i32; 3]) -> Joints {
    std::array::from_fn(|i| (degrees[i] as f64).to_radians())
}

/// C-style scientific notation with 16 digits after the point (`-1.2500000000000000e-01`).
/// This is enough for any f64 to be read back bit-identical.
pub fn format_scientific(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }
    let rust = format!("{:.16e}", value);
    match rust.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            format!("{}e{}{:02}", mantissa, if exponent < 0 { '-' } else { '+' }, exponent.abs())
        }
        None => rust,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_is_valid_with_all_finite() {
        let qs = [0.0, -1.0, PI];
        assert!(is_valid(&qs));
    }

    #[test]
    fn test_is_valid_with_nan() {
        let qs = [0.0, f64::NAN, 1.0];
        assert!(!is_valid(&qs));
    }

    #[test]
    fn test_is_valid_with_infinity() {
        let qs = [0.0, 1.0, f64::INFINITY];
        assert!(!is_valid(&qs));
    }

    #[test]
    fn test_as_radians() {
        assert_eq!(as_radians([180, -90, 0]), [PI, -PI / 2.0, 0.0]);
    }

    #[test]
    fn test_format_joints_degrees() {
        assert_eq!(format_joints_degrees(&[PI / 4.0, -PI / 2.0, 0.0]), "[45.00 -90.00  0.00]");
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_scientific(1.0), "1.0000000000000000e+00");
        assert_eq!(format_scientific(-0.125), "-1.2500000000000000e-01");
        assert_eq!(format_scientific(0.0), "0.0000000000000000e+00");
        assert_eq!(format_scientific(6.02e123), "6.0199999999999995e+123");
        assert_eq!(format_scientific(1e-300), "1.0000000000000000e-300");
    }

    #[test]
    fn test_format_scientific_reads_back_exactly() {
        for value in [PI, -1.0 / 3.0, 2.0_f64.sqrt() * 1e-7, 123456.789e10] {
            let parsed: f64 = format_scientific(value).parse().unwrap();
            assert_eq!(parsed.to_bits(), value.to_bits());
        }
    }
}
