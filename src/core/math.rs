// Math utilities and helper functions

/// Velocity magnitude below which a body counts as at rest on an axis
pub const REST_THRESHOLD: f32 = 0.1;

/// Sign of a value as -1.0, 0.0 or 1.0 (unlike `f32::signum`, zero maps to zero)
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Check if a value is within `epsilon` of zero
pub fn near_zero(value: f32, epsilon: f32) -> bool {
    value.abs() < epsilon
}

/// Clamp an input axis into [-1, 1]; NaN and infinities collapse to 0
pub fn sanitize_axis(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Elapsed time can't run backwards
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign() {
        assert_eq!(sign(3.5), 1.0);
        assert_eq!(sign(-0.2), -1.0);
        assert_eq!(sign(0.0), 0.0);
    }

    #[test]
    fn test_near_zero() {
        assert!(near_zero(0.05, REST_THRESHOLD));
        assert!(near_zero(-0.05, REST_THRESHOLD));
        assert!(!near_zero(0.1, REST_THRESHOLD));
    }

    #[test]
    fn test_sanitize_axis() {
        assert_eq!(sanitize_axis(0.5), 0.5);
        assert_eq!(sanitize_axis(4.0), 1.0);
        assert_eq!(sanitize_axis(-4.0), -1.0);
        assert_eq!(sanitize_axis(f32::NAN), 0.0);
    }

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(sanitize_dt(0.016), 0.016);
        assert_eq!(sanitize_dt(-1.0), 0.0);
        assert_eq!(sanitize_dt(f32::INFINITY), 0.0);
    }
}
