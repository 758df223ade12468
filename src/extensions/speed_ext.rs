/// A trait to convert speeds from meters per second to road speed units.
/// See https://en.wikipedia.org/wiki/Miles_per_hour.
pub trait SpeedConversions {
    /// Returns the value in kilometers per hour by treating `self` as meters per second.
    fn mps_to_kmh(self) -> Self;

    /// Returns the value in miles per hour by treating `self` as meters per second.
    fn mps_to_mph(self) -> Self;
}

macro_rules! impl_speed_conversions {
    ($($t:ty)*) => ($(
        impl SpeedConversions for $t {
            fn mps_to_kmh(self) -> $t {
                self * 3.6
            }
            fn mps_to_mph(self) -> $t {
                self * 2.23694
            }
        }
    )*)
}

impl_speed_conversions! { f32 f64 }

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(1.0, 3.6)]
    #[case(27.5, 99.0)]
    fn mps_to_kmh_f64(#[case] input: f64, #[case] expected: f64) {
        assert!((input.mps_to_kmh() - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(1.0, 3.6)]
    #[case(27.5, 99.0)]
    fn mps_to_kmh_f32(#[case] input: f32, #[case] expected: f32) {
        assert!((input.mps_to_kmh() - expected).abs() < 1e-3);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(1.0, 2.23694)]
    #[case(10.0, 22.3694)]
    fn mps_to_mph_f64(#[case] input: f64, #[case] expected: f64) {
        assert!((input.mps_to_mph() - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(1.0, 2.23694)]
    #[case(10.0, 22.3694)]
    fn mps_to_mph_f32(#[case] input: f32, #[case] expected: f32) {
        assert!((input.mps_to_mph() - expected).abs() < 1e-3);
    }
}
