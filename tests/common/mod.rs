/// Two-sided tolerance check used for every floating-point expectation.
pub fn approx_eq(actual: f64, expected: f64, deviation: f64) -> bool {
    (actual - expected) <= deviation && (expected - actual) <= deviation
}
