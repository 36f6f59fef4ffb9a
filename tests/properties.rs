// tests/properties.rs
//! Property-based tests for the algebraic laws of Vector.

use approx::{abs_diff_eq, assert_abs_diff_eq};
use proptest::prelude::*;
use tinygeo::prelude::*;

fn component() -> impl Strategy<Value = f64> {
    -1000.0..1000.0_f64
}

fn vector3_strategy() -> impl Strategy<Value = Vector3<f64>> {
    prop::array::uniform3(component()).prop_map(Vector::new)
}

fn vector4_strategy() -> impl Strategy<Value = Vector4<f64>> {
    prop::array::uniform4(component()).prop_map(Vector::new)
}

proptest! {
    #[test]
    fn test_addition_commutativity(a in vector4_strategy(), b in vector4_strategy()) {
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn test_addition_associativity(
        a in vector4_strategy(),
        b in vector4_strategy(),
        c in vector4_strategy()
    ) {
        assert_abs_diff_eq!((a + b) + c, a + (b + c), epsilon = 1e-9);
    }

    #[test]
    fn test_scale_then_divide(v in vector4_strategy(), s in 0.001..1000.0_f64) {
        assert!(abs_diff_eq!((v * s) / s, v, epsilon = 1e-9));
        assert!(abs_diff_eq!((s * v) / s, v, epsilon = 1e-9));
    }

    #[test]
    fn test_cross_anticommutativity(a in vector3_strategy(), b in vector3_strategy()) {
        assert_eq!(cross(&a, &b), -cross(&b, &a));
    }

    #[test]
    fn test_cross_orthogonality(a in vector3_strategy(), b in vector3_strategy()) {
        let c = cross(&a, &b);
        // relative to the magnitudes involved
        let scale = a.norm() * b.norm() * a.norm().max(b.norm()) + 1.0;
        assert!(dot(&a, &c).abs() <= 1e-12 * scale);
        assert!(dot(&b, &c).abs() <= 1e-12 * scale);
    }

    #[test]
    fn test_dot_commutativity(a in vector4_strategy(), b in vector4_strategy()) {
        assert_eq!(dot(&a, &b), dot(&b, &a));
    }

    #[test]
    fn test_normalized_has_unit_length(v in vector3_strategy()) {
        prop_assume!(v.norm() >= 1e-6);
        assert_abs_diff_eq!(v.normalized().norm(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_tiny_vectors_normalize_to_zero(v in prop::array::uniform3(-1e-9..1e-9_f64)) {
        let v = Vector::new(v);
        prop_assume!(v.norm() < 1e-8);
        assert_eq!(v.normalized(), Vector::zero());
    }

    #[test]
    fn test_construct_then_index(values in prop::array::uniform4(any::<i32>())) {
        let v = Vector::<i32, 4>::from_slice(&values);
        for (i, value) in values.iter().enumerate() {
            assert_eq!(v[i], *value);
        }
    }
}
