mod support;

use axisconv::{
    convert::{AxisConventionConverter, BatchConvert, EXPECTED_BASIS_IMAGES, SerialBatch, unity_to_ros},
    errors::ValidationError,
    float_types::{FRAC_PI_2, Real},
    vector,
};
use nalgebra::{Rotation3, Vector3};

#[test]
fn zero_maps_to_zero() {
    let converter = AxisConventionConverter::new();
    assert_eq!(converter.convert(&Vector3::zeros()), Vector3::zeros());
}

#[test]
fn closed_form() {
    // (a, b, c) -> (c, a, -b)
    let converter = AxisConventionConverter::new();
    for v in support::sample_vectors() {
        let expected = Vector3::new(v.z, v.x, -v.y);
        assert!(
            support::approx_eq_vec(&converter.convert(&v), &expected, support::loose_for(&v)),
            "{v:?}"
        );
    }
}

#[test]
fn basis_mapping() {
    let converter = AxisConventionConverter::new();
    let x = converter.convert(&Vector3::new(1.0, 0.0, 0.0));
    let y = converter.convert(&Vector3::new(0.0, 1.0, 0.0));
    let z = converter.convert(&Vector3::new(0.0, 0.0, 1.0));

    assert!(support::approx_eq_vec(&x, &Vector3::new(0.0, 1.0, 0.0), support::TIGHT));
    assert!(support::approx_eq_vec(&y, &Vector3::new(0.0, 0.0, -1.0), support::TIGHT));
    assert!(support::approx_eq_vec(&z, &Vector3::new(1.0, 0.0, 0.0), support::TIGHT));

    for (found, expected) in converter.basis_images().iter().zip(EXPECTED_BASIS_IMAGES) {
        assert!(support::approx_eq_vec(found, &Vector3::from(expected), support::TIGHT));
    }
    assert_eq!(converter.check_basis(), Ok(()));
}

#[test]
fn revert_undoes_convert() {
    let converter = AxisConventionConverter::new();
    for v in support::sample_vectors() {
        let back = converter.revert(&converter.convert(&v));
        assert!(support::approx_eq_vec(&back, &v, support::loose_for(&v)), "{v:?} -> {back:?}");
    }
}

#[test]
fn revert_closed_form() {
    // (a, b, c) -> (b, -c, a)
    let converter = AxisConventionConverter::new();
    let back = converter.revert(&Vector3::new(1.0, 2.0, 3.0));
    assert!(support::approx_eq_vec(&back, &Vector3::new(2.0, -3.0, 1.0), support::TIGHT));
}

#[test]
fn sensor_scenario_matches_explicit_composition() {
    let degrees = Vector3::new(55.246, -90.955, -0.785);
    let radians = vector::to_radians(&degrees);

    let permuted = Vector3::new(radians.z, radians.y, radians.x);
    let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), -FRAC_PI_2);
    let expected = rotation * permuted;

    let converted = AxisConventionConverter::new().convert(&radians);
    assert!(support::approx_eq_vec(&converted, &expected, support::LOOSE));

    // The same numbers, derived by hand from the closed form.
    let by_hand = Vector3::new(
        (-0.785 as Real).to_radians(),
        (55.246 as Real).to_radians(),
        (90.955 as Real).to_radians(),
    );
    assert!(support::approx_eq_vec(&converted, &by_hand, support::LOOSE));
}

#[test]
fn conversion_is_linear() {
    let converter = AxisConventionConverter::new();
    for k in [-2.5, 0.0, 1.0, 3.75, 1e3] {
        for v in support::sample_vectors() {
            let lhs = converter.convert(&(v * k));
            let rhs = converter.convert(&v) * k;
            let eps = support::LOOSE * (1.0 + (v * k).amax());
            assert!(support::approx_eq_vec(&lhs, &rhs, eps), "k={k} v={v:?}");
        }
    }
}

#[test]
fn matrix_flips_handedness() {
    let converter = AxisConventionConverter::new();
    let m = converter.matrix();

    assert!(support::approx_eq(m.determinant(), -1.0, support::TIGHT));
    let should_be_identity = m.transpose() * m;
    assert!((should_be_identity - nalgebra::Matrix3::identity()).amax() < support::TIGHT);

    let v = Vector3::new(-4.5, 0.25, 9.0);
    assert!(support::approx_eq_vec(&(m * v), &converter.convert(&v), support::TIGHT));
}

#[test]
fn realignment_is_quarter_turn_about_x() {
    let converter = AxisConventionConverter::new();
    let r = converter.realignment();
    assert!(support::approx_eq(r.angle(), FRAC_PI_2, support::TIGHT));
    // -90° about X sends +Y to -Z.
    assert!(support::approx_eq_vec(&(r * Vector3::y()), &-Vector3::z(), support::TIGHT));
}

#[test]
fn permute_swaps_first_and_third() {
    let p = AxisConventionConverter::permute(&Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(p, Vector3::new(3.0, 2.0, 1.0));
}

#[test]
fn free_function_matches_converter() {
    let converter = AxisConventionConverter::default();
    for v in support::sample_vectors() {
        assert_eq!(unity_to_ros(&v), converter.convert(&v));
    }
}

#[test]
fn try_convert_validates_input() {
    let converter = AxisConventionConverter::new();

    let ok = converter.try_convert(&[1.0, 2.0, 3.0]).unwrap();
    assert!(support::approx_eq_vec(&ok, &Vector3::new(3.0, 1.0, -2.0), support::TIGHT));

    assert_eq!(
        converter.try_convert(&[1.0, 2.0]),
        Err(ValidationError::WrongComponentCount {
            expected: 3,
            found: 2
        })
    );
    assert!(matches!(
        converter.try_convert(&[1.0, Real::NAN, 3.0]),
        Err(ValidationError::NonFinite { index: 1, .. })
    ));
}

#[test]
fn batch_matches_individual_conversions_exactly() {
    let converter = AxisConventionConverter::new();
    let inputs = support::sample_vectors();

    let batch = SerialBatch::new().convert_all(&inputs);
    assert_eq!(batch.len(), inputs.len());
    for (converted, v) in batch.iter().zip(&inputs) {
        assert_eq!(*converted, converter.convert(v));
    }

    // Converting twice gives the same answer: no state carried between calls.
    assert_eq!(SerialBatch::new().convert_all(&inputs), batch);
    assert!(SerialBatch::new().convert_all(&[]).is_empty());
}
