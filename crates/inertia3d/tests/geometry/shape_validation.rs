use inertia3d::shape::{Cuboid, Cylinder, Sphere};
use inertia3d::{make_box, make_cylinder, make_sphere, InvalidParameter, ShapeType};

const NON_POSITIVE: [f64; 5] = [0.0, -0.0, -1.0e-300, -3.5, f64::NEG_INFINITY];

#[test]
fn sphere_rejects_non_positive_radius() {
    for r in NON_POSITIVE {
        assert!(matches!(
            make_sphere(r),
            Err(InvalidParameter::NonPositive { name: "radius", .. })
        ));
        assert!(Sphere::new(r).is_err());
    }
}

#[test]
fn box_rejects_any_non_positive_side() {
    for bad in NON_POSITIVE {
        assert!(matches!(
            make_box(bad, 1.0, 1.0),
            Err(InvalidParameter::NonPositive { name: "a", .. })
        ));
        assert!(matches!(
            make_box(1.0, bad, 1.0),
            Err(InvalidParameter::NonPositive { name: "b", .. })
        ));
        assert!(matches!(
            make_box(1.0, 1.0, bad),
            Err(InvalidParameter::NonPositive { name: "c", .. })
        ));
        assert!(Cuboid::new(bad, bad, bad).is_err());
    }
}

#[test]
fn cylinder_rejects_non_positive_radius_or_height() {
    for bad in NON_POSITIVE {
        assert!(matches!(
            make_cylinder(bad, 1.0),
            Err(InvalidParameter::NonPositive { name: "radius", .. })
        ));
        assert!(matches!(
            make_cylinder(1.0, bad),
            Err(InvalidParameter::NonPositive { name: "height", .. })
        ));
        assert!(Cylinder::new(bad, 1.0).is_err());
    }
}

#[test]
fn nan_is_not_a_positive_dimension() {
    assert!(make_sphere(f64::NAN).is_err());
    assert!(make_box(1.0, f64::NAN, 1.0).is_err());
    assert!(make_cylinder(1.0, f64::NAN).is_err());
}

#[test]
fn moment_rejects_non_positive_density() {
    let shapes = [
        make_sphere(1.0).unwrap(),
        make_box(1.0, 1.0, 1.0).unwrap(),
        make_cylinder(1.0, 1.0).unwrap(),
    ];

    for shape in shapes {
        for rho in NON_POSITIVE {
            assert!(matches!(
                shape.moment_of_inertia(rho),
                Err(InvalidParameter::NonPositive {
                    name: "density",
                    ..
                })
            ));
            assert!(shape.mass(rho).is_err());
        }
    }
}

#[test]
fn unknown_shape_kind_is_rejected() {
    assert_eq!(
        ShapeType::try_from(7),
        Err(InvalidParameter::UnknownShapeKind(7))
    );
}

#[test]
fn errors_describe_the_offending_parameter() {
    let err = make_cylinder(1.0, -2.0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "the parameter `height` must be strictly positive (got -2)."
    );

    let err = inertia3d::Shape::from_parameters(ShapeType::Box, &[1.0]).unwrap_err();
    assert_eq!(err.to_string(), "a Box expects 3 parameters, 1 were given.");
}
