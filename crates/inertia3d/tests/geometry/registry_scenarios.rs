use approx::assert_relative_eq;
use inertia3d::{
    make_box, make_cylinder, make_sphere, shape_dimensions, shape_kind, total_moment,
    BodyRegistry, ShapeType,
};
use std::f64::consts::PI;

#[test]
fn steel_sphere_scenario() {
    let sphere = make_sphere(0.5).unwrap();
    let moment = sphere.moment_of_inertia(7800.0).unwrap();
    let expected = 0.4 * 7800.0 * (4.0 / 3.0) * PI * 0.5f64.powi(3) * 0.5f64.powi(2);

    assert_relative_eq!(moment, expected, max_relative = 1.0e-12);
    assert_relative_eq!(moment, 408.407, epsilon = 1.0e-3);
}

#[test]
fn aluminium_box_scenario() {
    let cuboid = make_box(1.0, 2.0, 3.0).unwrap();
    let props = cuboid.mass_properties(2700.0).unwrap();

    assert_eq!(props.mass, 16200.0);
    assert_relative_eq!(props.principal_inertia, 17550.0, max_relative = 1.0e-12);
}

#[test]
fn copper_cylinder_scenario() {
    let cylinder = make_cylinder(0.3, 2.0).unwrap();
    let props = cylinder.mass_properties(8960.0).unwrap();

    assert_relative_eq!(props.mass, PI * 0.09 * 2.0 * 8960.0, max_relative = 1.0e-12);
    assert_relative_eq!(props.mass, 5066.76, epsilon = 1.0e-2);
    assert_relative_eq!(props.principal_inertia, 228.004, epsilon = 1.0e-3);
}

#[test]
fn registry_results_follow_insertion_order() {
    let a = make_box(1.0, 2.0, 3.0).unwrap();
    let b = make_sphere(0.5).unwrap();
    let c = make_cylinder(0.3, 2.0).unwrap();

    let mut registry = BodyRegistry::new();
    registry.add(a);
    registry.add(b);
    registry.add(c);

    let results = registry.compute_all(1000.0).unwrap();
    let shapes: Vec<_> = results.iter().map(|r| r.shape).collect();
    assert_eq!(shapes, [a, b, c]);

    let kinds: Vec<_> = results.iter().map(|r| shape_kind(&r.shape)).collect();
    assert_eq!(kinds, [ShapeType::Box, ShapeType::Sphere, ShapeType::Cylinder]);

    let sum: f64 = results.iter().map(|r| r.moment).sum();
    assert_relative_eq!(total_moment(&results), sum);
    assert_relative_eq!(registry.total_moment(1000.0).unwrap(), sum);
}

#[test]
fn cleared_registry_computes_nothing() {
    let mut registry: BodyRegistry = [make_sphere(1.0).unwrap(), make_sphere(2.0).unwrap()]
        .into_iter()
        .collect();
    assert_eq!(registry.count(), 2);

    registry.clear();

    let results = registry.compute_all(7800.0).unwrap();
    assert!(results.is_empty());
    assert_eq!(registry.count(), 0);
    assert_eq!(total_moment(&results), 0.0);
}

#[test]
fn invalid_density_fails_the_whole_batch() {
    let mut registry = BodyRegistry::new();
    registry.extend([make_sphere(1.0).unwrap(), make_box(1.0, 1.0, 1.0).unwrap()]);

    assert!(registry.compute_all(-1.0).is_err());
    assert!(registry.total_moment(0.0).is_err());
    assert_eq!(registry.count(), 2);
    assert_eq!(registry.compute_all(1.0).unwrap().len(), 2);
}

#[test]
fn results_expose_what_an_exporter_needs() {
    let registry: BodyRegistry = [make_cylinder(0.3, 2.0).unwrap()].into_iter().collect();
    let result = registry.compute_all(8960.0).unwrap()[0];

    let (shape, density, moment) = result.as_tuple();
    assert_eq!(shape.name(), "Cylinder");
    assert_eq!(density, 8960.0);
    assert_eq!(moment, result.moment);

    let dims = shape_dimensions(&shape);
    assert_eq!(dims.get("radius"), Some(0.3));
    assert_eq!(dims.get("height"), Some(2.0));
}
