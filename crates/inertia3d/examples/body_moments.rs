use inertia3d::{make_box, make_cylinder, make_sphere, total_moment, BodyRegistry, InvalidParameter};

fn main() -> Result<(), InvalidParameter> {
    let mut registry = BodyRegistry::new();
    registry.add(make_sphere(1.0)?);
    registry.add(make_box(2.0, 3.0, 4.0)?);
    registry.add(make_cylinder(1.0, 2.0)?);

    // Steel.
    let density = 7800.0;
    let results = registry.compute_all(density)?;

    println!("Moments of inertia (density = {density} kg/m³):");
    for (i, result) in results.iter().enumerate() {
        println!(
            "{}. {} {:?}: mass = {:.3} kg, moment = {:.6} kg·m²",
            i + 1,
            result.shape.name(),
            result.shape.dimensions().values().collect::<Vec<_>>(),
            result.mass,
            result.moment
        );
    }
    println!("Total: {:.6} kg·m²", total_moment(&results));

    Ok(())
}
