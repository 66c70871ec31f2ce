use sverdrup::depth_grid::{DEFAULT_DEPTH_RESOLUTION, DepthGrid};
use sverdrup::light::{IrradianceField, euphotic_depth};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let grid = DepthGrid::linspace(100.0, DEFAULT_DEPTH_RESOLUTION)?;
    let surface = [100.0, 250.0, 400.0];

    for k in [0.1, 0.075] {
        let field = IrradianceField::compute(&grid, &surface, k)?;
        println!("k = {}: field {:?}", k, field.shape());

        if let Some(zeu) = euphotic_depth(k) {
            println!("  Euphotic depth: {:.2} m", zeu);
        }

        for (day, i0) in surface.iter().enumerate() {
            let profile = field.profile(day).ok_or("missing profile")?;
            let depths = grid.as_slice();
            println!(
                "  I0 = {:>5.1}: {:.1} m = {:.2}, {:.1} m = {:.2}",
                i0, depths[50], profile[50], depths[250], profile[250]
            );
        }
    }

    Ok(())
}
