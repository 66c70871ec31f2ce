use sverdrup::config::Config;
use sverdrup::solar::high_noon;

fn main() {
    let config = match Config::from_file("./data/config/sverdrup.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return;
        }
    };

    let latitude = config.latitude();

    for day in config.day_series().into_iter().step_by(30) {
        match high_noon(latitude, day) {
            Ok(noon) => println!(
                "Day: {:>3}, Latitude: {:.2}, Elevation: {:.2}°, Declination: {:.2}°",
                day, latitude, noon.elevation_deg, noon.declination_deg
            ),
            Err(e) => eprintln!("Day {}: {}", day, e),
        }
    }
}
