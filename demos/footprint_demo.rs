//! Demonstration of footprint projection and output formats

use camera_footprint::{
    CameraConfig, CameraPose, CsvFormatter, FootprintProjector, GeoPoint, JsonFormatter,
    TextFormatter,
};

fn main() {
    println!("=== Camera Footprint Projection Demo ===\n");

    let pose = CameraPose::level(GeoPoint::new(-35.3632621, 149.1652374), 150.0)
        .with_attitude(1.5, -45.0, 10.0)
        .with_yaw_offset(92.0)
        .with_timestamp(1712040000.0);

    let projector = match FootprintProjector::new(CameraConfig::default()) {
        Ok(projector) => projector,
        Err(e) => {
            eprintln!("Invalid camera configuration: {}", e);
            return;
        }
    };

    let config = projector.config();
    println!(
        "Camera: {:.1} deg horizontal, {:.1} deg vertical\n",
        config.fov_deg,
        config.vertical_fov_deg()
    );

    let footprint = projector.project(&pose);

    println!("1. Text Format:");
    println!("{}", TextFormatter::new().format(&footprint));

    println!("2. Compact Text Format:");
    println!("{}\n", TextFormatter::compact().format(&footprint));

    println!("3. GeoJSON Format:");
    match JsonFormatter::pretty().format_json(&footprint) {
        Ok(json) => println!("{}\n", json),
        Err(e) => println!("Error formatting JSON: {}\n", e),
    }

    println!("4. CSV Format:");
    println!("{}", CsvFormatter::new().format_csv(&footprint));
}
