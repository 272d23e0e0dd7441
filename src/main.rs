use clap::{Arg, ArgAction, Command as ClapCommand};
use std::process;
use log::{debug, error};

// Import from your library
use boundkit::{BoundingBox, CoordinateSystemFactory, ExpansionDispatcher, GeometryResult, Point};

fn main() {
    let matches = ClapCommand::new("BoundKit")
        .version("0.1")
        .about("Expand a bounding box to absorb one or more points")
        .arg(
            Arg::new("bbox")
                .help("Bounding box to expand (minx,miny,maxx,maxy)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("point")
                .short('p')
                .long("point")
                .help("Point to absorb, in 'x,y' format (repeatable)")
                .value_name("POINT")
                .action(ArgAction::Append)
                .required(true),
        )
        .arg(
            Arg::new("crs")
                .long("crs")
                .help("Coordinate system of the box (cartesian, spherical[:unit], geographic[:unit])")
                .value_name("CRS")
                .default_value("cartesian")
                .required(false),
        )
        .arg(
            Arg::new("point-crs")
                .long("point-crs")
                .help("Coordinate system of the points (defaults to the box's)")
                .value_name("CRS")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let default_level = if matches.get_flag("verbose") { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let bbox_str = matches.get_one::<String>("bbox").unwrap();
    let crs_str = matches.get_one::<String>("crs").unwrap();
    let point_crs_str = matches.get_one::<String>("point-crs").unwrap_or(crs_str);
    let point_strs: Vec<&String> = matches.get_many::<String>("point").unwrap().collect();

    match run(bbox_str, crs_str, point_crs_str, &point_strs) {
        Ok(bbox) => {
            println!("{},{},{},{}", bbox.min(0), bbox.min(1), bbox.max(0), bbox.max(1));
        },
        Err(e) => {
            error!("Expansion failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(
    bbox_str: &str,
    crs_str: &str,
    point_crs_str: &str,
    point_strs: &[&String],
) -> GeometryResult<BoundingBox> {
    let box_system = CoordinateSystemFactory::from_string(crs_str)?;
    let point_system = CoordinateSystemFactory::from_string(point_crs_str)?;
    let mut bbox = BoundingBox::from_string(bbox_str)?;

    debug!("Expanding {} box {:?} by {} point(s)",
           box_system.description(), bbox, point_strs.len());

    for point_str in point_strs {
        let point = Point::from_string(point_str)?;
        ExpansionDispatcher::expand(&mut bbox, &point, box_system, point_system)?;
        debug!("After {}: {:?}", point_str, bbox);
    }

    Ok(bbox)
}
