//! Integration tests for the expansion workflow

extern crate std;

// Import crate items
use boundkit::{BoundingBox, CoordinateSystemFactory, ExpansionDispatcher, Point};

#[test]
fn test_complete_expansion_workflow() {
    // Parse everything from strings, the way the CLI does
    let box_system = CoordinateSystemFactory::from_string("geographic:degrees").unwrap();
    let point_system = CoordinateSystemFactory::from_string("geographic").unwrap();
    let mut bbox = BoundingBox::from_string("170,0,175,5").unwrap();

    // Absorb a point on the far side of the anti-meridian, then one at a pole
    let points = ["-175,0", "30,90"];
    for point_str in points {
        let point = Point::from_string(point_str).unwrap();
        let result = ExpansionDispatcher::expand(&mut bbox, &point, box_system, point_system);
        std::assert!(result.is_ok());
    }

    // The longitude interval grew the short way over the cut, and the pole
    // point only raised the latitude bound
    std::assert_eq!(bbox.min(0), 170.0);
    std::assert_eq!(bbox.max(0), 185.0);
    std::assert_eq!(bbox.min(1), 0.0);
    std::assert_eq!(bbox.max(1), 90.0);
}

#[test]
fn test_cartesian_workflow_from_strings() {
    let system = CoordinateSystemFactory::from_string("cartesian").unwrap();
    let mut bbox = BoundingBox::from_string("0,0,1,1").unwrap();

    for point_str in ["-1,2", "0.5,0.5", "3,-4"] {
        let point = Point::from_string(point_str).unwrap();
        ExpansionDispatcher::expand(&mut bbox, &point, system, system).unwrap();
    }

    std::assert_eq!(bbox.min(0), -1.0);
    std::assert_eq!(bbox.min(1), -4.0);
    std::assert_eq!(bbox.max(0), 3.0);
    std::assert_eq!(bbox.max(1), 2.0);

    // Every absorbed point is now contained
    std::assert!(bbox.contains(&Point::new(-1.0, 2.0)));
    std::assert!(bbox.contains(&Point::new(3.0, -4.0)));
}

#[test]
fn test_malformed_input_is_rejected() {
    std::assert!(BoundingBox::from_string("0,0,1").is_err());
    std::assert!(Point::from_string("1,abc").is_err());
    std::assert!(CoordinateSystemFactory::from_string("mercator").is_err());
    std::assert!(CoordinateSystemFactory::from_string("geographic:gradians").is_err());
}
