use super::*;

#[test]
fn new_sink_is_black() {
    let sink = GridSink::new(Geometry::flower());
    assert_eq!(sink.cells().len(), 56);
    assert!(sink.cells().iter().all(|cell| cell.rgb() == [0, 0, 0]));
}

#[test]
fn set_then_get_roundtrips() {
    let mut sink = GridSink::new(Geometry::new(2, 3).unwrap());
    let red = Color::new(0.0, 1.0, 1.0);
    sink.set(1, 2, red);
    assert_eq!(sink.get(1, 2), Some(red));
    assert_eq!(sink.cells()[5], red);
}

#[test]
fn writes_outside_the_geometry_are_dropped() {
    let mut sink = GridSink::new(Geometry::new(2, 3).unwrap());
    let red = Color::new(0.0, 1.0, 1.0);
    sink.set(2, 0, red);
    sink.set(0, 3, red);
    assert_eq!(sink.get(2, 0), None);
    assert_eq!(sink.get(0, 3), None);
    assert!(sink.cells().iter().all(|cell| cell.rgb() == [0, 0, 0]));
}

#[test]
fn geometry_is_preserved() {
    let geometry = Geometry::new(4, 9).unwrap();
    let sink = GridSink::new(geometry);
    assert_eq!(sink.geometry(), geometry);
}
