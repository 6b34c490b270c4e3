use crowd_layout::prelude::*;
use crowd_layout_examples::init_tracing;
use glam::Vec2;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let outcomes = vec![
        Outcome::new("a", 38.0),
        Outcome::new("b", 32.0),
        Outcome::new("c", 18.0),
    ];
    let ranges = partition_columns(&outcomes, 24);
    let container = ContainerRect::from_xywh(0.0, 0.0, 960.0, 400.0);
    let mut session =
        DragSession::new(ZoneResolver::with_rects(zone_rects(&ranges, 24, &container)));

    let mut sink = FnSink::new(|event: DragEvent| println!("  event: {event:?}"));

    println!("pick up");
    session.pick_up_with_events(&mut sink);

    // Sweep right across zone b, then back into zone a, many ticks per zone.
    let path = (0..40)
        .map(|i| Vec2::new(400.0 + i as f32 * 5.0, 200.0))
        .chain((0..40).map(|i| Vec2::new(600.0 - i as f32 * 12.0, 210.0)));
    for p in path {
        if session.move_to_with_events(p, &mut sink) {
            println!("  hover -> {:?} at {p}", session.hover());
        }
    }

    println!("release");
    let locked = session.release_with_events(&mut sink);
    println!("locked: {locked:?}");

    // Re-arm and drop outside every zone.
    session.pick_up_with_events(&mut sink);
    session.move_to_with_events(Vec2::new(-50.0, 200.0), &mut sink);
    let cancelled = session.release_with_events(&mut sink);
    println!("second drop: {cancelled:?}, state {:?}", session.state());
    Ok(())
}
