use crowd_layout::prelude::*;
use crowd_layout_examples::{init_tracing, render_zone_crowds_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // One market with three outcomes, left to right.
    let outcomes = vec![
        Outcome::new("yes", 38.0).with_label("Yes").with_color("#22c55e"),
        Outcome::new("no", 32.0).with_label("No").with_color("#ef4444"),
        Outcome::new("maybe", 18.0).with_label("Maybe").with_color("#3b82f6"),
    ];
    let columns = 24;
    let ranges = partition_columns(&outcomes, columns);
    for r in &ranges {
        println!(
            "{:>6}: columns {:>2}..{:<2} ({} wide)",
            r.outcome_id,
            r.col_start,
            r.col_end,
            r.width()
        );
    }

    // Crowd sizes roughly follow the weights.
    let crowds: Vec<(OutcomeId, Vec<Entity>)> = outcomes
        .iter()
        .map(|o| {
            let n = (o.weight / 3.0).round() as usize;
            let members = (0..n)
                .map(|i| Entity::new(format!("{}-{i}", o.id), format!("Avatar {i}")))
                .collect();
            (o.id.clone(), members)
        })
        .collect();

    let area = PlacementBounds::new(0.0, 100.0, 15.0, 85.0);
    let options = PlacementOptions::new(14.0, "");
    let zones = place_in_zones(&crowds, &ranges, columns, &area, 1.5, &options);

    let config = RenderConfig::new((1200, 700), PlacementBounds::new(0.0, 100.0, 0.0, 100.0));
    render_zone_crowds_to_png(&zones, &outcomes, &config, "crowd-zones-scene.png")?;
    Ok(())
}
