use crowd_layout::prelude::*;
use crowd_layout::zones::partition::DEFAULT_COLUMNS;
use crowd_layout_examples::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cases: [(&str, &[f64]); 5] = [
        ("balanced", &[50.0, 30.0, 20.0]),
        ("unnormalized", &[38.0, 32.0, 18.0]),
        ("zero weight", &[50.0, 50.0, 0.0]),
        ("all zero", &[0.0, 0.0, 0.0, 0.0]),
        ("many options", &[9.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
    ];

    for (name, weights) in cases {
        let outcomes: Vec<Outcome> = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Outcome::new(format!("o{i}"), w))
            .collect();
        let ranges = partition_columns(&outcomes, DEFAULT_COLUMNS);
        let bar: String = (0..DEFAULT_COLUMNS)
            .map(|col| {
                let idx = option_for_column(col, &ranges)
                    .and_then(|r| ranges.iter().position(|x| x == r))
                    .unwrap_or(0);
                char::from(b'A' + (idx % 26) as u8)
            })
            .collect();
        println!("{name:>14} {weights:?}");
        println!("{:>14} {bar}", "");
    }
    Ok(())
}
