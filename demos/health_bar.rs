//! A health stat drawn as a gauge, with hooks for low health and death.
//!
//! Run with `cargo run --example health_bar`.

use gauge_stat::prelude::*;

fn gauge(stat: &Stat) -> String {
    let options = stat.options();
    let span = options.maximum_boundary - options.minimum_boundary;
    let filled = ((stat.value() - options.minimum_boundary) / span * 20.0).round().clamp(0.0, 20.0) as usize;
    format!("[{}{}] {}", "#".repeat(filled), "-".repeat(20 - filled), stat.value())
}

fn main() -> Result<(), StatError> {
    let mut health = Stat::from_json(
        r#"{
            "id": "hp",
            "name": "Health",
            "base_value": 100,
            "minimum_value": 0,
            "maximum_value": 120,
            "minimum_boundary": 0,
            "maximum_boundary": 100,
            "increment_by": 1,
            "round_to_increment": true
        }"#,
    )?;

    health.register_hook(
        "low",
        25.0,
        "<",
        true,
        |stat: &mut Stat| println!("  ! health dropped below 25 (was {})", stat.previous_value()),
        true,
    );
    health.register_hook("dead", 0.0, "=", false, |_| println!("  ! dead"), true);

    println!("config: {}", health.config());
    println!("{}", gauge(&health));

    for hit in [-30.0, -22.5, -30.0, -40.0] {
        if !health.can_modify_proxy(hit) {
            println!("hit of {} would overkill; clamping", hit);
        }
        health.modify_proxy(hit, ModMode::Commit)?;
        println!("{}", gauge(&health));
    }

    println!("potion overheals to {}", health.modify_proxy(500.0, ModMode::Commit)?.value().unwrap_or_default());
    println!("rest: {}", health.reset());

    if let Err(err) = health.modify_property("maximum_value", 10.0, ModMode::Commit) {
        println!("rejected: {}", err);
    }

    Ok(())
}
