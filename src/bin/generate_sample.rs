use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde_json::{json, Map, Value as JsonValue};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

const FIRST: [&str; 8] = ["Ana", "Ben", "Carla", "Dario", "Elena", "Felix", "Gina", "Hugo"];
const LAST: [&str; 6] = ["Reyes", "Cruz", "Diaz", "Santos", "Lim", "Garcia"];
const STATUSES: [&str; 4] = ["active", "relocated", "missing", "deceased"];
const CENTERS: [(&str, u64); 3] = [
    ("North Gym", 120),
    ("South Hall", 80),
    ("Riverside School", 200),
];

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = SimpleRng::new(42);

    // Evacuee table, as the admin list page renders it.
    let mut writer =
        csv::Writer::from_path("sample_evacuees.csv").context("creating sample_evacuees.csv")?;
    writer.write_record(["Name", "Age", "Status", "Center"])?;

    let mut status_counts: BTreeMap<&str, u64> = STATUSES.iter().map(|s| (*s, 0)).collect();
    let mut occupancy: BTreeMap<&str, u64> = CENTERS.iter().map(|(c, _)| (*c, 0)).collect();
    let rows = 60;
    for _ in 0..rows {
        let name = format!("{} {}", rng.pick(&FIRST), rng.pick(&LAST));
        let age = 1 + rng.below(90);
        // Most evacuees are still active.
        let status = if rng.below(10) < 7 { "active" } else { rng.pick(&STATUSES) };
        let center = CENTERS[rng.below(CENTERS.len())].0;

        *status_counts.entry(status).or_default() += 1;
        if status == "active" {
            *occupancy.entry(center).or_default() += 1;
        }
        writer.write_record([name.as_str(), age.to_string().as_str(), status, center])?;
    }
    writer.flush()?;

    // data-status attribute: counts in the fixed status order.
    let mut status_obj = Map::new();
    for s in STATUSES {
        status_obj.insert(s.to_string(), json!(status_counts[s]));
    }
    write_json("sample_status.json", &JsonValue::Object(status_obj))?;

    // data-centers attribute.
    let centers: Vec<JsonValue> = CENTERS
        .iter()
        .map(|(name, capacity)| {
            json!({ "name": name, "occupancy": occupancy[name], "capacity": capacity })
        })
        .collect();
    write_json("sample_centers.json", &JsonValue::Array(centers))?;

    println!(
        "Wrote {rows} evacuees to sample_evacuees.csv, \
         chart data to sample_status.json and sample_centers.json"
    );
    Ok(())
}

fn write_json(path: &str, value: &JsonValue) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    std::fs::write(path, text).with_context(|| format!("writing {path}"))
}
