use std::fmt::Write as _;

use anyhow::{Context, Result};
use data_catalog::data::parser::{parse, DELIMITER};

const HEADERS: [&str; 8] = [
    "id",
    "Gender",
    "Age",
    "City",
    "CGPA",
    "Sleep Duration",
    "Study Hours",
    "Depression",
];
const CITIES: [&str; 5] = ["Pune", "Delhi", "Chennai", "Jaipur", "Surat"];
const SLEEP: [&str; 4] = ["Less than 5 hours", "5-6 hours", "7-8 hours", "More than 8 hours"];
const ROWS: usize = 250;

/// Small deterministic generator (64-bit LCG, high bits out).
struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 32) as u32
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.next_u32() as usize % items.len()]
    }
}

fn main() -> Result<()> {
    let mut rng = Lcg(42);
    let sep = DELIMITER.to_string();
    let mut out = HEADERS.join(&sep);

    for id in 0..ROWS {
        let age = 18 + (rng.unit() * 16.0) as u32;
        let study = (rng.unit() * 12.0).round();
        // study time pushes grades up, noise on top
        let cgpa = (5.0 + study * 0.3 + rng.unit() * 1.5).min(10.0);
        let depressed = u8::from(rng.unit() < 0.45 + 0.03 * (6.0 - study).max(0.0));

        let mut fields = vec![
            id.to_string(),
            rng.pick(&["Male", "Female"]).to_string(),
            age.to_string(),
            rng.pick(&CITIES).to_string(),
            // some grades were never reported
            if rng.unit() < 0.05 { String::new() } else { format!("{cgpa:.2}") },
            rng.pick(&SLEEP).to_string(),
            format!("{study}"),
            depressed.to_string(),
        ];
        // a few truncated rows exercise the short-row path
        if rng.unit() < 0.02 {
            fields.truncate(5);
        }

        write!(out, "\n{}", fields.join(&sep)).context("formatting row")?;
    }
    out.push('\n');

    let output_path = "sample_data.csv";
    std::fs::write(output_path, &out).with_context(|| format!("writing {output_path}"))?;

    let table = parse(&out);
    println!(
        "Wrote {} rows × {} columns to {output_path}",
        table.row_count(),
        table.column_count()
    );
    Ok(())
}
