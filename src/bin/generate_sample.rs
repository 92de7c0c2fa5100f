use anyhow::{Context, Result};

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
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

const COUNTRIES: [&str; 20] = [
    "Angola",
    "Argentina",
    "Australia",
    "Brazil",
    "China",
    "Egypt",
    "France",
    "Germany",
    "India",
    "Indonesia",
    "Japan",
    "Kenya",
    "Mexico",
    "Nigeria",
    "Norway",
    "South Korea",
    "Sweden",
    "UK",
    "USA",
    "Vietnam",
];

const FIRST_YEAR: i32 = 1800;
const LAST_YEAR: i32 = 2100;

/// Values at or above 1000 are written in the dataset's `k` notation so the
/// suffix-coercion path gets exercised by real-looking input.
fn format_cell(value: f64) -> String {
    if value >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else {
        format!("{value:.0}")
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let out_path = "gdp_pcap_sample.csv";

    let mut writer = csv::Writer::from_path(out_path)
        .with_context(|| format!("creating {out_path}"))?;

    let mut header = vec!["country".to_string()];
    header.extend((FIRST_YEAR..=LAST_YEAR).map(|year| year.to_string()));
    writer.write_record(&header)?;

    for country in COUNTRIES {
        // Each country starts somewhere in [300, 1500) and compounds with a
        // small noisy growth rate, like the real series.
        let mut value = 300.0 + rng.next_f64() * 1200.0;
        let base_growth = 0.004 + rng.next_f64() * 0.012;

        let mut record = vec![country.to_string()];
        for _year in FIRST_YEAR..=LAST_YEAR {
            let noise = (rng.next_f64() - 0.5) * 0.04;
            value *= 1.0 + base_growth + noise;

            // Occasional missing cell, as in the published file.
            if rng.next_f64() < 0.002 {
                record.push(String::new());
            } else {
                record.push(format_cell(value));
            }
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    println!(
        "Wrote {} countries x {} years to {out_path}",
        COUNTRIES.len(),
        LAST_YEAR - FIRST_YEAR + 1
    );
    Ok(())
}
