//! Writes a deterministic sample CSV for demoing the explorer: departmental
//! salary records with blank cells and a few planted outliers.

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let departments: [(&str, f64); 4] = [
        ("Engineering", 72_000.0),
        ("Sales", 54_000.0),
        ("Support", 41_000.0),
        ("Research", 68_000.0),
    ];
    let cities = ["Vienna", "Graz", "Linz"];

    let output_path = "sample_data.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["employee_id", "department", "city", "age", "salary", "remote"])
        .expect("Failed to write header");

    let mut row_id: i64 = 0;
    for (dept, base_salary) in &departments {
        for i in 0..15 {
            let age = 22 + (rng.next_u64() % 40) as i64;
            let mut salary = rng.gauss(*base_salary, base_salary * 0.12);

            // Plant outliers: every 11th record earns far outside the band.
            if row_id % 11 == 10 {
                salary *= 3.0;
            }

            // Leave an occasional cell blank so null handling shows up.
            let age_cell = if i == 7 {
                String::new()
            } else {
                age.to_string()
            };

            let city = cities[(rng.next_u64() % cities.len() as u64) as usize];
            let remote = rng.next_f64() < 0.3;

            writer
                .write_record([
                    row_id.to_string(),
                    dept.to_string(),
                    city.to_string(),
                    age_cell,
                    format!("{salary:.2}"),
                    remote.to_string(),
                ])
                .expect("Failed to write record");
            row_id += 1;
        }
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {row_id} records to {output_path}");
}
