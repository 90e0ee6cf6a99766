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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    fn range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_u64() % (hi - lo) as u64) as i64
    }

    /// True with probability `num / den`.
    fn chance(&mut self, num: u64, den: u64) -> bool {
        self.next_u64() % den < num
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let kinds = ["Movie", "TV Show"];
    let countries = [
        "United States",
        "India",
        "United Kingdom",
        "Japan",
        "South Korea",
        "Canada",
        "Spain",
        "France",
    ];
    let movie_ratings = ["G", "PG", "PG-13", "R", "NR"];
    let tv_ratings = ["TV-Y", "TV-G", "TV-PG", "TV-14", "TV-MA"];
    let adjectives = [
        "Silent", "Midnight", "Golden", "Broken", "Hidden", "Electric", "Paper", "Crimson",
    ];
    let nouns = [
        "City", "Harbor", "Garden", "Signal", "Mirror", "Kingdom", "Road", "Letter",
    ];

    let output_path = "sample_titles.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record(["title", "type", "country", "release_year", "rating", "duration"])?;

    let n_titles = 500;
    for i in 0..n_titles {
        let kind = *rng.pick(&kinds);

        // Roughly one row in eight has no country, one in twenty no
        // rating, mirroring the gaps in real catalog exports.
        let country = if rng.chance(1, 8) {
            ""
        } else {
            *rng.pick(&countries)
        };
        let rating = if rng.chance(1, 20) {
            ""
        } else if kind == "Movie" {
            *rng.pick(&movie_ratings)
        } else {
            *rng.pick(&tv_ratings)
        };

        let year = rng.range(1980, 2025);
        let title = format!(
            "The {} {} {}",
            rng.pick(&adjectives),
            rng.pick(&nouns),
            i + 1
        );
        let duration = if kind == "Movie" {
            format!("{} min", rng.range(70, 180))
        } else {
            format!("{} Seasons", rng.range(1, 9))
        };

        writer.write_record([
            title.as_str(),
            kind,
            country,
            year.to_string().as_str(),
            rating,
            duration.as_str(),
        ])?;
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {n_titles} titles to {output_path}");
    Ok(())
}
