//! Writes a synthetic clustered song table to the dashboard's artifact path
//! (`reports/amazon_music_clusters.csv`) so the dashboard can be tried without
//! the clustering notebook.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

#[path = "../paths.rs"]
mod paths;

use paths::ARTIFACT_PATH;

const SONGS_PER_CLUSTER: [usize; 4] = [140, 90, 60, 30];

/// One output row, in the column order the dashboard expects.
#[derive(Debug, Serialize)]
struct SampleSong {
    cluster: usize,
    name_song: String,
    name_artists: String,
    danceability: f64,
    energy: f64,
    loudness: f64,
    speechiness: f64,
    acousticness: f64,
    instrumentalness: f64,
    liveness: f64,
    valence: f64,
    tempo: f64,
    duration_ms: i64,
    pc1: f64,
    pc2: f64,
}

/// Centre of a cluster in feature space and in the 2-D projection.
struct Profile {
    label: &'static str,
    danceability: f64,
    energy: f64,
    loudness: f64,
    speechiness: f64,
    acousticness: f64,
    instrumentalness: f64,
    valence: f64,
    tempo: f64,
    duration_s: f64,
    centre: (f64, f64),
}

const PROFILES: [Profile; 4] = [
    Profile {
        label: "Party",
        danceability: 0.78,
        energy: 0.80,
        loudness: -5.0,
        speechiness: 0.08,
        acousticness: 0.08,
        instrumentalness: 0.02,
        valence: 0.70,
        tempo: 124.0,
        duration_s: 205.0,
        centre: (2.0, 1.0),
    },
    Profile {
        label: "Acoustic",
        danceability: 0.45,
        energy: 0.30,
        loudness: -12.0,
        speechiness: 0.04,
        acousticness: 0.82,
        instrumentalness: 0.10,
        valence: 0.40,
        tempo: 98.0,
        duration_s: 230.0,
        centre: (-2.2, 0.6),
    },
    Profile {
        label: "Rap",
        danceability: 0.82,
        energy: 0.65,
        loudness: -6.5,
        speechiness: 0.32,
        acousticness: 0.15,
        instrumentalness: 0.01,
        valence: 0.50,
        tempo: 95.0,
        duration_s: 190.0,
        centre: (0.8, -2.0),
    },
    Profile {
        label: "Ambient",
        danceability: 0.30,
        energy: 0.25,
        loudness: -18.0,
        speechiness: 0.03,
        acousticness: 0.60,
        instrumentalness: 0.85,
        valence: 0.15,
        tempo: 80.0,
        duration_s: 320.0,
        centre: (-1.0, -2.6),
    },
];

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

    /// Normal sample clamped to the unit interval.
    fn unit(&mut self, mean: f64, std_dev: f64) -> f64 {
        self.gauss(mean, std_dev).clamp(0.0, 1.0)
    }
}

fn sample_song(rng: &mut SimpleRng, cluster: usize, index: usize) -> SampleSong {
    let p = &PROFILES[cluster];
    SampleSong {
        cluster,
        name_song: format!("{} Track {:03}", p.label, index + 1),
        name_artists: format!("Artist {}", (rng.next_u64() % 40) + 1),
        danceability: rng.unit(p.danceability, 0.08),
        energy: rng.unit(p.energy, 0.08),
        loudness: rng.gauss(p.loudness, 1.5).min(0.0),
        speechiness: rng.unit(p.speechiness, 0.03),
        acousticness: rng.unit(p.acousticness, 0.10),
        instrumentalness: rng.unit(p.instrumentalness, 0.05),
        liveness: rng.unit(0.18, 0.08),
        valence: rng.unit(p.valence, 0.10),
        tempo: rng.gauss(p.tempo, 8.0).max(40.0),
        duration_ms: (rng.gauss(p.duration_s, 25.0).max(60.0) * 1000.0) as i64,
        pc1: rng.gauss(p.centre.0, 0.55),
        pc2: rng.gauss(p.centre.1, 0.55),
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output = Path::new(ARTIFACT_PATH);

    if let Some(dir) = output.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let mut writer = csv::Writer::from_path(output).context("creating output CSV")?;

    // Interleave clusters so dataset order differs from cluster order.
    let mut written = vec![0usize; PROFILES.len()];
    let mut total = 0;
    while written.iter().zip(SONGS_PER_CLUSTER).any(|(&w, n)| w < n) {
        let cluster = (rng.next_u64() % PROFILES.len() as u64) as usize;
        if written[cluster] == SONGS_PER_CLUSTER[cluster] {
            continue;
        }
        writer
            .serialize(sample_song(&mut rng, cluster, written[cluster]))
            .context("writing CSV row")?;
        written[cluster] += 1;
        total += 1;
    }
    writer.flush().context("flushing output CSV")?;

    println!("Wrote {total} songs in {} clusters to {ARTIFACT_PATH}", PROFILES.len());
    Ok(())
}
