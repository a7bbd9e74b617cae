use anyhow::{Context, Result};

/// Messages stuffed with trigger words at varying densities.
const SPAMMY: [&str; 8] = [
    "Click now to claim your FREE jackpot prize",
    "You have WON a bonus vacation, claim today",
    "Free gift offer, click to win big",
    "Limited offer: win a free bonus now",
    "Congratulations! Claim your gift and jackpot bonus",
    "Win won free claim click offer",
    "Exclusive vacation offer just for you, click to claim",
    "Your free bonus gift is waiting",
];

/// Ordinary messages, mostly trigger-free.
const BENIGN: [&str; 10] = [
    "Are we still on for lunch tomorrow?",
    "The meeting moved to 3pm, see you there",
    "Happy birthday! Hope you have a great day",
    "Can you send me the report when you get a chance",
    "Winter wonderland photos from the trip attached",
    "Don't forget to pick up milk on the way home",
    "The package was delivered this morning",
    "Thanks again for the help yesterday",
    "Let's catch up this weekend",
    "Your appointment is confirmed for Friday",
];

const SOURCES: [&str; 3] = ["sms", "email", "web"];

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

    fn pick(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut writer =
        csv::Writer::from_path("spam_dataset.csv").context("creating spam_dataset.csv")?;
    writer.write_record(["id", "text", "source"])?;

    let n_rows = 200;
    for i in 0..n_rows {
        let roll = rng.pick(10);
        // ~10% empty cells, ~30% spammy, the rest benign.
        let text = if roll == 0 {
            ""
        } else if roll <= 3 {
            SPAMMY[rng.pick(SPAMMY.len())]
        } else {
            BENIGN[rng.pick(BENIGN.len())]
        };
        let source = SOURCES[rng.pick(SOURCES.len())];

        let id = (i + 1).to_string();
        writer.write_record([id.as_str(), text, source])?;
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote spam_dataset.csv with {n_rows} rows");
    Ok(())
}
