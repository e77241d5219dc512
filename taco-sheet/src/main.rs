mod sheet;

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

const DEFAULT_OUT_DIR: &str = "src/assets";
const SEED_VAR: &str = "TACO_SEED";

fn rng_from_env() -> Result<StdRng> {
    match std::env::var(SEED_VAR) {
        Ok(seed) => {
            let seed = seed
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{SEED_VAR} must be an unsigned integer, got {seed:?}"))?;
            info!("using seed {seed}");
            Ok(StdRng::seed_from_u64(seed))
        }
        Err(_) => Ok(StdRng::from_entropy()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let mut rng = rng_from_env()?;

    sheet::swatch_sheet(&mut rng, out_dir.join("symbols.svg")).persist()?;
    sheet::palette_card(out_dir.join("card.svg")).persist()?;

    Ok(())
}
