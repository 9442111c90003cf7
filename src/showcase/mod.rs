//! Showcase pages - a portfolio-styled deck that exercises the engine

mod deck;
mod fit_demo;

pub use deck::Deck;
pub use fit_demo::FitDemo;

use rand::SeedableRng;
use rand::rngs::SmallRng;

pub fn fresh_rng() -> SmallRng {
    let mut buf = [0u8; 32];
    getrandom::fill(&mut buf).expect("getrandom");
    SmallRng::from_seed(buf)
}
