use std::error::Error;

use log::info;
use rand::thread_rng;

use slide_seed::generator::{Generator, NUM_RECORDS, OUTPUT_FILE};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut generator = Generator::default();
    generator.generate(NUM_RECORDS, &mut thread_rng());
    generator.write_to_path(OUTPUT_FILE)?;
    info!("done: {} rows in {}", NUM_RECORDS, OUTPUT_FILE);

    Ok(())
}
