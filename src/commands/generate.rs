use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sea_username::error::Result;
use sea_username::format;
use sea_username::names::{Generator, MaxSize};
use sea_username::words::{self, WordLists};
use crate::cli::GenerateArgs;

pub fn run(args: &GenerateArgs) -> Result<()> {
    // Validate before touching the word file or the RNG
    let max_size = args
        .max_size
        .as_deref()
        .map(str::parse::<MaxSize>)
        .transpose()?;

    let words = match &args.words {
        Some(path) => words::read_word_lists(path)?,
        None => WordLists::default(),
    };
    let generator = Generator::new(words);
    let count = args.count as usize;

    let names = match args.seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            generator.generate_many(&mut rng, max_size, count)?
        }
        None => generator.generate_many(&mut rand::thread_rng(), max_size, count)?,
    };

    println!("{}", format::format_names(&names, args.json)?);
    Ok(())
}
