use std::path::Path;
use sea_username::error::{Result, UsernameError};
use sea_username::words;

pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(UsernameError::Other(format!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        )));
    }
    words::write_default_word_lists(path)?;
    println!("Wrote word lists to {}", path.display());
    Ok(())
}
