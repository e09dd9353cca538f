use rand::Rng;
use std::num::{IntErrorKind, NonZeroUsize};
use std::str::FromStr;
use crate::error::{Result, UsernameError};
use crate::words::WordLists;

/// Anything that can pick a uniform index in `[0, len)`.
///
/// Every `rand::Rng` is one; tests swap in scripted sources to pin exact picks.
pub trait IndexSource {
    fn index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Upper bound on the length of a generated name, in characters. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaxSize(NonZeroUsize);

impl MaxSize {
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size)
            .map(MaxSize)
            .ok_or_else(UsernameError::invalid_max_size)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for MaxSize {
    type Error = UsernameError;

    fn try_from(size: usize) -> Result<Self> {
        MaxSize::new(size)
    }
}

impl TryFrom<u64> for MaxSize {
    type Error = UsernameError;

    fn try_from(size: u64) -> Result<Self> {
        MaxSize::new(usize::try_from(size).unwrap_or(usize::MAX))
    }
}

impl TryFrom<u32> for MaxSize {
    type Error = UsernameError;

    fn try_from(size: u32) -> Result<Self> {
        MaxSize::try_from(u64::from(size))
    }
}

impl TryFrom<i64> for MaxSize {
    type Error = UsernameError;

    fn try_from(size: i64) -> Result<Self> {
        let size = u64::try_from(size).map_err(|_| UsernameError::invalid_max_size())?;
        MaxSize::try_from(size)
    }
}

impl TryFrom<i32> for MaxSize {
    type Error = UsernameError;

    fn try_from(size: i32) -> Result<Self> {
        MaxSize::try_from(i64::from(size))
    }
}

impl FromStr for MaxSize {
    type Err = UsernameError;

    /// Positive integers too large for `usize` saturate, which never truncates.
    fn from_str(s: &str) -> Result<Self> {
        let size = match s.trim().parse::<usize>() {
            Ok(size) => size,
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => usize::MAX,
            Err(_) => return Err(UsernameError::invalid_max_size()),
        };
        MaxSize::new(size)
    }
}

impl TryFrom<&str> for MaxSize {
    type Error = UsernameError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

/// Builds names from a [`WordLists`] bundle.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    words: WordLists,
}

impl Generator {
    pub fn new(words: WordLists) -> Self {
        Generator { words }
    }

    pub fn words(&self) -> &WordLists {
        &self.words
    }

    /// Generate one name such as "CuteRedWalrus".
    ///
    /// Draws noun, then descriptor, then color. Without a `max_size` the full
    /// three-part name is returned regardless of length.
    pub fn generate<R: IndexSource + ?Sized>(
        &self,
        rng: &mut R,
        max_size: Option<MaxSize>,
    ) -> Result<String> {
        let noun = self.random_noun(rng)?;
        let descriptor = self.random_descriptor(rng, noun).unwrap_or_default();
        let color = self.random_color(rng)?;

        let descriptor = format(descriptor);
        let color = format(color);
        let noun = format(noun);

        Ok(match max_size {
            Some(max) => combine_username(max.get(), &descriptor, &color, &noun),
            None => format!("{}{}{}", descriptor, color, noun),
        })
    }

    /// Like [`Generator::generate`], but validates a raw `max_size` first.
    /// An invalid value fails before anything is drawn from `rng`.
    pub fn generate_checked<R, M>(&self, rng: &mut R, max_size: M) -> Result<String>
    where
        R: IndexSource + ?Sized,
        M: TryInto<MaxSize, Error = UsernameError>,
    {
        let max_size = max_size.try_into()?;
        self.generate(rng, Some(max_size))
    }

    pub fn generate_many<R: IndexSource + ?Sized>(
        &self,
        rng: &mut R,
        max_size: Option<MaxSize>,
        count: usize,
    ) -> Result<Vec<String>> {
        (0..count).map(|_| self.generate(rng, max_size)).collect()
    }

    /// One draw over sea objects followed by sea creatures.
    pub fn random_noun<R: IndexSource + ?Sized>(&self, rng: &mut R) -> Result<&str> {
        let objects = &self.words.sea_objects;
        let creatures = &self.words.sea_creatures;
        let total = objects.len() + creatures.len();
        if total == 0 {
            return Err(UsernameError::EmptyWordList("sea nouns"));
        }
        let i = rng.index(total);
        let noun = match objects.get(i) {
            Some(object) => object,
            None => &creatures[i - objects.len()],
        };
        Ok(noun.as_str())
    }

    /// Creatures prefer creature descriptors when there are any.
    /// Returns `None` without drawing when the resolved pool is empty.
    pub fn random_descriptor<R: IndexSource + ?Sized>(
        &self,
        rng: &mut R,
        noun: &str,
    ) -> Option<&str> {
        let pool = if self.is_creature(noun) && !self.words.creature_descriptors.is_empty() {
            &self.words.creature_descriptors
        } else {
            &self.words.descriptors
        };
        pick(rng, pool)
    }

    pub fn random_color<R: IndexSource + ?Sized>(&self, rng: &mut R) -> Result<&str> {
        pick(rng, &self.words.colors).ok_or(UsernameError::EmptyWordList("colors"))
    }

    fn is_creature(&self, noun: &str) -> bool {
        self.words.sea_creatures.iter().any(|c| c == noun)
    }
}

fn pick<'a, R: IndexSource + ?Sized>(rng: &mut R, pool: &'a [String]) -> Option<&'a str> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.index(pool.len())].as_str())
}

/// Uppercase the first character, leave the rest alone.
pub fn format(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Fit the parts into `max_size` characters.
///
/// Whole parts are dropped (descriptor+color+noun, descriptor+noun, color+noun,
/// noun) before the noun alone is cut down to `max_size`.
pub fn combine_username(max_size: usize, descriptor: &str, color: &str, noun: &str) -> String {
    let candidates = [
        format!("{}{}{}", descriptor, color, noun),
        format!("{}{}", descriptor, noun),
        format!("{}{}", color, noun),
    ];
    if let Some(fit) = candidates
        .into_iter()
        .find(|c| c.chars().count() <= max_size)
    {
        return fit;
    }
    noun.chars().take(max_size).collect()
}

/// A name from the built-in lists with no size limit.
pub fn generate() -> String {
    Generator::default()
        .generate(&mut rand::thread_rng(), None)
        .expect("built-in word lists are non-empty")
}

/// A name from the built-in lists that fits in `max_size` characters.
///
/// `max_size` is checked before any randomness is drawn.
pub fn generate_with_max_size<M>(max_size: M) -> Result<String>
where
    M: TryInto<MaxSize, Error = UsernameError>,
{
    Generator::default().generate_checked(&mut rand::thread_rng(), max_size)
}
