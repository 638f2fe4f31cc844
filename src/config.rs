use std::env;

use anyhow::Result;
use tracing::warn;

use crate::keywords;
use crate::readtime;
use crate::scoring::sentence::{Mode, SelectionRatios};
use crate::summarize::SummaryConfig;
use crate::text::stopwords::StopwordSet;

/// Input word cap applied by the CLI before summarizing. Keeps scoring
/// proportional on pasted dumps; 0 disables the cap entirely.
pub const DEFAULT_MAX_WORDS: usize = 2000;

/// Which stopword list the frequency model uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopwordSource {
    /// Small builtin list (default) tuned for short prose.
    #[default]
    Builtin,
    /// Full English list from the stop-words crate.
    English,
    /// No filtering at all.
    None,
}

impl StopwordSource {
    fn from_env() -> Self {
        match env::var("BREVITY_STOPWORDS").as_deref() {
            Ok("english") => StopwordSource::English,
            Ok("none") => StopwordSource::None,
            // "builtin" or unset both mean the builtin list
            _ => StopwordSource::Builtin,
        }
    }

    /// Materialize the list this source names.
    pub fn stopwords(&self) -> StopwordSet {
        match self {
            StopwordSource::Builtin => StopwordSet::builtin(),
            StopwordSource::English => StopwordSet::english(),
            StopwordSource::None => StopwordSet::none(),
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// Every variable is optional and falls back to a default; malformed
/// values are logged and ignored rather than failing startup. The .env
/// file is loaded automatically at startup via dotenvy, and CLI flags
/// override whatever the environment provides.
pub struct Config {
    /// Summary length mode (BREVITY_MODE: short|medium|long).
    pub mode: Mode,
    /// Reading speed in words per minute (BREVITY_WPM).
    pub wpm: u32,
    /// How many keywords to extract (BREVITY_KEYWORDS).
    pub keyword_limit: usize,
    /// Which stopword list to use (BREVITY_STOPWORDS: builtin|english|none).
    pub stopword_source: StopwordSource,
    /// Input word cap before summarizing (BREVITY_MAX_WORDS, 0 = uncapped).
    pub max_words: usize,
    /// Minimum token length for frequency counting (BREVITY_MIN_TOKEN_LEN).
    pub min_token_len: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let mode = match env::var("BREVITY_MODE") {
            Ok(name) => Mode::from_name(&name),
            Err(_) => Mode::default(),
        };

        let mut wpm = env_number("BREVITY_WPM", readtime::DEFAULT_WPM);
        if wpm == 0 {
            warn!(
                "BREVITY_WPM=0 would zero every estimate, using {}",
                readtime::DEFAULT_WPM
            );
            wpm = readtime::DEFAULT_WPM;
        }

        Ok(Self {
            mode,
            wpm,
            keyword_limit: env_number("BREVITY_KEYWORDS", keywords::DEFAULT_KEYWORD_LIMIT),
            stopword_source: StopwordSource::from_env(),
            max_words: env_number("BREVITY_MAX_WORDS", DEFAULT_MAX_WORDS),
            min_token_len: env_number("BREVITY_MIN_TOKEN_LEN", 0),
        })
    }

    /// The library-level request config this environment describes.
    pub fn summary_config(&self) -> SummaryConfig {
        SummaryConfig {
            mode: self.mode,
            keyword_limit: self.keyword_limit,
            wpm: self.wpm,
            stopwords: self.stopword_source.stopwords(),
            min_token_len: self.min_token_len,
            ratios: SelectionRatios::default(),
        }
    }
}

fn env_number<T>(name: &str, default: T) -> T
where
    T: Copy + std::str::FromStr + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("Ignoring {name}='{raw}': not a number, using {default}");
                default
            }
        },
        Err(_) => default,
    }
}
