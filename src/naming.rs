//! Place-name synthesis from a five-category token grammar.
//!
//! One token is drawn uniformly from each category, then one of four
//! templates combines them. Repeats across calls are expected.

use rand::Rng;

// ============================================================================
// TOKEN TABLES
// ============================================================================

const PREFIXES: &[&str] = &[
    "Santa", "White", "Pier", "Iris", "Lake", "Castle", "Garden", "County",
    "Forest", "Woody", "Valley", "Barb", "Maze", "St.", "Mountain", "Farm",
    "Gold", "Sunny", "Rainy", "University", "Breaking", "Avenue",
    "Dome", "Den",
];

const SUFFIXES: &[&str] = &[
    "dale", "tale", "burrow", "alley", "camp", "ville", "day", "ton",
    "land", "dooms", "sand", "glass",
];

const ADJECTIVES: &[&str] = &[
    "Brave", "Moral", "River", "Shiny", "Viente", "Freezing",
    "Warm", "Droopy", "Musty", "Clear", "Grumpy", "Smiley", "Valorant", "Academic",
    "Smart", "Fit", "Hilly", "Cheesy", "Radiant", "Crusty",
    "Loopy", "Hard", "Dirty", "Twisted", "Wicked", "Evil", "Lovely",
    "Sweet", "Sour", "Drainy",
];

const PLACES: &[&str] = &["Castle", "Hill", "Rock", "Town", "Road"];

const NAMES: &[&str] = &[
    "River", "Townsend", "York", "Finger", "Bridger", "Pendle", "Feathering", "Vegas",
];

/// The token tables names are built from. Immutable once built; pass it by
/// reference to [`generate`].
#[derive(Clone, Debug, PartialEq)]
pub struct Grammar {
    pub prefix: Vec<String>,
    pub suffix: Vec<String>,
    pub adjective: Vec<String>,
    pub place: Vec<String>,
    pub name: Vec<String>,
}

impl Grammar {
    pub fn from_tables(
        prefix: &[&str],
        suffix: &[&str],
        adjective: &[&str],
        place: &[&str],
        name: &[&str],
    ) -> Self {
        let owned = |table: &[&str]| -> Vec<String> { table.iter().map(|s| s.to_string()).collect() };
        Self {
            prefix: owned(prefix),
            suffix: owned(suffix),
            adjective: owned(adjective),
            place: owned(place),
            name: owned(name),
        }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::from_tables(PREFIXES, SUFFIXES, ADJECTIVES, PLACES, NAMES)
    }
}

// ============================================================================
// TEMPLATES
// ============================================================================

/// How the drawn tokens are combined into a name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameFormat {
    /// "Goldville"
    PrefixSuffix,
    /// "Lake Vegas"
    PrefixName,
    /// "Grumpy Hill"
    AdjectivePlace,
    /// "Yorkdale"
    NameSuffix,
}

impl NameFormat {
    pub fn all() -> &'static [NameFormat] {
        &[
            NameFormat::PrefixSuffix,
            NameFormat::PrefixName,
            NameFormat::AdjectivePlace,
            NameFormat::NameSuffix,
        ]
    }

    pub fn apply(&self, tokens: &Tokens) -> String {
        match self {
            NameFormat::PrefixSuffix => format!("{}{}", tokens.prefix, tokens.suffix),
            NameFormat::PrefixName => format!("{} {}", tokens.prefix, tokens.name),
            NameFormat::AdjectivePlace => format!("{} {}", tokens.adjective, tokens.place),
            NameFormat::NameSuffix => format!("{}{}", tokens.name, tokens.suffix),
        }
    }
}

/// One draw from every category.
#[derive(Clone, Copy, Debug)]
pub struct Tokens<'a> {
    pub prefix: &'a str,
    pub suffix: &'a str,
    pub adjective: &'a str,
    pub place: &'a str,
    pub name: &'a str,
}

impl<'a> Tokens<'a> {
    pub fn draw(grammar: &'a Grammar, rng: &mut impl Rng) -> Self {
        Self {
            prefix: pick(&grammar.prefix, rng),
            suffix: pick(&grammar.suffix, rng),
            adjective: pick(&grammar.adjective, rng),
            place: pick(&grammar.place, rng),
            name: pick(&grammar.name, rng),
        }
    }
}

/// Uniform choice from a table; an empty table contributes an empty token.
fn pick<'a>(table: &'a [String], rng: &mut impl Rng) -> &'a str {
    if table.is_empty() {
        return "";
    }
    &table[rng.gen_range(0..table.len())]
}

/// Generate a place name (e.g. "Goldville", "Lake Vegas", "Grumpy Hill").
pub fn generate(rng: &mut impl Rng, grammar: &Grammar) -> String {
    let tokens = Tokens::draw(grammar, rng);
    let formats = NameFormat::all();
    formats[rng.gen_range(0..formats.len())].apply(&tokens)
}
