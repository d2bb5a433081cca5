use regex::Regex;
use std::sync::OnceLock;

/// How a rule inspects a trimmed platform token.
#[derive(Debug, Clone, Copy)]
enum Matcher {
    /// Any needle appears verbatim (case-sensitive).
    ContainsAny(&'static [&'static str]),
    /// The lowercase needle appears in the lowercased token.
    ContainsFolded(&'static str),
}

impl Matcher {
    fn matches(&self, token: &str) -> bool {
        match self {
            Matcher::ContainsAny(needles) => needles.iter().any(|n| token.contains(n)),
            Matcher::ContainsFolded(needle) => token.to_lowercase().contains(needle),
        }
    }
}

/// Canonical name produced once a rule matches.
#[derive(Debug, Clone, Copy)]
enum Resolution {
    Fixed(&'static str),
    /// Rental storefronts keep a separate canonical name from the subscription tier.
    RentAware {
        rent: &'static str,
        subscription: &'static str,
    },
}

impl Resolution {
    fn resolve(&self, token: &str) -> &'static str {
        match self {
            Resolution::Fixed(name) => name,
            Resolution::RentAware { rent, subscription } => {
                if token.contains("Rent") {
                    rent
                } else {
                    subscription
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PlatformRule {
    matcher: Matcher,
    resolution: Resolution,
}

/// Ordered rule table; the first matching entry wins.
const PLATFORM_RULES: &[PlatformRule] = &[
    PlatformRule {
        matcher: Matcher::ContainsAny(&["Prime", "Amazon"]),
        resolution: Resolution::RentAware {
            rent: "Prime Video (Rent)",
            subscription: "Prime Video",
        },
    },
    PlatformRule {
        matcher: Matcher::ContainsAny(&["Aha"]),
        resolution: Resolution::Fixed("Aha"),
    },
    PlatformRule {
        matcher: Matcher::ContainsAny(&["Hungama"]),
        resolution: Resolution::Fixed("Hungama"),
    },
    // JioCinema merged into JioHotstar; listings still say "Jio".
    PlatformRule {
        matcher: Matcher::ContainsAny(&["Jio"]),
        resolution: Resolution::Fixed("Hotstar"),
    },
    PlatformRule {
        matcher: Matcher::ContainsFolded("sony"),
        resolution: Resolution::Fixed("Sony LIV"),
    },
    PlatformRule {
        matcher: Matcher::ContainsFolded("zee"),
        resolution: Resolution::Fixed("ZEE5"),
    },
];

/// Map a single raw platform token onto its canonical name.
///
/// The token is trimmed first. Blank input yields an empty string, which
/// callers drop from token lists. Tokens no rule recognises come back trimmed
/// but otherwise untouched, so new platforms show up under their own label.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    PLATFORM_RULES
        .iter()
        .find(|rule| rule.matcher.matches(trimmed))
        .map(|rule| rule.resolution.resolve(trimmed).to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

fn separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r",|\s&\s|\sand\s").expect("static separator pattern"))
}

/// Split a multi-valued platform field ("Netflix, Prime Video", "Aha & Zee5",
/// "Jio Cinema and Zee5") into raw, un-normalized pieces.
pub fn split_tokens(field: &str) -> impl Iterator<Item = &str> {
    separator().split(field)
}

/// Split, normalize and drop empty names. An absent field yields no names.
///
/// Order follows the raw field; duplicates are kept so that a record listing
/// the same platform twice counts twice.
pub fn tokenize(field: Option<&str>) -> Vec<String> {
    let Some(field) = field else {
        return Vec::new();
    };
    split_tokens(field)
        .map(normalize)
        .filter(|name| !name.is_empty())
        .collect()
}
