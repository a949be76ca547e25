use regex::{Captures, Regex};
use std::borrow::Cow;

/// Player whose hole cards are kept in the converted output.
pub const HERO: &str = "Hero";

/// What a rule does with each match
#[derive(Debug, Clone)]
enum Action {
    /// Replace the match with a fixed string
    Replace(&'static str),
    /// Drop a `Dealt to <name> ` line unless `<name>` is the hero
    StripOpponentDeal,
}

/// A single global substitution over the whole text
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    name: &'static str,
    pattern: Regex,
    action: Action,
}

impl SubstitutionRule {
    fn replace(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("Invalid substitution regex"),
            action: Action::Replace(replacement),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    fn apply<'t>(&self, text: &'t str, hero: &Regex) -> Cow<'t, str> {
        match self.action {
            Action::Replace(replacement) => self
                .pattern
                .replace_all(text, regex::NoExpand(replacement)),
            Action::StripOpponentDeal => self.pattern.replace_all(text, |caps: &Captures| {
                if hero.is_match(&caps[1]) {
                    caps[0].to_string()
                } else {
                    String::new()
                }
            }),
        }
    }
}

/// Rewrites hand histories from the source room's export format into PokerStars format.
///
/// Rules run in a fixed order and each sees the output of the previous one:
///
/// 1. `Poker Hand #HD` → `PokerStars Hand #20`
/// 2. `Poker Hand #RC` → `PokerStars Hand #30`
/// 3. ` won ` → ` collected `
/// 4. ` and collected ` → ` and won ` (reverts rule 3 for that phrase)
/// 5. `\n\n` → `\n`
/// 6. `Dealt to <name> \n` removed unless `<name>` is `Hero`
///
/// This is plain text substitution. A player called `won` or `Poker Hand #HD` in a chat
/// line gets rewritten too, and running the transformer twice over its own output is
/// not a no-op (a run of three newlines only collapses one step per pass).
#[derive(Debug, Clone)]
pub struct HandHistoryTransformer {
    rules: Vec<SubstitutionRule>,

    /// Matches a dealt-to name that belongs to the hero (`Hero` then a word boundary)
    hero_pattern: Regex,
}

impl HandHistoryTransformer {
    /// Create a new transformer with compiled rule patterns
    pub fn new() -> Self {
        let rules = vec![
            SubstitutionRule::replace("hd-header", r"Poker Hand #HD", "PokerStars Hand #20"),
            SubstitutionRule::replace("rc-header", r"Poker Hand #RC", "PokerStars Hand #30"),
            SubstitutionRule::replace("won-to-collected", r" won ", " collected "),
            SubstitutionRule::replace("and-won", r" and collected ", " and won "),
            SubstitutionRule::replace("blank-lines", r"\n\n", "\n"),
            SubstitutionRule {
                name: "opponent-hole-cards",
                // regex has no lookahead, the hero check happens in the replacer
                pattern: Regex::new(r"Dealt to ([^ ]+) \n").expect("Invalid dealt-to regex"),
                action: Action::StripOpponentDeal,
            },
        ];

        Self {
            rules,
            hero_pattern: Regex::new(&format!(r"^{}\b", HERO)).expect("Invalid hero regex"),
        }
    }

    /// The rules in application order
    pub fn rules(&self) -> &[SubstitutionRule] {
        &self.rules
    }

    /// Apply every rule in order and return the converted text
    pub fn transform(&self, content: &str) -> String {
        let mut text = content.to_string();

        for rule in &self.rules {
            let rewritten = match rule.apply(&text, &self.hero_pattern) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(rewritten) => rewritten,
            };
            tracing::trace!("Rule {} rewrote content", rule.name);
            text = rewritten;
        }

        text
    }
}

impl Default for HandHistoryTransformer {
    fn default() -> Self {
        Self::new()
    }
}
