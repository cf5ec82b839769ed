use serde::{Deserialize, Serialize};

use crate::models::VodRecord;

/// Substitution values for the title/description templates, one set per VOD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateArgs {
    pub tournament_name: String,
    pub tournament_short: String,
    pub tournament_link: String,
    pub event_name: String,
    pub phase_name: String,
    pub round_full: String,
    pub round_short: String,
    pub game: String,
    pub player1: String,
    pub player2: String,
    pub player1_chars: String,
    pub player2_chars: String,
}

impl TemplateArgs {
    /// Tokens in substitution order. Longer tokens sharing a prefix come
    /// first so `%TournamentShort` is never clobbered by `%Tournament` and
    /// `%P1Chars` is never clobbered by `%P1`.
    fn tokens(&self) -> [(&'static str, &str); 12] {
        [
            ("%TournamentShort", &self.tournament_short),
            ("%Tournament", &self.tournament_name),
            ("%Link", &self.tournament_link),
            ("%Event", &self.event_name),
            ("%Phase", &self.phase_name),
            ("%RoundFull", &self.round_full),
            ("%RoundShort", &self.round_short),
            ("%Game", &self.game),
            ("%P1Chars", &self.player1_chars),
            ("%P2Chars", &self.player2_chars),
            ("%P1", &self.player1),
            ("%P2", &self.player2),
        ]
    }
}

/// Render a template by substituting `%Token` placeholders and collapsing
/// runs of spaces left behind by empty values. Newlines are preserved, so
/// multi-line description templates keep their layout.
pub fn render(template: &str, args: &TemplateArgs) -> String {
    let mut out = template.to_string();
    for (token, value) in args.tokens() {
        out = out.replace(token, value);
    }
    collapse_spaces(&out)
}

impl VodRecord {
    /// Build a record by rendering both templates with the same args.
    pub fn from_templates(
        title_template: &str,
        description_template: &str,
        args: &TemplateArgs,
    ) -> Self {
        Self {
            title: render(title_template, args),
            description: render(description_template, args),
        }
    }
}

/// Collapse each run of consecutive spaces to a single space.
fn collapse_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for c in s.chars() {
        if c == ' ' {
            if !prev_space {
                out.push(c);
            }
            prev_space = true;
        } else {
            out.push(c);
            prev_space = false;
        }
    }
    out
}
