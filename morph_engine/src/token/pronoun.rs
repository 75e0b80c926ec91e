//! Pronoun tokens.

use super::TokenContext;
use crate::character::PronounForm;

/// `{@pronoun|form[+verb]}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PronounToken {
    pub form: PronounForm,
    pub with_verb: bool,
}

impl PronounToken {
    /// Unrecognized forms render the subject pronoun.
    pub fn from_data(data: Option<&str>) -> PronounToken {
        let request = data.unwrap_or("").trim().to_lowercase();
        let (form, suffix) = request.split_once('+').unwrap_or((request.as_str(), ""));
        let with_verb = suffix.trim() == "verb";
        let form = match form.trim() {
            "object" | "objective" => PronounForm::Object,
            "adjective" | "adj" | "possessive-adjective" | "determiner" => PronounForm::PossessiveAdjective,
            "possessive" | "possessive-noun" | "noun" => PronounForm::Possessive,
            "reflexive" => PronounForm::Reflexive,
            _ => PronounForm::Subject,
        };
        PronounToken { form, with_verb }
    }

    pub fn text(&self, ctx: &TokenContext<'_>) -> String {
        ctx.character.pronouns().form(self.form, self.with_verb)
    }
}

/// Which shape of possessive an `{@its}` token renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PossessiveToken {
    /// "hers"
    Plain,
    /// "her"
    Adjective,
    /// "hers is"
    Verb,
}

impl PossessiveToken {
    pub fn from_data(data: Option<&str>) -> PossessiveToken {
        match data.map(|d| d.trim().to_lowercase()).as_deref() {
            Some("adjective" | "adj") => PossessiveToken::Adjective,
            Some("verb") => PossessiveToken::Verb,
            _ => PossessiveToken::Plain,
        }
    }

    pub fn text(&self, ctx: &TokenContext<'_>) -> String {
        let pronouns = ctx.character.pronouns();
        match self {
            PossessiveToken::Plain => pronouns.form(PronounForm::Possessive, false),
            PossessiveToken::Adjective => pronouns.form(PronounForm::PossessiveAdjective, false),
            PossessiveToken::Verb => pronouns.form(PronounForm::Possessive, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forms_and_verbs_parse() {
        let token = PronounToken::from_data(Some("Possessive+verb"));
        assert_eq!(token.form, PronounForm::Possessive);
        assert!(token.with_verb);

        let token = PronounToken::from_data(Some("subject+verb"));
        assert_eq!(token.form, PronounForm::Subject);
        assert!(token.with_verb);

        assert_eq!(PronounToken::from_data(Some("reflexive")).form, PronounForm::Reflexive);
        assert_eq!(PronounToken::from_data(None).form, PronounForm::Subject);
        assert!(!PronounToken::from_data(Some("object")).with_verb);
    }

    #[test]
    fn possessive_variants() {
        assert_eq!(PossessiveToken::from_data(Some("adj")), PossessiveToken::Adjective);
        assert_eq!(PossessiveToken::from_data(Some("VERB")), PossessiveToken::Verb);
        assert_eq!(PossessiveToken::from_data(None), PossessiveToken::Plain);
    }
}
