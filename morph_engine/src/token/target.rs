use super::TokenContext;

/// `{@target}`: who the narration is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetToken {
    pub full_name: bool,
}

impl TargetToken {
    pub fn from_data(data: Option<&str>) -> TargetToken {
        TargetToken {
            full_name: data.is_some_and(|d| d.trim().eq_ignore_ascii_case("name")),
        }
    }

    pub fn text(&self, ctx: &TokenContext<'_>) -> String {
        if self.full_name {
            ctx.character.name.clone()
        } else {
            ctx.character.display_name().to_string()
        }
    }
}
