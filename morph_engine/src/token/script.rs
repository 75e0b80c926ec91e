use log::warn;

use super::TokenContext;
use crate::script::{SCRIPT_ERROR_MARKER, ScriptBindings, ScriptRef};

/// `{@script|name}` / `{@inline|code}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptToken {
    /// `None` when the token carried no data.
    pub script: Option<ScriptRef>,
}

impl ScriptToken {
    pub fn named(data: Option<&str>) -> ScriptToken {
        ScriptToken {
            script: data.map(|d| ScriptRef::Named(d.trim().to_string())),
        }
    }

    pub fn inline(data: Option<&str>) -> ScriptToken {
        ScriptToken {
            script: data.map(|d| ScriptRef::Inline(d.to_string())),
        }
    }

    pub fn text(&self, ctx: &TokenContext<'_>) -> String {
        let Some(script) = &self.script else {
            warn!("script token without a script");
            return SCRIPT_ERROR_MARKER.to_string();
        };
        let Some(component) = ctx.component else {
            warn!("script token {script:?} used without a body part in context");
            return SCRIPT_ERROR_MARKER.to_string();
        };
        let Some(evaluator) = ctx.scripts else {
            warn!("script token {script:?} used but no script evaluator is installed");
            return SCRIPT_ERROR_MARKER.to_string();
        };
        let bindings = ScriptBindings {
            character: ctx.character,
            appearance: ctx.appearance,
            component,
        };
        evaluator.evaluate(script, &bindings).unwrap_or_else(|e| {
            warn!("script token {script:?} failed: {e}");
            SCRIPT_ERROR_MARKER.to_string()
        })
    }
}
