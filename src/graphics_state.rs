//! graphics_state.rs
//!
//! The graphics-state block and its stack. `q` pushes a copy, `Q` pops
//! (underflow is logged, not fatal), `gs` merges the non-empty fields of a
//! named ExtGState into the current state.

use crate::object::{Dictionary, Object};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphicsState {
    /// Current transformation matrix, `[a b c d e f]`
    pub ctm: Option<[f64; 6]>,
    pub line_width: Option<f64>,
    pub line_cap: Option<i64>,
    pub line_join: Option<i64>,
    pub miter_limit: Option<f64>,
    /// Dash array and phase
    pub dash: Option<(Vec<f64>, f64)>,
    pub rendering_intent: Option<String>,
    pub flatness: Option<f64>,

    // text state
    /// `(resource name, size)` set by `Tf`
    pub font: Option<(String, f64)>,
    pub char_spacing: Option<f64>,
    pub word_spacing: Option<f64>,
    pub horizontal_scaling: Option<f64>,
    pub leading: Option<f64>,
    pub render_mode: Option<i64>,
    pub rise: Option<f64>,
}

impl GraphicsState {
    pub fn font_name(&self) -> Option<&str> {
        self.font.as_ref().map(|(name, _)| name.as_str())
    }

    pub fn font_size(&self) -> Option<f64> {
        self.font.as_ref().map(|(_, size)| *size)
    }

    /// Overlays every field `other` actually carries.
    pub fn update(&mut self, other: &GraphicsState) {
        macro_rules! merge {
            ($($field:ident),*) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field.clone();
                })*
            };
        }
        merge!(
            ctm, line_width, line_cap, line_join, miter_limit, dash, rendering_intent,
            flatness, font, char_spacing, word_spacing, horizontal_scaling, leading,
            render_mode, rise
        );
    }

    /// Graphics-state fields of an ExtGState parameter dictionary. The
    /// `Font` entry is a font reference, not a resource name, and is not
    /// carried here.
    pub fn from_ext_g_state(dict: &Dictionary) -> GraphicsState {
        let mut state = GraphicsState::default();
        state.line_width = dict.get_f64("LW");
        state.line_cap = dict.get_i64("LC");
        state.line_join = dict.get_i64("LJ");
        state.miter_limit = dict.get_f64("ML");
        state.rendering_intent = dict.get_name("RI").map(str::to_string);
        state.flatness = dict.get_f64("FL");
        if let Some(items) = dict.get_array("D") {
            // [[dash array] phase]
            if let (Some(Object::Array(pattern)), Some(phase)) =
                (items.first(), items.get(1).and_then(Object::as_f64))
            {
                let pattern = pattern.iter().filter_map(Object::as_f64).collect();
                state.dash = Some((pattern, phase));
            }
        }
        if dict.has("Font") {
            log::debug!("ExtGState Font entry is not applied (needs a font reference)");
        }
        state
    }
}

#[derive(Debug, Clone, Default)]
pub struct GraphicsStateStack(Vec<GraphicsState>);

impl GraphicsStateStack {
    pub fn new() -> Self {
        GraphicsStateStack::default()
    }

    /// `q` — a deep copy of the top goes on the stack.
    pub fn save_state(&mut self) {
        let top = self.state().clone();
        self.0.push(top);
    }

    /// `Q` — pop; underflow is logged, not fatal.
    pub fn restore_state(&mut self) {
        if self.0.pop().is_none() {
            log::debug!("cannot restore an empty graphics state stack");
        }
    }

    /// The top of the stack, created empty when the stack is.
    pub fn state(&mut self) -> &mut GraphicsState {
        if self.0.is_empty() {
            self.0.push(GraphicsState::default());
        }
        self.0.last_mut().expect("just pushed")
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}
