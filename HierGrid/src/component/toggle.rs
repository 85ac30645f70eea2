//! Expand/collapse-all toggle

use serde::Serialize;

/// Visual emphasis of the toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ButtonVariant {
    Brand,
    Neutral,
}

impl ButtonVariant {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brand => "Brand",
            Self::Neutral => "Neutral",
        }
    }
}

/// The action the next click performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ExpandState {
    #[default]
    ExpandAll,
    CollapseAll,
}

impl ExpandState {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::ExpandAll => "Expand All",
            Self::CollapseAll => "Collapse All",
        }
    }

    #[must_use]
    pub fn variant(self) -> ButtonVariant {
        match self {
            Self::ExpandAll => ButtonVariant::Brand,
            Self::CollapseAll => ButtonVariant::Neutral,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::ExpandAll => Self::CollapseAll,
            Self::CollapseAll => Self::ExpandAll,
        }
    }
}

/// Whatever displays the forest and can open or close every row at once
pub trait TreeSurface {
    fn expand_all(&mut self);
    fn collapse_all(&mut self);
}

/// Button state for expanding or collapsing every row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpandToggle {
    state: ExpandState,
}

impl ExpandToggle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ExpandState {
        self.state
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.state.message()
    }

    /// Button label, e.g. "Click Here to Expand All Rows"
    #[must_use]
    pub fn label(&self) -> String {
        format!("Click Here to {} Rows", self.state.message())
    }

    #[must_use]
    pub fn variant(&self) -> ButtonVariant {
        self.state.variant()
    }

    /// Apply the pending action to `surface` and flip.
    ///
    /// Without a surface nothing happens and `false` is returned.
    pub fn toggle(&mut self, surface: Option<&mut dyn TreeSurface>) -> bool {
        let Some(surface) = surface else {
            tracing::debug!("No tree surface attached, ignoring toggle");
            return false;
        };
        match self.state {
            ExpandState::ExpandAll => surface.expand_all(),
            ExpandState::CollapseAll => surface.collapse_all(),
        }
        self.state = self.state.flipped();
        true
    }
}
