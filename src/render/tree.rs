//! Render tree
//!
//! Plain data describing what a resource view shows. Hosts turn it into
//! terminal text or HTML; nothing here knows about either.

use serde::Serialize;

/// Color role of a badge or highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Info,
}

/// One displayable value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    Text { text: String },
    Strong { text: String },
    /// De-emphasized text, used for most fallback values
    Muted { text: String },
    Badge { text: String, tone: Tone },
    /// Horizontal bar filled to `percent` (0..=100)
    Progress { percent: f64, label: String },
    Mailto { address: String },
    Avatar { initial: char },
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text { text: text.into() }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Cell::Strong { text: text.into() }
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Cell::Muted { text: text.into() }
    }

    pub fn badge(text: impl Into<String>, tone: Tone) -> Self {
        Cell::Badge {
            text: text.into(),
            tone,
        }
    }

    /// Text when present, muted fallback otherwise
    pub fn or_muted(value: Option<&str>, fallback: &str) -> Self {
        match value {
            Some(v) => Cell::text(v),
            None => Cell::muted(fallback),
        }
    }

    /// The text a reader sees, without decoration
    pub fn plain_text(&self) -> String {
        match self {
            Cell::Text { text } | Cell::Strong { text } | Cell::Muted { text } => text.clone(),
            Cell::Badge { text, .. } => text.clone(),
            Cell::Progress { label, .. } => label.clone(),
            Cell::Mailto { address } => address.clone(),
            Cell::Avatar { initial } => initial.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Re-run the fetch after a failure
    Retry,
    /// Manual refresh of a loaded view
    Refresh,
    /// Call-to-action with no behavior behind it
    Placeholder,
}

/// A user affordance (button)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    pub label: String,
    pub kind: ActionKind,
}

impl Action {
    pub fn retry() -> Self {
        Self {
            label: "Try Again".to_string(),
            kind: ActionKind::Retry,
        }
    }

    pub fn refresh() -> Self {
        Self {
            label: "Refresh".to_string(),
            kind: ActionKind::Refresh,
        }
    }

    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ActionKind::Placeholder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// 1-based position in the fetched order
    pub position: usize,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardField {
    pub label: Option<String>,
    pub value: Cell,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub title: String,
    pub badges: Vec<Cell>,
    pub fields: Vec<CardField>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            badges: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn badge(mut self, badge: Cell) -> Self {
        self.badges.push(badge);
        self
    }

    pub fn field(mut self, label: impl Into<String>, value: Cell) -> Self {
        self.fields.push(CardField {
            label: Some(label.into()),
            value,
        });
        self
    }

    pub fn line(mut self, value: Cell) -> Self {
        self.fields.push(CardField { label: None, value });
        self
    }
}

/// Top-three highlight shown above a ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Podium {
    /// Places in display order (2nd, 1st, 3rd)
    pub places: Vec<PodiumPlace>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PodiumPlace {
    pub rank: usize,
    pub medal: String,
    pub name: String,
    pub score: String,
    pub title: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadingIndicator {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPanel {
    pub heading: String,
    pub message: String,
    pub retry: Action,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmptyState {
    pub title: String,
    pub message: String,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub title: String,
    pub subtitle: String,
    pub refresh: Action,
    pub podium: Option<Podium>,
    pub table: Table,
    pub cards: Vec<Card>,
    pub total: usize,
    pub total_label: String,
}

/// Everything a resource view shows for one state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ViewTree {
    Loading(LoadingIndicator),
    Failed(ErrorPanel),
    Empty(EmptyState),
    Populated(Listing),
}

impl ViewTree {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewTree::Loading(_))
    }

    /// The retry control, present only on a failed view
    pub fn retry_action(&self) -> Option<&Action> {
        match self {
            ViewTree::Failed(panel) => Some(&panel.retry),
            _ => None,
        }
    }

    pub fn listing(&self) -> Option<&Listing> {
        match self {
            ViewTree::Populated(listing) => Some(listing),
            _ => None,
        }
    }
}
