//! Resource view configuration
//!
//! A `ResourceSpec<T>` says everything that differs between the five views:
//! where the list lives, which columns the table has, how a card looks and
//! what the empty state says. Build one with [`ResourceSpec::builder`].

use std::fmt;
use std::sync::Arc;

use crate::render::{Action, Card, Cell, EmptyState, Podium, Row, Table};

/// Cell extractor. Receives the item's 1-based position and the item.
pub type CellFn<T> = Arc<dyn Fn(usize, &T) -> Cell + Send + Sync>;
/// Card builder. Receives the item's 1-based position and the item.
pub type CardFn<T> = Arc<dyn Fn(usize, &T) -> Card + Send + Sync>;
/// Optional highlight computed over the whole list
pub type PodiumFn<T> = Arc<dyn Fn(&[T]) -> Option<Podium> + Send + Sync>;

/// Default number of cards in the grid
pub const DEFAULT_CARD_LIMIT: usize = 6;

/// One table column
pub struct Column<T> {
    pub header: String,
    cell: CellFn<T>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
            cell: Arc::clone(&self.cell),
        }
    }
}

/// Text of the empty-state panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyStateText {
    pub title: String,
    pub message: String,
    pub action_label: String,
}

/// Configuration of one resource view
pub struct ResourceSpec<T> {
    name: String,
    title: String,
    subtitle: String,
    path: String,
    columns: Vec<Column<T>>,
    card: Option<CardFn<T>>,
    podium: Option<PodiumFn<T>>,
    empty_state: EmptyStateText,
    card_limit: usize,
    total_label: String,
}

impl<T> Clone for ResourceSpec<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            path: self.path.clone(),
            columns: self.columns.clone(),
            card: self.card.clone(),
            podium: self.podium.clone(),
            empty_state: self.empty_state.clone(),
            card_limit: self.card_limit,
            total_label: self.total_label.clone(),
        }
    }
}

impl<T> fmt::Debug for ResourceSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceSpec")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("columns", &self.headers())
            .field("card_limit", &self.card_limit)
            .finish()
    }
}

impl<T> ResourceSpec<T> {
    /// Start building a spec for the named resource (e.g. "activities").
    ///
    /// The path defaults to `<name>/` and the title to the capitalized name.
    pub fn builder(name: impl Into<String>) -> ResourceSpecBuilder<T> {
        let name = name.into();
        let title = capitalize(&name);
        ResourceSpecBuilder {
            spec: ResourceSpec {
                path: format!("{}/", name),
                total_label: format!("Total {}", title),
                empty_state: EmptyStateText {
                    title: format!("No {} Found", title),
                    message: String::new(),
                    action_label: "Get Started".to_string(),
                },
                title,
                subtitle: String::new(),
                name,
                columns: Vec::new(),
                card: None,
                podium: None,
                card_limit: DEFAULT_CARD_LIMIT,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    /// Path of the list relative to the API base
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn card_limit(&self) -> usize {
        self.card_limit
    }

    /// Same spec with a different card cap
    pub fn with_card_limit(mut self, limit: usize) -> Self {
        self.card_limit = limit;
        self
    }

    pub fn total_label(&self) -> &str {
        &self.total_label
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.header.clone()).collect()
    }

    /// One row per item, in order
    pub fn table(&self, items: &[T]) -> Table {
        let rows = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let position = i + 1;
                Row {
                    position,
                    cells: self
                        .columns
                        .iter()
                        .map(|column| (column.cell)(position, item))
                        .collect(),
                }
            })
            .collect();

        Table {
            headers: self.headers(),
            rows,
        }
    }

    /// Cards for the first `card_limit` items
    pub fn cards(&self, items: &[T]) -> Vec<Card> {
        match &self.card {
            Some(card) => items
                .iter()
                .take(self.card_limit)
                .enumerate()
                .map(|(i, item)| card(i + 1, item))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn podium(&self, items: &[T]) -> Option<Podium> {
        self.podium.as_ref().and_then(|podium| podium(items))
    }

    pub fn empty_state(&self) -> EmptyState {
        EmptyState {
            title: self.empty_state.title.clone(),
            message: self.empty_state.message.clone(),
            action: Action::placeholder(self.empty_state.action_label.clone()),
        }
    }
}

/// Builder for [`ResourceSpec`]
pub struct ResourceSpecBuilder<T> {
    spec: ResourceSpec<T>,
}

impl<T> ResourceSpecBuilder<T> {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.spec.title = title.into();
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.spec.subtitle = subtitle.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.spec.path = path.into();
        self
    }

    pub fn column<F>(mut self, header: impl Into<String>, cell: F) -> Self
    where
        F: Fn(usize, &T) -> Cell + Send + Sync + 'static,
    {
        self.spec.columns.push(Column {
            header: header.into(),
            cell: Arc::new(cell),
        });
        self
    }

    pub fn card<F>(mut self, card: F) -> Self
    where
        F: Fn(usize, &T) -> Card + Send + Sync + 'static,
    {
        self.spec.card = Some(Arc::new(card));
        self
    }

    pub fn podium<F>(mut self, podium: F) -> Self
    where
        F: Fn(&[T]) -> Option<Podium> + Send + Sync + 'static,
    {
        self.spec.podium = Some(Arc::new(podium));
        self
    }

    pub fn empty_state(
        mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        action_label: impl Into<String>,
    ) -> Self {
        self.spec.empty_state = EmptyStateText {
            title: title.into(),
            message: message.into(),
            action_label: action_label.into(),
        };
        self
    }

    pub fn card_limit(mut self, limit: usize) -> Self {
        self.spec.card_limit = limit;
        self
    }

    pub fn total_label(mut self, label: impl Into<String>) -> Self {
        self.spec.total_label = label.into();
        self
    }

    pub fn build(self) -> ResourceSpec<T> {
        self.spec
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers() -> ResourceSpec<u32> {
        ResourceSpec::<u32>::builder("numbers")
            .column("#", |position, _| Cell::text(position.to_string()))
            .column("Value", |_, n: &u32| Cell::strong(n.to_string()))
            .card(|position, n: &u32| Card::new(format!("Number {}", position)).line(Cell::text(n.to_string())))
            .empty_state("Nothing here", "Add a number", "Add Number")
            .build()
    }

    #[test]
    fn test_builder_defaults() {
        let spec: ResourceSpec<u32> = ResourceSpec::builder("teams").build();
        assert_eq!(spec.title(), "Teams");
        assert_eq!(spec.path(), "teams/");
        assert_eq!(spec.card_limit(), DEFAULT_CARD_LIMIT);
        assert_eq!(spec.total_label(), "Total Teams");
    }

    #[test]
    fn test_table_has_one_row_per_item() {
        let spec = numbers();
        let table = spec.table(&[10, 20, 30]);

        assert_eq!(table.headers, vec!["#", "Value"]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[2].position, 3);
        assert_eq!(table.rows[2].cells[0], Cell::text("3"));
        assert_eq!(table.rows[2].cells[1], Cell::strong("30"));
    }

    #[test]
    fn test_cards_are_capped() {
        let spec = numbers();
        let items: Vec<u32> = (1..=10).collect();
        let cards = spec.cards(&items);

        assert_eq!(cards.len(), 6);
        assert_eq!(cards[5].title, "Number 6");

        let small = ResourceSpec::<u32>::builder("numbers")
            .card(|_, n: &u32| Card::new(n.to_string()))
            .card_limit(2)
            .build();
        assert_eq!(small.cards(&items).len(), 2);
    }

    #[test]
    fn test_empty_state_action_is_placeholder() {
        let empty = numbers().empty_state();
        assert_eq!(empty.title, "Nothing here");
        assert_eq!(empty.action, Action::placeholder("Add Number"));
    }
}
