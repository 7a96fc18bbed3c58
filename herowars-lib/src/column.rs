//! Column and header group definitions.

use crate::filter::builtin;

/// Horizontal alignment for cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// The CSS `text-align` keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// How the filter input for a column is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterControl {
    /// A free text input.
    Text,
    /// Two numeric inputs (min, max).
    Range,
    /// A dropdown of the column's distinct values.
    Select,
}

/// The filter attached to a column: a registered filter type name and the
/// control used to enter its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
    /// Name of the filter type in [`FilterTypes`](crate::filter::FilterTypes).
    pub filter_type: String,
    /// The input control.
    pub control: FilterControl,
}

/// Column configuration.
///
/// A column reads one field (its accessor) from every record and shows it
/// under a header. Columns are sortable and filter with the `text` filter
/// unless configured otherwise.
///
/// # Examples
///
/// ```
/// use herowars_lib::column::{Alignment, Column};
///
/// let columns = vec![
///     Column::new("Hero", "Name").fuzzy(),
///     Column::new("Role", "Role").select(),
///     Column::new("Power", "Power").range().align(Alignment::Right),
/// ];
/// assert_eq!(columns[2].header, "Power");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Field name read from each record.
    pub accessor: String,
    /// Column header text.
    pub header: String,
    /// Filter configuration; `None` disables filtering.
    pub filter: Option<ColumnFilter>,
    /// Whether this column is sortable.
    pub sortable: bool,
    /// Horizontal alignment.
    pub align: Alignment,
}

impl Column {
    /// Create a new column.
    ///
    /// # Arguments
    /// * `accessor` - The record field shown in this column
    /// * `header` - The column header text
    pub fn new(accessor: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            accessor: accessor.into(),
            header: header.into(),
            filter: Some(ColumnFilter {
                filter_type: builtin::TEXT.to_string(),
                control: FilterControl::Text,
            }),
            sortable: true,
            align: Alignment::Left,
        }
    }

    /// Filter with an arbitrary registered filter type.
    pub fn filter_with(mut self, filter_type: impl Into<String>, control: FilterControl) -> Self {
        self.filter = Some(ColumnFilter {
            filter_type: filter_type.into(),
            control,
        });
        self
    }

    /// Filter with the fuzzy text filter.
    pub fn fuzzy(self) -> Self {
        self.filter_with(builtin::FUZZY_TEXT, FilterControl::Text)
    }

    /// Filter with the case-insensitive prefix filter (the default).
    pub fn prefix(self) -> Self {
        self.filter_with(builtin::TEXT, FilterControl::Text)
    }

    /// Filter with the numeric range filter.
    pub fn range(self) -> Self {
        self.filter_with(builtin::BETWEEN, FilterControl::Range)
    }

    /// Filter by picking one of the column's distinct values.
    pub fn select(self) -> Self {
        self.filter_with(builtin::EQUALS, FilterControl::Select)
    }

    /// Disable filtering for this column.
    pub fn no_filter(mut self) -> Self {
        self.filter = None;
        self
    }

    /// Disable sorting for this column.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Set the cell alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Returns `true` if a filter is configured.
    pub fn is_filterable(&self) -> bool {
        self.filter.is_some()
    }
}

/// A header spanning a group of columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnGroup {
    /// Group header text.
    pub header: String,
    /// Columns under this header, left to right.
    pub columns: Vec<Column>,
}

impl ColumnGroup {
    pub fn new(header: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            header: header.into(),
            columns,
        }
    }
}

/// All column groups of a table, with lookup by accessor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns {
    groups: Vec<ColumnGroup>,
}

impl Columns {
    pub fn new(groups: Vec<ColumnGroup>) -> Self {
        Self { groups }
    }

    /// Columns without a group header.
    pub fn flat(columns: Vec<Column>) -> Self {
        Self::new(vec![ColumnGroup::new("", columns)])
    }

    /// The header groups.
    pub fn groups(&self) -> &[ColumnGroup] {
        &self.groups
    }

    /// Iterate leaf columns left to right.
    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.groups.iter().flat_map(|g| g.columns.iter())
    }

    /// Find a column by accessor.
    pub fn get(&self, accessor: &str) -> Option<&Column> {
        self.iter().find(|c| c.accessor == accessor)
    }

    /// Number of leaf columns.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.columns.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if any group has a non-empty header.
    pub fn has_group_headers(&self) -> bool {
        self.groups.iter().any(|g| !g.header.is_empty())
    }
}
