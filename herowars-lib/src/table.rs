//! Table view state.
//!
//! [`TableView`] borrows an immutable record set and owns the current
//! selection: column filters, a global filter, and sort keys. Rows are
//! recomputed on demand by running the filter stage and then the sort
//! stage; records are never copied or mutated.

use log::{debug, info};

use crate::column::Columns;
use crate::error::TableError;
use crate::filter::{FilterTypes, FilterValue, FuzzyQuery};
use crate::model::{Record, Value};
use crate::sort::{self, SortBy};

/// A reference to one record plus its position in the record set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row<'a> {
    /// Insertion index of the record.
    pub index: usize,
    /// The record.
    pub record: &'a Record,
}

impl<'a> Row<'a> {
    /// The record's value for `column`, `Null` when absent.
    pub fn value(&self, column: &str) -> &'a Value {
        self.record.value(column)
    }
}

/// A filter set on one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFilterState {
    /// Column accessor.
    pub column: String,
    /// Current value.
    pub value: FilterValue,
}

/// A sortable, filterable view over a record set.
///
/// # Example
///
/// ```
/// use herowars_lib::column::{Column, Columns};
/// use herowars_lib::filter::FilterValue;
/// use herowars_lib::model::Record;
/// use herowars_lib::table::TableView;
///
/// let records = vec![
///     Record::new().set("Hero", "A").set("Power", 10i64),
///     Record::new().set("Hero", "B").set("Power", 20i64),
/// ];
/// let columns = Columns::flat(vec![
///     Column::new("Hero", "Name"),
///     Column::new("Power", "Power").range(),
/// ]);
///
/// let mut view = TableView::new(&records, columns);
/// view.set_filter("Power", FilterValue::range(Some(15.0), None)).unwrap();
///
/// let rows = view.rows();
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].record.get_string("Hero").unwrap(), Some("B"));
/// ```
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    /// The records, in insertion order.
    records: &'a [Record],
    /// Column definitions.
    columns: Columns,
    /// Registered filter types.
    filter_types: FilterTypes,
    /// Active column filters, in the order they were first set.
    filters: Vec<ColumnFilterState>,
    /// Fuzzy query applied across all filterable columns.
    global_filter: Option<String>,
    /// Active sort keys, primary first.
    sort_by: Vec<SortBy>,
}

impl<'a> TableView<'a> {
    /// Create a view with the built-in filter types.
    pub fn new(records: &'a [Record], columns: Columns) -> Self {
        Self::with_filter_types(records, columns, FilterTypes::default())
    }

    /// Create a view with a custom filter type registry.
    pub fn with_filter_types(
        records: &'a [Record],
        columns: Columns,
        filter_types: FilterTypes,
    ) -> Self {
        Self {
            records,
            columns,
            filter_types,
            filters: Vec::new(),
            global_filter: None,
            sort_by: Vec::new(),
        }
    }

    /// Get the column definitions.
    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// Get the filter type registry.
    pub fn filter_types(&self) -> &FilterTypes {
        &self.filter_types
    }

    /// Get the underlying records.
    pub fn records(&self) -> &'a [Record] {
        self.records
    }

    // -------------------------------------------------------------------------
    // Filters
    // -------------------------------------------------------------------------

    /// Set the filter value for a column.
    ///
    /// If the column's filter type auto-removes `value`, the filter is
    /// cleared instead. Returns `true` when a filter is now active.
    pub fn set_filter(&mut self, column: &str, value: FilterValue) -> Result<bool, TableError> {
        let col = self
            .columns
            .get(column)
            .ok_or_else(|| TableError::unknown_column(column))?;
        let filter = col
            .filter
            .as_ref()
            .ok_or_else(|| TableError::NotFilterable(column.to_string()))?;
        let filter_fn = self
            .filter_types
            .get(&filter.filter_type)
            .ok_or_else(|| TableError::unknown_filter_type(column, &filter.filter_type))?;

        if filter_fn.auto_remove(&value) {
            debug!("Filter on '{}' auto-removed for {:?}", column, value);
            self.filters.retain(|f| f.column != column);
            return Ok(false);
        }

        debug!("Filter on '{}' set to {:?}", column, value);
        match self.filters.iter_mut().find(|f| f.column == column) {
            Some(existing) => existing.value = value,
            None => self.filters.push(ColumnFilterState {
                column: column.to_string(),
                value,
            }),
        }
        Ok(true)
    }

    /// Clear the filter on a column.
    pub fn clear_filter(&mut self, column: &str) {
        self.filters.retain(|f| f.column != column);
    }

    /// Clear all column filters.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// The current filter value for a column.
    pub fn filter_value(&self, column: &str) -> Option<&FilterValue> {
        self.filters
            .iter()
            .find(|f| f.column == column)
            .map(|f| &f.value)
    }

    /// Active column filters.
    pub fn filters(&self) -> &[ColumnFilterState] {
        &self.filters
    }

    /// Set the global fuzzy filter. An empty query clears it.
    pub fn set_global_filter(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.global_filter = if query.is_empty() { None } else { Some(query) };
        debug!("Global filter set to {:?}", self.global_filter);
    }

    /// The current global filter.
    pub fn global_filter(&self) -> Option<&str> {
        self.global_filter.as_deref()
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Current sort keys, primary first.
    pub fn sort_by(&self) -> &[SortBy] {
        &self.sort_by
    }

    /// The sort key on a column, if any.
    pub fn sorted(&self, column: &str) -> Option<&SortBy> {
        self.sort_by.iter().find(|s| s.column == column)
    }

    fn check_sortable(&self, column: &str) -> Result<(), TableError> {
        let col = self
            .columns
            .get(column)
            .ok_or_else(|| TableError::unknown_column(column))?;
        if !col.sortable {
            return Err(TableError::NotSortable(column.to_string()));
        }
        Ok(())
    }

    /// Sort by a column in the given direction.
    ///
    /// Replaces all sort keys.
    pub fn set_sort_by(&mut self, column: &str, desc: bool) -> Result<(), TableError> {
        self.check_sortable(column)?;
        self.sort_by = vec![SortBy {
            column: column.to_string(),
            desc,
        }];
        Ok(())
    }

    /// Replace all sort keys, primary first.
    ///
    /// Fails without changing the current keys if any column is unknown or
    /// not sortable.
    pub fn set_sort_keys(&mut self, keys: Vec<SortBy>) -> Result<(), TableError> {
        for key in &keys {
            self.check_sortable(&key.column)?;
        }
        self.sort_by = keys;
        Ok(())
    }

    /// Toggle sort for a column.
    ///
    /// Cycles unsorted → ascending → descending → unsorted. With `multi`,
    /// sort keys on other columns are kept and a new key is appended;
    /// otherwise the column becomes the only key. Returns the column's new
    /// sort key.
    pub fn toggle_sort_by(
        &mut self,
        column: &str,
        multi: bool,
    ) -> Result<Option<SortBy>, TableError> {
        self.check_sortable(column)?;

        let next = match self.sorted(column) {
            None => Some(SortBy::asc(column)),
            Some(key) if !key.desc => Some(SortBy::desc(column)),
            Some(_) => None,
        };

        if multi {
            match (&next, self.sort_by.iter().position(|s| s.column == column)) {
                (Some(key), Some(pos)) => self.sort_by[pos] = key.clone(),
                (Some(key), None) => self.sort_by.push(key.clone()),
                (None, Some(pos)) => {
                    self.sort_by.remove(pos);
                }
                (None, None) => {}
            }
        } else {
            self.sort_by = next.iter().cloned().collect();
        }

        debug!("Sort toggled on '{}': {:?}", column, self.sort_by);
        Ok(next)
    }

    /// Clear all sort keys.
    pub fn clear_sort_by(&mut self) {
        self.sort_by.clear();
    }

    /// Clear filters, the global filter, and sort keys.
    pub fn reset(&mut self) {
        self.filters.clear();
        self.global_filter = None;
        self.sort_by.clear();
        info!("Table view reset");
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Every record, in insertion order.
    pub fn pre_filtered_rows(&self) -> Vec<Row<'a>> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| Row { index, record })
            .collect()
    }

    /// Rows after the filter stage, in insertion order.
    pub fn filtered_rows(&self) -> Vec<Row<'a>> {
        let mut rows = self.pre_filtered_rows();

        for state in &self.filters {
            // set_filter only stores filters whose type resolved
            let Some(filter_fn) = self
                .columns
                .get(&state.column)
                .and_then(|c| c.filter.as_ref())
                .and_then(|f| self.filter_types.get(&f.filter_type))
            else {
                continue;
            };
            rows = filter_fn.filter(rows, &state.column, &state.value);
        }

        if let Some(query) = &self.global_filter {
            rows = self.apply_global_filter(rows, query);
        }

        rows
    }

    /// Keeps rows where any filterable column fuzzy-matches `query`.
    fn apply_global_filter(&self, rows: Vec<Row<'a>>, query: &str) -> Vec<Row<'a>> {
        let accessors: Vec<&str> = self
            .columns
            .iter()
            .filter(|c| c.is_filterable())
            .map(|c| c.accessor.as_str())
            .collect();
        let mut fuzzy = FuzzyQuery::new(query);
        rows.into_iter()
            .filter(|row| {
                accessors.iter().any(|accessor| {
                    let cell = row.value(accessor);
                    !cell.is_null() && fuzzy.score(&cell.display()).is_some()
                })
            })
            .collect()
    }

    /// Rows after filtering and sorting.
    pub fn rows(&self) -> Vec<Row<'a>> {
        let mut rows = self.filtered_rows();
        sort::sort_rows(&mut rows, &self.sort_by);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;

    fn records() -> Vec<Record> {
        vec![
            Record::new().set("Hero", "Astaroth").set("Power", 10i64),
            Record::new().set("Hero", "Aurora").set("Power", 30i64),
            Record::new().set("Hero", "Jet").set("Power", 20i64),
        ]
    }

    fn columns() -> Columns {
        Columns::flat(vec![
            Column::new("Hero", "Name").fuzzy(),
            Column::new("Power", "Power").range(),
            Column::new("Notes", "Notes").no_filter().unsortable(),
        ])
    }

    #[test]
    fn test_toggle_cycles_three_states() {
        let records = records();
        let mut view = TableView::new(&records, columns());

        assert_eq!(view.toggle_sort_by("Power", false).unwrap(), Some(SortBy::asc("Power")));
        assert_eq!(view.toggle_sort_by("Power", false).unwrap(), Some(SortBy::desc("Power")));
        assert_eq!(view.toggle_sort_by("Power", false).unwrap(), None);
        assert!(view.sort_by().is_empty());
    }

    #[test]
    fn test_toggle_single_replaces_other_keys() {
        let records = records();
        let mut view = TableView::new(&records, columns());

        view.toggle_sort_by("Power", false).unwrap();
        view.toggle_sort_by("Hero", false).unwrap();
        assert_eq!(view.sort_by(), &[SortBy::asc("Hero")]);
    }

    #[test]
    fn test_toggle_multi_keeps_other_keys() {
        let records = records();
        let mut view = TableView::new(&records, columns());

        view.toggle_sort_by("Power", false).unwrap();
        view.toggle_sort_by("Hero", true).unwrap();
        assert_eq!(view.sort_by(), &[SortBy::asc("Power"), SortBy::asc("Hero")]);

        view.toggle_sort_by("Power", true).unwrap();
        view.toggle_sort_by("Power", true).unwrap();
        assert_eq!(view.sort_by(), &[SortBy::asc("Hero")]);
    }

    #[test]
    fn test_errors() {
        let records = records();
        let mut view = TableView::new(&records, columns());

        assert_eq!(
            view.set_filter("Dodge", FilterValue::text("x")),
            Err(TableError::UnknownColumn("Dodge".to_string()))
        );
        assert_eq!(
            view.set_filter("Notes", FilterValue::text("x")),
            Err(TableError::NotFilterable("Notes".to_string()))
        );
        assert_eq!(
            view.toggle_sort_by("Notes", false),
            Err(TableError::NotSortable("Notes".to_string()))
        );
    }

    #[test]
    fn test_unregistered_filter_type() {
        let records = records();
        let columns = Columns::flat(vec![Column::new("Hero", "Name").filter_with(
            "soundex",
            crate::column::FilterControl::Text,
        )]);
        let mut view = TableView::new(&records, columns);

        assert_eq!(
            view.set_filter("Hero", FilterValue::text("x")),
            Err(TableError::unknown_filter_type("Hero", "soundex"))
        );
    }

    #[test]
    fn test_auto_remove_clears_existing_filter() {
        let records = records();
        let mut view = TableView::new(&records, columns());

        assert!(view.set_filter("Power", FilterValue::range(Some(15.0), None)).unwrap());
        assert_eq!(view.rows().len(), 2);

        assert!(!view.set_filter("Power", FilterValue::range_from_input("abc", "")).unwrap());
        assert!(view.filter_value("Power").is_none());
        assert_eq!(view.rows().len(), 3);
    }

    #[test]
    fn test_global_filter() {
        let records = records();
        let mut view = TableView::new(&records, columns());

        view.set_global_filter("je");
        let heroes: Vec<usize> = view.rows().iter().map(|r| r.index).collect();
        assert_eq!(heroes, vec![2]);

        view.set_global_filter("");
        assert!(view.global_filter().is_none());
        assert_eq!(view.rows().len(), 3);
    }

    #[test]
    fn test_reset() {
        let records = records();
        let mut view = TableView::new(&records, columns());

        view.set_filter("Hero", FilterValue::text("au")).unwrap();
        view.set_sort_by("Power", true).unwrap();
        view.set_global_filter("a");
        view.reset();

        assert!(view.filters().is_empty());
        assert!(view.sort_by().is_empty());
        assert!(view.global_filter().is_none());
    }
}
