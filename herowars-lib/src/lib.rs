//! Hero Wars stats table library
//!
//! Loads a static hero dataset and evaluates a sortable, filterable table
//! view over it, rendered as HTML.
//!
//! # Example
//!
//! ```
//! use herowars_lib::filter::FilterValue;
//! use herowars_lib::render::{RenderOptions, render_table};
//! use herowars_lib::table::TableView;
//! use herowars_lib::{data, hero};
//!
//! let records = data::bundled().unwrap();
//! let mut view = TableView::new(&records, hero::hero_columns());
//! view.set_filter("Role", FilterValue::text("Tank")).unwrap();
//! view.toggle_sort_by("Power", false).unwrap();
//!
//! let html = render_table(&view, &RenderOptions::default());
//! assert!(html.contains("Showing"));
//! ```

pub mod column;
pub mod data;
pub mod error;
pub mod filter;
pub mod hero;
pub mod model;
pub mod render;
pub mod sort;
pub mod table;
