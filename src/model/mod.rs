//! Data model for control self-assessments.
//!
//! An [`Assessment`] is an ordered list of [`Parameter`] measurements. Each
//! parameter's numeric `target` selects a [`TargetPolicy`], and its
//! `measure_id` prefix identifies a top-level [`Category`].
//!
//! ```
//! use csf_index::model::{Assessment, catalog};
//!
//! let mut assessment = Assessment::from_catalog();
//! assessment.set_measurement(5, 180.0, 200.0);
//! assert_eq!(assessment.parameters.len(), catalog::default_catalog().len());
//! ```

mod assessment;
pub mod catalog;
mod parameter;

pub use assessment::Assessment;
pub use parameter::{Category, Parameter, TargetPolicy, UNCATEGORIZED};
