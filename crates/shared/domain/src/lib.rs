//! # Domain Models
//!
//! Pure data types describing what a histogram control file is generated from:
//! the categorical axes, the allow-rule table, the behavior-flag sets and the
//! label formatting. Keep it lean: no I/O and no generation logic, just data
//! and simple lookup helpers.

pub mod axis;
pub mod config;
pub mod flags;
pub mod ordered;
pub mod rules;

pub use crate::axis::{Axis, AxisKind, HistogramDecl, LoopOrder};
pub use crate::config::{GeneratorConfig, LabelStyle, RenameRule};
pub use crate::flags::{FlagSets, RenderFlags};
pub use crate::ordered::OrderedMap;
pub use crate::rules::AllowRule;
