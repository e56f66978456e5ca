//! Page enhancer runtime for the NAS file browser.
//!
//! Decision logic (navigation matching, click delegation, layout rules, the action reducer) is
//! target-independent and unit-tested natively. The `host` module wires those decisions into the
//! live DOM and only builds for `wasm32`.

pub mod alerts;
pub mod config;
pub mod copy_feedback;
pub mod delegation;
pub mod effects;
#[cfg(target_arch = "wasm32")]
pub mod host;
pub mod model;
pub mod nav;
pub mod reducer;
pub mod tables;

pub use config::{parse_page_config, PageConfig};
pub use copy_feedback::CopyFeedbackState;
pub use delegation::{click_hits_nested_control, ClickTarget};
pub use effects::{run_host_effect, HostEffectOutcome, PageServices};
#[cfg(target_arch = "wasm32")]
pub use host::{enhance_document, load_page_config};
pub use model::EnhancementReport;
pub use nav::{active_nav_links, is_active_nav_link};
pub use reducer::{reduce_page, PageAction, PageEffect, ReducerError};
