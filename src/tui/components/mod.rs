// Components module - reusable UI building blocks
//
// Shell components are rendered in every frame:
// - Title bar: app name, pending spinner
// - Status bar: engine, uptime, key hints
// - Logs panel: system log tail (optional)
//
// Body components own their own state:
// - Composer: multi-line input
// - Trigger: the summarize button
// - Summary panel: the result slot

pub mod composer;
pub mod logs_panel;
pub mod status_bar;
pub mod summary_panel;
pub mod title_bar;
pub mod toast;
pub mod trigger;

pub use composer::Composer;
pub use summary_panel::SummaryPanel;
pub use toast::Toast;
