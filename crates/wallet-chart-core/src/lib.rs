// File: crates/wallet-chart-core/src/lib.rs
// Summary: Core library entry point; exports the balance-chart pipeline API.

pub mod timegrid;
pub mod transaction;
pub mod series;
pub mod render;
pub mod hover;
pub mod surface;
pub mod types;
pub mod geometry;
pub mod theme;
pub mod format;

pub use timegrid::{build_grid, TimeBucket, TimeWindow, UnknownWindow};
pub use transaction::{TransactionRecord, TxAction, TxStatus};
pub use series::{reconstruct, SeriesPoint};
pub use render::{render, RenderLayout, RenderOptions};
pub use hover::{locate, tooltip_at, TooltipPayload};
pub use surface::{DrawSurface, FillStyle, StrokeStyle, TextAlign};
pub use types::Color;
pub use geometry::PointF;
pub use theme::Theme;
