pub mod catalog_view;
pub mod directive;
pub mod presenter;
pub mod render;

pub use catalog_view::{CATALOG_FALLBACK_NOTICE, CatalogOption, CatalogView};
pub use directive::{ChangeIcon, DisplayDirective, IndicatorCell, IndicatorDirectives, RowVisibility, Tone};
pub use presenter::{classify_timeframe, present, resolve_recommendation, strength_tier};
pub use render::{Renderer, TextRenderer};
