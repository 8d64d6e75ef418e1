//! Four concurrent transformation layers: natal, decadal, annual and
//! minor-limit. Each assigns the four modifier types to named symbols.

pub mod layer;
pub mod resolver;
pub mod table;

pub use layer::{
    LayerDetail, LayerKind, LayerSummary, LayerSummaryEntry, TransformationLayer,
    TransformationSet,
};
pub use resolver::{
    compute_annual, compute_decadal, compute_minor_limit, compute_natal, decadal_spans,
    resolve_all, DecadalSpan, TransformationResolver,
};
