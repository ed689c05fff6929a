pub mod batch;
pub mod carousel;
pub mod category;
pub mod particles;
pub mod rows;
pub mod theme;

pub use batch::BatchPlan;
pub use carousel::CarouselState;
pub use category::{Category, CategoryConfig};
pub use particles::{
    ParticleKind, SpawnBatch, TransitionEvent, TransitionSequencer, TransitionTimeline,
};
pub use rows::{PageKind, RowDecoration};
pub use theme::Theme;
