pub mod cache;
pub mod dots;
pub mod engine;
pub mod gl;
pub mod sex;

pub use cache::ScoreCache;
pub use dots::dots;
pub use engine::{score_entry, score_lifts, score_total, EntryScores, Formula};
pub use gl::gl;
pub use sex::SexCategory;
