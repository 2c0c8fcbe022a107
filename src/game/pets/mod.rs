// Pet sprites
//
// - Animation keys (action x direction) and the frame table sliced from a sheet
// - The animator that steps through frames on a wall-clock cadence

pub mod animation;
pub mod animator;

pub use animation::{Action, ColorVariant, Direction};
pub use animator::SpriteAnimator;
