//! lourdes — small point-free helpers on top of `Option`, `Result`, slices,
//! regexes, lenses and futures.
//!
//! Every helper is re-exported at the crate root, so the whole exported
//! surface reads as one flat namespace:
//!
//! ```
//! use lourdes::{nth, to_either};
//!
//! assert_eq!(nth(1, &[1, 2, 3]), Some(&2));
//! assert_eq!(to_either(|x: &i32| x % 2 == 0, |x: i32| format!("{x} is odd"), 3), Err("3 is odd".to_string()));
//! ```

pub mod array;
pub mod either;
pub mod future;
pub mod lens;
pub mod logic;
pub mod maybe;
pub mod pattern;

pub use array::{index_of, intersperse, nth, split_each};
pub use either::to_either;
pub use future::{either_to_future, fl_map, maybe_to_future, to_future};
pub use lens::{lens, lens_prop, lens_props, over, view, FnLens, Identity, Lens, Prop};
pub use logic::{all_pass, any_pass, Cond};
pub use maybe::to_maybe;
pub use pattern::{first_group_match, replace, replace_all};
