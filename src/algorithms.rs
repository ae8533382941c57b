pub mod convex_hull;

#[doc(inline)]
pub use convex_hull::gift_wrapping::convex_hull;
