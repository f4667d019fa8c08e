//! Low-level building blocks for custom search pipelines.
//!
//! These items expose the comparison kernels and the generic hash-filtered
//! scan behind [`crate::find_crop`] and [`crate::find_masked_crop`]. Most
//! callers should prefer the top-level functions.

pub use crate::kernel::{Exact, Kernel, Masked};
pub use crate::mask::pixel_mask;
pub use crate::search::scan_with_kernel;
