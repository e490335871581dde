//! Iteration shim: data-parallel when the `rayon` feature is enabled,
//! plain otherwise. Callers import the module wholesale so the rayon
//! prelude comes along when it is needed.

use cfg_if::*;

cfg_if! {
    if #[cfg(feature = "rayon")] {
        use rayon::slice;
        pub use rayon::prelude::*;
        pub fn opt_par_iter<T: Sync>(x: &[T]) -> slice::Iter<T> {
            x.par_iter()
        }

    } else {
        use std::slice;
        pub fn opt_par_iter<T>(x: &[T]) -> slice::Iter<T> {
            x.iter()
        }
    }
}
