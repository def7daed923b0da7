/// Re-exports leaf crates from a category crate.
///
/// The plain form inlines every item of each leaf so that the category
/// documents them in one place. The `mod` form only re-exports the crates
/// themselves, for umbrella crates whose categories share item names.
#[macro_export]
macro_rules! doc_inline_reexport {
    ( mod $($lib:ident,)* ) => { $(
        #[doc(inline)]
        pub use $lib;
    )* };
    ( $($lib:ident,)* ) => { $(
        #[doc(inline)]
        pub use $lib::{self, *};
    )* };
}
