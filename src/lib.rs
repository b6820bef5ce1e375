//! Tells a GitHub Actions run how it relates to the runs that came before it on the same branch.
//!
//! The core is [`history::resolve`], which places the current run among its branch's history, and
//! [`report::format_report`], which renders the outcome with comparison links between commits.
//! Everything talking to GitHub lives in [`transactions`] and [`action`].

pub mod env;
pub mod error;
pub mod framework;
pub mod history;
pub mod report;
pub mod workflow;

#[cfg(feature = "transactions")]
pub mod action;
#[cfg(feature = "transactions")]
pub mod transactions;

pub use error::{Error, Result};

/// A shorthand to define a statically allocated variable using a [`std::sync::LazyLock`].
///
/// # Examples
///
/// ```rust
/// # use std::sync::LazyLock;
/// # use previous_run::static_lazy_lock;
/// static_lazy_lock! {
///     pub VAR_1: String = String::from("a static variable");
/// }
/// // ...equals to...
/// pub static VAR_2: LazyLock<String> = LazyLock::new(|| String::from("a static variable"));
/// # assert_eq!(*VAR_1, *VAR_2);
/// ```
#[macro_export]
macro_rules! static_lazy_lock {
    ($(#[$meta:meta])* $vis:vis $name:ident: $type:ty = $expr:expr $(;)?) => {
        $(#[$meta])*
        $vis static $name: $crate::__priv_macro_use::LazyLock<$type> =
            $crate::__priv_macro_use::LazyLock::new(|| $expr);
    };
}

#[doc(hidden)]
pub mod __priv_macro_use {
    pub use std::sync::LazyLock;
}
