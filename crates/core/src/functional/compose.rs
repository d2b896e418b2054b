//! Static composition of fallible functions with first-failure short-circuit

use tracing::trace;

/// Compose two fallible functions into one.
///
/// The composed function runs `f1` and feeds its success value into `f2`.
/// When `f1` fails its failure is returned as-is and `f2` is never called.
pub fn compose2<A, B, C, E, F1, F2>(f1: F1, f2: F2) -> impl Fn(A) -> Result<C, E>
where
    F1: Fn(A) -> Result<B, E>,
    F2: Fn(B) -> Result<C, E>,
{
    move |a| match f1(a) {
        Ok(b) => f2(b),
        Err(failure) => {
            trace!("composed chain short-circuited");
            Err(failure)
        }
    }
}

pub fn compose3<A, B, C, D, E, F1, F2, F3>(f1: F1, f2: F2, f3: F3) -> impl Fn(A) -> Result<D, E>
where
    F1: Fn(A) -> Result<B, E>,
    F2: Fn(B) -> Result<C, E>,
    F3: Fn(C) -> Result<D, E>,
{
    compose2(compose2(f1, f2), f3)
}

pub fn compose4<A, B, C, D, G, E, F1, F2, F3, F4>(
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
) -> impl Fn(A) -> Result<G, E>
where
    F1: Fn(A) -> Result<B, E>,
    F2: Fn(B) -> Result<C, E>,
    F3: Fn(C) -> Result<D, E>,
    F4: Fn(D) -> Result<G, E>,
{
    compose2(compose3(f1, f2, f3), f4)
}

pub fn compose5<A, B, C, D, G, H, E, F1, F2, F3, F4, F5>(
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
) -> impl Fn(A) -> Result<H, E>
where
    F1: Fn(A) -> Result<B, E>,
    F2: Fn(B) -> Result<C, E>,
    F3: Fn(C) -> Result<D, E>,
    F4: Fn(D) -> Result<G, E>,
    F5: Fn(G) -> Result<H, E>,
{
    compose2(compose4(f1, f2, f3, f4), f5)
}

/// Method form of [`compose2`] for any fallible function
pub trait FallibleExt<A, B, E> {
    /// Chain another fallible function after this one
    fn and_then_fn<G, C>(self, g: G) -> impl Fn(A) -> Result<C, E>
    where
        G: Fn(B) -> Result<C, E>,
        Self: Fn(A) -> Result<B, E> + Sized;
}

impl<T, A, B, E> FallibleExt<A, B, E> for T
where
    T: Fn(A) -> Result<B, E>,
{
    fn and_then_fn<G, C>(self, g: G) -> impl Fn(A) -> Result<C, E>
    where
        G: Fn(B) -> Result<C, E>,
    {
        compose2(self, g)
    }
}

/// Compose any number of fallible functions left to right.
///
/// Expands to nested [`compose2`] calls, so `compose!(f, g, h)` is
/// `compose2(compose2(f, g), h)`.
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $g:expr $(, $rest:expr)* $(,)?) => {
        $crate::compose!($crate::functional::compose::compose2($f, $g) $(, $rest)*)
    };
}
