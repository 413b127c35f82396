// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// External single-argument function that `forward` delegates to.
///
/// Implemented for every `Fn(In) -> Out`, so a closure can be injected
/// directly. Types that need state (call counters, lookup tables) implement it
/// by hand.
///
/// # Example
///
/// ```
/// use fixture_core::{ops, Collaborator};
///
/// let deep = |x: i32| x * 2;
/// assert_eq!(deep.call(5), 10);
/// assert_eq!(ops::forward(&deep, 5), 10);
/// ```
pub trait Collaborator<In> {
    type Output;

    fn call(&self, input: In) -> Self::Output;
}

impl<F, In, Out> Collaborator<In> for F
where
    F: Fn(In) -> Out,
{
    type Output = Out;

    fn call(&self, input: In) -> Out {
        self(input)
    }
}
