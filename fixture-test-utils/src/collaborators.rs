// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fixture_core::Collaborator;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// The canonical deep function: `x => x * 2`.
pub fn double(x: i64) -> i64 {
    x * 2
}

/// Collaborator wrapper that counts how often it was called.
///
/// Clones share the count, so a test can keep one clone and hand the other
/// to a module.
#[derive(Clone, Debug)]
pub struct CountingCollaborator<F> {
    inner: F,
    calls: Arc<AtomicUsize>,
}

impl<F> CountingCollaborator<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<F, In> Collaborator<In> for CountingCollaborator<F>
where
    F: Collaborator<In>,
{
    type Output = F::Output;

    fn call(&self, input: In) -> Self::Output {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.call(input)
    }
}
