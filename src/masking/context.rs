// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Masking context and its flow-scoped ambient accessor
//
// Passing `MaskingContext` (or its `enabled` flag) explicitly is always
// correct. The ambient accessor exists for call sites that cannot thread it
// through: a thread-local slot for synchronous flows and, with the `tokio`
// feature, a task-local slot for async flows. Every activation restores the
// previous value when its scope ends, including on panic.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::marker::PhantomData;

/// Per-operation masking decision supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskingContext {
    pub enabled: bool,
    /// Reserved; not consulted by any mask.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl MaskingContext {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            role: None,
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

thread_local! {
    static CURRENT: RefCell<Option<MaskingContext>> = const { RefCell::new(None) };
}

#[cfg(feature = "tokio")]
tokio::task_local! {
    static TASK_CONTEXT: MaskingContext;
}

/// The context active for the current flow, or a disabled one if none is.
///
/// Inside [`scope_async`] the task-local value wins over the thread slot.
pub fn current() -> MaskingContext {
    #[cfg(feature = "tokio")]
    if let Ok(ctx) = TASK_CONTEXT.try_with(Clone::clone) {
        return ctx;
    }

    CURRENT
        .with(|slot| slot.borrow().clone())
        .unwrap_or_else(MaskingContext::disabled)
}

/// Shorthand for `current().enabled`.
pub fn is_enabled() -> bool {
    current().enabled
}

/// Restores the previously active context when dropped.
///
/// Guards are tied to the thread that created them and must be dropped in
/// reverse order of creation, so only [`scope`] hands them out.
#[must_use = "the previous context is restored as soon as the guard is dropped"]
pub(crate) struct ContextGuard {
    previous: Option<MaskingContext>,
    _not_send: PhantomData<*const ()>,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        // The slot is gone during thread teardown; nothing left to restore
        let _ = CURRENT.try_with(|slot| *slot.borrow_mut() = previous);
        tracing::trace!("masking context restored");
    }
}

/// Make `ctx` the current thread's context until the guard is dropped.
pub(crate) fn enter(ctx: MaskingContext) -> ContextGuard {
    tracing::trace!(enabled = ctx.enabled, "masking context entered");
    let previous = CURRENT.with(|slot| slot.replace(Some(ctx)));
    ContextGuard {
        previous,
        _not_send: PhantomData,
    }
}

/// Run `f` with `ctx` as the current thread's context.
///
/// ```
/// use value_masker::masking::context::{self, MaskingContext};
///
/// let inside = context::scope(MaskingContext::enabled(), context::is_enabled);
/// assert!(inside);
/// assert!(!context::is_enabled());
/// ```
pub fn scope<R>(ctx: MaskingContext, f: impl FnOnce() -> R) -> R {
    let _guard = enter(ctx);
    f()
}

/// Run `fut` with `ctx` as the context of the current task.
///
/// The value follows the future across worker threads and is never visible
/// to other tasks.
#[cfg(feature = "tokio")]
pub async fn scope_async<F>(ctx: MaskingContext, fut: F) -> F::Output
where
    F: std::future::Future,
{
    tracing::trace!(enabled = ctx.enabled, "task masking context entered");
    TASK_CONTEXT.scope(ctx, fut).await
}
