//! Ambient per-thread context.
//!
//! Code that cannot easily thread a `&mut Context` through (deeply nested
//! debug-draw calls, for instance) can use the thread's current context
//! instead. Each thread lazily gets its own default context.

use std::cell::RefCell;

use super::Context;

thread_local! {
    static CURRENT: RefCell<Context> = RefCell::new(Context::new());
}

/// Runs `f` with the calling thread's current context.
///
/// # Panics
/// Panics on reentrant use: calling `with_current` (or `replace_current`)
/// from inside `f`.
pub fn with_current<R>(f: impl FnOnce(&mut Context) -> R) -> R {
    CURRENT.with(|cell| f(&mut cell.borrow_mut()))
}

/// Installs `ctx` as the calling thread's current context and returns the
/// previous one.
pub fn replace_current(ctx: Context) -> Context {
    CURRENT.with(|cell| cell.replace(ctx))
}

#[cfg(test)]
mod tests {
    use prim3d_math::Vec3;

    use super::*;
    use crate::prim::{DrawPrimitive, PrimList, PrimitiveMode};

    #[test]
    fn current_persists_between_calls() {
        with_current(|ctx| {
            ctx.reset();
            ctx.begin(PrimitiveMode::Points);
            ctx.vertex_at(Vec3::ONE);
            ctx.end();
        });
        let n = with_current(|ctx| ctx.buffer(PrimList::Immediate, DrawPrimitive::Points).len());
        assert_eq!(n, 1);
    }

    #[test]
    fn replace_swaps_contexts() {
        let mut mine = Context::new();
        mine.push_size(7.0);

        let previous = replace_current(mine);
        assert_eq!(with_current(|ctx| ctx.size()), 7.0);

        let mine = replace_current(previous);
        assert_eq!(mine.size(), 7.0);
        assert_eq!(with_current(|ctx| ctx.size()), 1.0);
    }

    #[test]
    #[should_panic]
    fn reentrant_use_panics() {
        with_current(|_| with_current(|_| ()));
    }
}
