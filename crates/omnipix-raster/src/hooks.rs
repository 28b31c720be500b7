#![forbid(unsafe_code)]

//! Notification hooks for the default canvas primitives.
//!
//! The default bodies of `xline`, `yline`, `rectangle`, and
//! `fill_from_array` invoke the matching hook immediately after they finish,
//! carrying the same parameters as the call. An adapter that overrides a
//! primitive owns that primitive end to end, so its hook is not invoked for
//! it — callers must not rely on both.
//!
//! Hooks are injected closures defaulting to no-op, installed per display
//! instance rather than resolved at link time.

use core::fmt;

use omnipix_core::color::{ColorCycle, ColorValue};

/// Parameters of an `xline`/`yline` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunEvent {
    pub x0: u16,
    pub y0: u16,
    pub len: u16,
    pub color: ColorValue,
    pub cycle: ColorCycle,
    pub width: u16,
}

/// Parameters of a `rectangle` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectEvent {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
    pub color: ColorValue,
    pub stroke: u16,
    pub filled: bool,
}

/// Parameters of a `fill_from_array` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillEvent {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
    pub size: u32,
    pub data: ColorValue,
}

type Hook<E> = Box<dyn Fn(E)>;

/// Per-primitive notification hooks, each independently settable.
#[derive(Default)]
pub struct DrawHooks {
    pub xline: Option<Hook<RunEvent>>,
    pub yline: Option<Hook<RunEvent>>,
    pub rectangle: Option<Hook<RectEvent>>,
    pub fill_from_array: Option<Hook<FillEvent>>,
}

impl DrawHooks {
    /// No hooks installed.
    pub fn none() -> Self {
        Self::default()
    }

    /// Install an `xline` hook.
    pub fn on_xline(mut self, hook: impl Fn(RunEvent) + 'static) -> Self {
        self.xline = Some(Box::new(hook));
        self
    }

    /// Install a `yline` hook.
    pub fn on_yline(mut self, hook: impl Fn(RunEvent) + 'static) -> Self {
        self.yline = Some(Box::new(hook));
        self
    }

    /// Install a `rectangle` hook.
    pub fn on_rectangle(mut self, hook: impl Fn(RectEvent) + 'static) -> Self {
        self.rectangle = Some(Box::new(hook));
        self
    }

    /// Install a `fill_from_array` hook.
    pub fn on_fill_from_array(mut self, hook: impl Fn(FillEvent) + 'static) -> Self {
        self.fill_from_array = Some(Box::new(hook));
        self
    }
}

impl fmt::Debug for DrawHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawHooks")
            .field("xline", &self.xline.is_some())
            .field("yline", &self.yline.is_some())
            .field("rectangle", &self.rectangle.is_some())
            .field("fill_from_array", &self.fill_from_array.is_some())
            .finish()
    }
}
