//! Call tracing for the exported surface.
//!
//! With tracing enabled, every exported operation emits a [`Record`] before
//! it runs: a sequence number, the operation family (`pasta_fp`, `pallas`,
//! ...), the operation name and its arguments. Records go to a [`Sink`]; the
//! default [`LogSink`] writes them through the `log` facade at debug level
//! under [`TARGET`].
//!
//! The sequence counter belongs to the [`Tracer`], one per
//! [`Bindings`](crate::bindings::Bindings), and only ever affects trace
//! output.

use core::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

/// `log` target of [`LogSink`].
pub const TARGET: &str = "pasta_fallback::trace";

/// One traced call.
#[derive(Clone, Copy, Debug)]
pub struct Record<'call> {
    /// Position of the call among all traced calls of the same tracer.
    pub seq: u64,
    /// Operation family, a field or curve name.
    pub family: &'static str,
    /// Operation name.
    pub op: &'static str,
    /// Arguments in call order.
    pub args: &'call [&'call dyn fmt::Debug],
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "#{} {}_{}(", self.seq, self.family, self.op)?;
        for (position, arg) in self.args.iter().enumerate() {
            if position > 0 {
                fmt.write_str(", ")?;
            }
            fmt::Debug::fmt(arg, fmt)?;
        }
        fmt.write_str(")")
    }
}

/// Destination of trace records.
pub trait Sink {
    /// Accept one record. Called before the traced operation runs.
    fn record(&self, record: &Record<'_>);
}

/// Writes records with `log::debug!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl Sink for LogSink {
    fn record(&self, record: &Record<'_>) {
        log::debug!(target: TARGET, "{record}");
    }
}

/// Numbers calls and forwards them to a [`Sink`] while enabled.
#[derive(Debug)]
pub struct Tracer<S> {
    enabled: bool,
    next_seq: AtomicU64,
    sink: S,
}

impl<S: Sink> Tracer<S> {
    /// A tracer starting at sequence number zero.
    #[must_use]
    pub const fn new(enabled: bool, sink: S) -> Self {
        Self {
            enabled,
            next_seq: AtomicU64::new(0),
            sink,
        }
    }

    /// Whether records are emitted.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The sink records go to.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Number of records emitted so far.
    #[must_use]
    pub fn emitted(&self) -> u64 {
        self.next_seq.load(Ordering::Relaxed)
    }

    /// Record the call if enabled, then run `body`.
    pub fn call<T>(
        &self,
        family: &'static str,
        op: &'static str,
        args: &[&dyn fmt::Debug],
        body: impl FnOnce() -> T,
    ) -> T {
        if self.enabled {
            let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
            self.sink.record(&Record {
                seq,
                family,
                op,
                args,
            });
        }
        body()
    }
}
