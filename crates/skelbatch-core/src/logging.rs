//! Logging setup based on `tracing`.

/// Install the default `tracing` subscriber.
///
/// Batcher internals log pool growth at `debug` and per-flush details at
/// `trace`; the default filter keeps both visible while silencing the noisier
/// GPU crates.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter("trace,wgpu_core=info,wgpu_hal=info,naga=info")
        .init();
}
