/// Install the global tracing subscriber for embedding binaries and
/// tests. Later calls are ignored, so test processes can call this from
/// every test.
pub fn init() {
    let _ = tracing_subscriber::fmt().with_target(false).try_init();
}
