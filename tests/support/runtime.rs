//! Tokio runtime and mock GitHub server shared across scenario steps.

use std::future::Future;
use std::io;
use std::rc::Rc;

use rstest_bdd::Slot;
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Runtime handle that steps clone out of their scenario state.
#[derive(Clone)]
pub struct SharedRuntime(Rc<Runtime>);

impl SharedRuntime {
    fn start() -> io::Result<Self> {
        Runtime::new().map(|runtime| Self(Rc::new(runtime)))
    }

    /// Drives `future` to completion on the shared runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.0.block_on(future)
    }
}

/// Returns the scenario's runtime, starting it and the mock server on first
/// use.
///
/// # Errors
///
/// Returns an error when the Tokio runtime cannot be built.
pub fn ensure_runtime_and_server(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> io::Result<SharedRuntime> {
    let shared = runtime.get().map_or_else(
        || {
            let started = SharedRuntime::start()?;
            runtime.set(started.clone());
            Ok::<_, io::Error>(started)
        },
        Ok,
    )?;

    if server.with_ref(|_| ()).is_none() {
        server.set(shared.block_on(MockServer::start()));
    }

    Ok(shared)
}
