//! `package` command.

use crate::bundler::{Bundler, Settings};
use crate::error::Result;
use tokio_util::sync::CancellationToken;

/// Packages the build output described by `settings`.
///
/// Ctrl-C cancels the run; a running rpmbuild is killed and the staging tree
/// removed before the error is returned. Produced package paths are printed
/// on stdout, one per line.
pub async fn package(settings: Settings) -> Result<i32> {
    let cancel = CancellationToken::new();
    let interrupt = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::warn!("Interrupt received, cancelling packaging");
                cancel.cancel();
            }
        })
    };

    let result = Bundler::new(settings)
        .with_cancellation(cancel)
        .bundle()
        .await;
    interrupt.abort();

    let artifact = result?;
    log::info!(
        "Package size: {} bytes, SHA256: {}",
        artifact.size,
        artifact.checksum
    );
    for path in &artifact.paths {
        println!("{}", path.display());
    }

    Ok(0)
}
