use crate::locate::locate;
use crate::manifest::read_manifest;
use crate::summary::{Lookup, SummaryOptions, write_summary};
use std::io::{self, Write};
use std::path::Path;
use tracing::warn;

/// Locate and read the manifest nearest to `start`.
///
/// Read and decode failures are logged and folded into [`Lookup::NotFound`].
pub fn lookup(start: &Path) -> Lookup {
    let Some(dir) = locate(start) else {
        return Lookup::NotFound;
    };

    match read_manifest(&dir) {
        Ok(manifest) => Lookup::Loaded { dir, manifest },
        Err(e) => {
            let err = anyhow::Error::from(e);
            warn!("{err:#}");
            Lookup::NotFound
        }
    }
}

/// Full pipeline: locate, read, and print the summary to `out`.
pub fn inspect<W: Write>(start: &Path, opts: SummaryOptions, out: &mut W) -> io::Result<()> {
    write_summary(out, &lookup(start), opts)
}
