//! Process resource limits.
//!
//! The walk keeps one directory handle open per level of depth, plus one
//! text file at a time. Capping descriptors keeps a runaway deep tree from
//! exhausting the system-wide table.

/// Lower the soft open-file limit to `limit`, never above the hard limit.
///
/// Returns the soft limit now in effect.
#[cfg(unix)]
pub fn cap_open_files(limit: u64) -> std::io::Result<u64> {
    let mut current = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    // SAFETY: `current` is a valid, writable rlimit for the duration of the call.
    if unsafe { libc::getrlimit(libc::RLIMIT_NOFILE, &mut current) } != 0 {
        return Err(std::io::Error::last_os_error());
    }

    let wanted = (limit as libc::rlim_t).min(current.rlim_max);
    let capped = libc::rlimit {
        rlim_cur: wanted,
        rlim_max: current.rlim_max,
    };
    // SAFETY: `capped` is a valid rlimit and outlives the call.
    if unsafe { libc::setrlimit(libc::RLIMIT_NOFILE, &capped) } != 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(wanted as u64)
}

#[cfg(not(unix))]
pub fn cap_open_files(limit: u64) -> std::io::Result<u64> {
    tracing::debug!("open-file limit not supported on this platform");
    Ok(limit)
}
