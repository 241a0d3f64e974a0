//! Exit handling: signal handlers, terminal cleanup, and core dump suppression.

/// Cleanup function registered with atexit - runs on any exit
extern "C" fn cleanup_on_exit() {
    // Only print escape codes if stdout is a TTY (not when piping)
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, b"\x1b[0m\x1b[?25h".as_ptr() as *const libc::c_void, 10);
        }
    }
}

/// Signal handler for SIGINT/SIGTERM/SIGHUP - exit cleanly, atexit handles cleanup
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    if unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) } != 0 {
        log::warn!("could not disable core dumps");
    }
}

#[cfg(all(unix, not(target_os = "linux")))]
pub fn disable_core_dumps() {
    let limit = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    if unsafe { libc::setrlimit(libc::RLIMIT_CORE, &limit) } != 0 {
        log::warn!("could not disable core dumps");
    }
}

#[cfg(not(unix))]
pub fn disable_core_dumps() {}
