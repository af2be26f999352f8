//! Build target detection and standard file descriptors.

/// Raw file descriptor.
pub type Fd = i32;

/// Operating system family this crate was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Linux,
    Apple,
    OtherUnix,
}

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        pub const STD_IN: Fd = libc::STDIN_FILENO;
        pub const STD_OUT: Fd = libc::STDOUT_FILENO;
        pub const STD_ERR: Fd = libc::STDERR_FILENO;
    } else {
        compile_error!("Unsupported target: sierra-core requires a unix platform");
    }
}

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        const CURRENT_TARGET: Target = Target::Linux;
    } else if #[cfg(target_vendor = "apple")] {
        const CURRENT_TARGET: Target = Target::Apple;
    } else {
        const CURRENT_TARGET: Target = Target::OtherUnix;
    }
}

impl Target {
    /// Target this crate was compiled for.
    pub const CURRENT: Target = CURRENT_TARGET;

    /// Platform name (e.g., "linux", "apple")
    pub const fn name(self) -> &'static str {
        match self {
            Target::Linux => "linux",
            Target::Apple => "apple",
            Target::OtherUnix => "unix",
        }
    }
}
