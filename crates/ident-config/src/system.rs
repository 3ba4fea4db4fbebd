//! Identity defaults taken from the operating system.

use crate::DEFAULT_HOST_NAME;

const USER_NAME_VARS: [&str; 2] = ["USER", "USERNAME"];

/// Login name of the current user, if the environment reports one.
pub(crate) fn user_name() -> Option<String> {
    USER_NAME_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|name| !name.trim().is_empty())
}

/// `<user>@<host>`, the email used when none is configured.
pub(crate) fn default_email() -> Option<String> {
    user_name().map(|user| format!("{user}@{}", host_name()))
}

#[cfg(unix)]
pub(crate) fn host_name() -> String {
    let mut buf = [0u8; 256];

    // SAFETY: buf is valid for writes of buf.len() bytes; gethostname writes
    // at most that many and we only read up to the first NUL.
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast::<libc::c_char>(), buf.len()) };
    if rc != 0 {
        return DEFAULT_HOST_NAME.to_string();
    }

    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    match String::from_utf8_lossy(&buf[..end]).trim() {
        "" => DEFAULT_HOST_NAME.to_string(),
        name => name.to_string(),
    }
}

#[cfg(windows)]
pub(crate) fn host_name() -> String {
    std::env::var("COMPUTERNAME")
        .ok()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_HOST_NAME.to_string())
}

#[cfg(not(any(unix, windows)))]
pub(crate) fn host_name() -> String {
    DEFAULT_HOST_NAME.to_string()
}
