use crate::path::CurrentPath;

/// Who is running the shell and where, as shown in the prompt and by `pwd`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Identity {
    pub user: String,
    pub host: String,
}

impl Identity {
    pub fn new(user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
        }
    }

    /// The identity of the current process, with `overrides` taking precedence.
    pub fn detect(user: Option<String>, host: Option<String>) -> Self {
        Self {
            user: user.unwrap_or_else(current_user),
            host: host.unwrap_or_else(current_host),
        }
    }

    /// `user@host:~/docs/sub`, without the trailing indicator.
    pub fn prompt(&self, cwd: &CurrentPath) -> String {
        format!("{}@{}:~{}", self.user, self.host, cwd.rooted())
    }
}

#[cfg(unix)]
fn current_user() -> String {
    use nix::unistd::{Uid, User};

    User::from_uid(Uid::effective())
        .ok()
        .flatten()
        .map(|user| user.name)
        .filter(|name| !name.is_empty())
        .or_else(|| std::env::var("USER").ok().filter(|name| !name.is_empty()))
        .unwrap_or_else(|| "user".into())
}

#[cfg(unix)]
fn current_host() -> String {
    nix::unistd::gethostname()
        .ok()
        .and_then(|host| host.into_string().ok())
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| "localhost".into())
}

#[cfg(not(unix))]
fn current_user() -> String {
    std::env::var("USERNAME")
        .ok()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "user".into())
}

#[cfg(not(unix))]
fn current_host() -> String {
    std::env::var("COMPUTERNAME")
        .ok()
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| "localhost".into())
}
