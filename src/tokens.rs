/// Identifies one in-flight action on an interactive surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Generation counter for a surface. Issuing a token supersedes every
/// token issued before it, so late completions can be told apart from the
/// latest one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestTokens {
    latest: u64,
}

impl RequestTokens {
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Supersedes whatever is in flight without starting anything new.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}
