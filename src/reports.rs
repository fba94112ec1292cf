/*!
Convenience success/failure reporting, mirroring `otter_sat::reports::Report`.

Non-derivation is not an error (see [crate::types::err]): `derive` always
returns whatever partial proof it built. [Report] is how a caller turns
that proof into a yes/no answer without re-deriving the logic itself.
*/

/// Whether a derived proof's last line matches the original target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    Proved,
    NotProved,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Proved => write!(f, "proved"),
            Report::NotProved => write!(f, "not proved"),
        }
    }
}
