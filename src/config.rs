/*!
Engine-wide configuration: knobs for the search driver and goal planner.

This is configuration *of the engine*, not configuration *loading*: the
latter (files, environment variables) is an external collaborator, same
as in `otter_sat::config::Config`, whose shape (plain public fields, a
hand-written [Default]) this mirrors.
*/

/// Engine-wide knobs.
#[derive(Clone, Debug)]
pub struct Config {
    /// Ceiling on proof length the search driver will grow to before
    /// giving up and returning a partial proof. Non-derivation past this
    /// point is not an error.
    pub max_lines: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config { max_lines: 2000 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_a_nonzero_ceiling() {
        assert!(Config::default().max_lines > 0);
    }
}
