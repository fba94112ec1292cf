/*!
Proof lines: the stable rule-label set, the [Line] record, and the
valid-premises computation that bounds which earlier lines a new line may
cite.
*/

use crate::formula::Formula;

/// A rule label, drawn from the closed set the engine cites proof lines with.
///
/// `label()` renders the stable string downstream renderers key on.
/// `∃S`/`◇S` carry the fresh constant they introduce, since the label is
/// part of what a renderer shows the reader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    Premise,
    Reiteration,
    VerumIntro,
    FalsumIntro,
    FalsumElim,
    AndIntro,
    AndElim,
    OrIntro,
    OrElim,
    ThenIntro,
    ThenElim,
    IffIntro,
    IffElim,
    NotIntro,
    NotElim,
    AllIntro,
    AllElim,
    SomeIntro,
    SomeElim,
    NecIntro,
    NecElim,
    PossIntro,
    PossElim,
    EqIntro,
    EqElim,
    ThenAssume,
    NotAssume,
    AllAssume,
    NecAssume,
    /// `∃S/c`: opens an existential-witness block for fresh constant `c`.
    SomeAssume(char),
    /// `◇S/d`: opens a possible-world block for fresh world digit `d`.
    PossAssume(char),
}

impl Rule {
    pub fn label(&self) -> String {
        match self {
            Rule::Premise => "P".to_string(),
            Rule::Reiteration => "R".to_string(),
            Rule::VerumIntro => "⊤I".to_string(),
            Rule::FalsumIntro => "⊥I".to_string(),
            Rule::FalsumElim => "⊥E".to_string(),
            Rule::AndIntro => "∧I".to_string(),
            Rule::AndElim => "∧E".to_string(),
            Rule::OrIntro => "∨I".to_string(),
            Rule::OrElim => "∨E".to_string(),
            Rule::ThenIntro => "→I".to_string(),
            Rule::ThenElim => "→E".to_string(),
            Rule::IffIntro => "↔I".to_string(),
            Rule::IffElim => "↔E".to_string(),
            Rule::NotIntro => "¬I".to_string(),
            Rule::NotElim => "¬E".to_string(),
            Rule::AllIntro => "∀I".to_string(),
            Rule::AllElim => "∀E".to_string(),
            Rule::SomeIntro => "∃I".to_string(),
            Rule::SomeElim => "∃E".to_string(),
            Rule::NecIntro => "◻I".to_string(),
            Rule::NecElim => "◻E".to_string(),
            Rule::PossIntro => "◇I".to_string(),
            Rule::PossElim => "◇E".to_string(),
            Rule::EqIntro => "=I".to_string(),
            Rule::EqElim => "=E".to_string(),
            Rule::ThenAssume => "→S".to_string(),
            Rule::NotAssume => "¬S".to_string(),
            Rule::AllAssume => "∀S".to_string(),
            Rule::NecAssume => "◻S".to_string(),
            Rule::SomeAssume(c) => format!("∃S/{c}"),
            Rule::PossAssume(c) => format!("◇S/{c}"),
        }
    }

    /// Whether this rule opens an assumption subproof: its label ends in
    /// `S` or contains `/`.
    pub fn is_assumption(&self) -> bool {
        matches!(
            self,
            Rule::ThenAssume
                | Rule::NotAssume
                | Rule::AllAssume
                | Rule::NecAssume
                | Rule::SomeAssume(_)
                | Rule::PossAssume(_)
        )
    }

    /// Whether this rule discharges a block, landing one depth shallower
    /// than its immediate predecessor: →I, ¬I, ∀I, ∃E, ◻I, ◇E.
    pub fn is_discharge(&self) -> bool {
        matches!(
            self,
            Rule::ThenIntro
                | Rule::NotIntro
                | Rule::AllIntro
                | Rule::SomeElim
                | Rule::NecIntro
                | Rule::PossElim
        )
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single proof line.
#[derive(Clone, Debug)]
pub struct Line {
    pub lnum: usize,
    pub depth: usize,
    pub tree: Formula,
    pub rule: Rule,
    pub jstlns: Vec<usize>,
    /// Item constants appearing in the original goal, propagated unchanged
    /// through the proof to bias quantifier instantiation.
    pub gics: Vec<char>,
    /// Predicate constants appearing in the original goal, same role.
    pub gpcs: Vec<char>,
}

impl Line {
    /// A depth-0 premise line.
    pub fn premise(lnum: usize, tree: Formula) -> Line {
        Line {
            lnum,
            depth: 0,
            tree,
            rule: Rule::Premise,
            jstlns: Vec::new(),
            gics: Vec::new(),
            gpcs: Vec::new(),
        }
    }

    /// Builds the next line after `proof`, following the common
    /// conventions shared by every rule: `lnum` is the last plus one;
    /// `depth` is the last line's depth, adjusted by whether `rule` opens
    /// or closes a block; `gics`/`gpcs` are copied from the last line. An
    /// empty `proof` bootstraps at `lnum` 1, depth 0, with empty hint sets
    /// (the reflexivity scenario derives straight from an empty proof).
    pub fn derive(proof: &[Line], tree: Formula, rule: Rule, jstlns: Vec<usize>) -> Line {
        let (last_lnum, last_depth, gics, gpcs) = match proof.last() {
            Some(last) => (last.lnum, last.depth, last.gics.clone(), last.gpcs.clone()),
            None => (0, 0, Vec::new(), Vec::new()),
        };
        let mut depth = last_depth;
        if rule.is_assumption() {
            depth += 1;
        } else if rule.is_discharge() {
            depth -= 1;
        }
        Line {
            lnum: last_lnum + 1,
            depth,
            tree,
            rule,
            jstlns,
            gics,
            gpcs,
        }
    }
}

/// The valid premises at the cursor sitting just after `proof`'s last
/// line: lines reachable without crossing back into a closed assumption
/// block. Scanning from the last line leftward, a line is valid iff its
/// depth is ≤ every subsequent line's depth on the path to the end.
pub fn valid_premises(proof: &[Line]) -> Vec<&Line> {
    let mut result = Vec::new();
    let mut ceiling: Option<usize> = None;
    for line in proof.iter().rev() {
        let admit = match ceiling {
            None => true,
            Some(c) => line.depth <= c,
        };
        if admit {
            result.push(line);
            ceiling = Some(line.depth);
        }
    }
    result.reverse();
    result
}

/// The innermost currently-open assumption block: the last (highest-`lnum`)
/// valid-premise line whose rule opens a subproof.
pub fn deepest_open_block<'a>(valid: &[&'a Line]) -> Option<&'a Line> {
    valid.iter().rev().find(|l| l.rule.is_assumption()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::parse;

    fn line(lnum: usize, depth: usize, rule: Rule, jstlns: Vec<usize>) -> Line {
        Line {
            lnum,
            depth,
            tree: parse("A").unwrap(),
            rule,
            jstlns,
            gics: Vec::new(),
            gpcs: Vec::new(),
        }
    }

    #[test]
    fn valid_premises_excludes_closed_blocks() {
        // 1 P @0, 2 ->S @1, 3 P @1, 4 ->I @0 (closes the block opened at 2)
        let proof = vec![
            line(1, 0, Rule::Premise, vec![]),
            line(2, 1, Rule::ThenAssume, vec![]),
            line(3, 1, Rule::Premise, vec![1]),
            line(4, 0, Rule::ThenIntro, vec![2, 3]),
        ];
        let valid = valid_premises(&proof);
        let lnums: Vec<usize> = valid.iter().map(|l| l.lnum).collect();
        assert_eq!(lnums, vec![1, 4]);
    }

    #[test]
    fn deepest_open_block_finds_innermost_assumption() {
        let proof = vec![
            line(1, 0, Rule::Premise, vec![]),
            line(2, 1, Rule::ThenAssume, vec![]),
            line(3, 2, Rule::NotAssume, vec![]),
        ];
        let valid = valid_premises(&proof);
        let open = deepest_open_block(&valid).unwrap();
        assert_eq!(open.lnum, 3);
    }

    #[test]
    fn rule_labels_match_stable_strings() {
        assert_eq!(Rule::ThenElim.label(), "→E");
        assert_eq!(Rule::SomeAssume('c').label(), "∃S/c");
        assert_eq!(Rule::PossAssume('3').label(), "◇S/3");
    }
}
