/*!
Dead-line pruning: keeps only the lines the final line's justification
transitively depends on, renumbered contiguously.
*/

use crate::line::Line;
use std::collections::{HashMap, HashSet};

/// Computes the transitive closure of `jstlns` from the last line
/// backwards, keeps that closure (plus the last line itself), and
/// renumbers the survivors `1..K`, rewriting every `jstlns` reference
/// through the old-to-new `lnum` mapping.
pub fn simplify(proof: &[Line]) -> Vec<Line> {
    let Some(last) = proof.last() else {
        return Vec::new();
    };

    let by_lnum: HashMap<usize, &Line> = proof.iter().map(|l| (l.lnum, l)).collect();
    let mut essential: HashSet<usize> = HashSet::new();
    let mut stack = vec![last.lnum];
    while let Some(lnum) = stack.pop() {
        if !essential.insert(lnum) {
            continue;
        }
        if let Some(line) = by_lnum.get(&lnum) {
            for &cited in &line.jstlns {
                stack.push(cited);
            }
        }
    }

    let mut renumber: HashMap<usize, usize> = HashMap::new();
    let mut kept = Vec::new();
    for line in proof {
        if essential.contains(&line.lnum) {
            renumber.insert(line.lnum, kept.len() + 1);
            kept.push(line);
        }
    }

    kept.into_iter()
        .map(|line| Line {
            lnum: renumber[&line.lnum],
            depth: line.depth,
            tree: line.tree.clone(),
            rule: line.rule.clone(),
            jstlns: line.jstlns.iter().map(|old| renumber[old]).collect(),
            gics: line.gics.clone(),
            gpcs: line.gpcs.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::parse;
    use crate::line::Rule;

    fn line(lnum: usize, depth: usize, s: &str, rule: Rule, jstlns: Vec<usize>) -> Line {
        Line {
            lnum,
            depth,
            tree: parse(s).unwrap(),
            rule,
            jstlns,
            gics: Vec::new(),
            gpcs: Vec::new(),
        }
    }

    #[test]
    fn drops_lines_outside_the_closure() {
        let proof = vec![
            line(1, 0, "A", Rule::Premise, vec![]),
            line(2, 0, "A→B", Rule::Premise, vec![]),
            line(3, 0, "C", Rule::Premise, vec![]),
            line(4, 0, "B", Rule::ThenElim, vec![1, 2]),
        ];
        let simplified = simplify(&proof);
        assert_eq!(simplified.len(), 3);
        let lnums: Vec<usize> = simplified.iter().map(|l| l.lnum).collect();
        assert_eq!(lnums, vec![1, 2, 3]);
        let last = simplified.last().unwrap();
        assert_eq!(last.tree.as_str(), "B");
        assert_eq!(last.jstlns, vec![1, 2]);
    }

    #[test]
    fn empty_proof_simplifies_to_empty() {
        assert!(simplify(&[]).is_empty());
    }
}
