use natded::context::{derive, init_proof, report, simplify};
use natded::formula::Formula;
use natded::reports::Report;

mod scenarios {
    use super::*;

    fn assert_proves(wffs: &[&str]) {
        let (mut goals, mut proof) = init_proof(wffs).unwrap();
        derive(&mut goals, &mut proof).unwrap();
        let target = Formula::parse(wffs.last().unwrap()).unwrap();
        assert_eq!(report(&proof, &target), Report::Proved, "expected {:?} to prove", wffs);
    }

    #[test]
    fn modus_ponens() {
        assert_proves(&["A", "A→B", "B"]);
    }

    #[test]
    fn conjunction_swap() {
        let (mut goals, mut proof) = init_proof(&["A∧B", "B∧A"]).unwrap();
        derive(&mut goals, &mut proof).unwrap();
        let target = Formula::parse("B∧A").unwrap();
        assert_eq!(report(&proof, &target), Report::Proved);

        let simplified = simplify(&proof);
        let uses_and_elim = simplified.iter().any(|l| l.rule.label() == "∧E");
        let uses_and_intro = simplified.iter().any(|l| l.rule.label() == "∧I");
        assert!(uses_and_elim);
        assert!(uses_and_intro);
    }

    #[test]
    fn disjunction_elimination_collapses_three_cases_into_one_line() {
        let (mut goals, mut proof) = init_proof(&["A∨B", "A→C", "B→C", "C"]).unwrap();
        derive(&mut goals, &mut proof).unwrap();
        let target = Formula::parse("C").unwrap();
        assert_eq!(report(&proof, &target), Report::Proved);

        let simplified = simplify(&proof);
        let or_elim_lines = simplified.iter().filter(|l| l.rule.label() == "∨E").count();
        assert_eq!(or_elim_lines, 1);
    }

    #[test]
    fn peirces_law_is_not_provable_by_this_core() {
        let (mut goals, mut proof) = init_proof(&["((A→B)→A)→A"]).unwrap();
        derive(&mut goals, &mut proof).unwrap();
        let target = Formula::parse("((A→B)→A)→A").unwrap();
        assert_eq!(report(&proof, &target), Report::NotProved);
    }

    #[test]
    fn modal_interplay_between_possibility_and_necessity() {
        assert_proves(&["◇A→◻B", "◻(A→B)"]);
    }

    #[test]
    fn universal_instantiation_chains_into_modus_ponens() {
        assert_proves(&["∀x(Px→Qx)", "Pa", "Qa"]);
    }

    #[test]
    fn reflexivity_needs_no_premises() {
        let (mut goals, mut proof) = init_proof(&["a=a"]).unwrap();
        assert!(proof.is_empty());
        derive(&mut goals, &mut proof).unwrap();
        let target = Formula::parse("a=a").unwrap();
        assert_eq!(report(&proof, &target), Report::Proved);
        assert_eq!(proof.len(), 1);
    }
}
