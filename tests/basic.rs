use natded::context::{derive, init_proof, report, simplify};
use natded::formula::Formula;
use natded::reports::Report;

mod basic {
    use super::*;

    #[test]
    fn init_proof_rejects_malformed_input() {
        assert!(init_proof(&["A∧"]).is_err());
    }

    #[test]
    fn init_proof_with_only_a_goal_has_no_premise_lines() {
        let (_goals, proof) = init_proof(&["a=a"]).unwrap();
        assert!(proof.is_empty());
    }

    #[test]
    fn derive_then_simplify_round_trips_a_simple_proof() {
        let (mut goals, mut proof) = init_proof(&["A", "A→B", "B"]).unwrap();
        derive(&mut goals, &mut proof).unwrap();
        let target = Formula::parse("B").unwrap();
        assert_eq!(report(&proof, &target), Report::Proved);

        let simplified = simplify(&proof);
        assert_eq!(simplified.len(), 3);
        let lnums: Vec<usize> = simplified.iter().map(|l| l.lnum).collect();
        assert_eq!(lnums, vec![1, 2, 3]);
    }

    #[test]
    fn report_is_not_proved_when_the_goal_is_unreachable() {
        let (mut goals, mut proof) = init_proof(&["((A→B)→A)→A"]).unwrap();
        derive(&mut goals, &mut proof).unwrap();
        let target = Formula::parse("((A→B)→A)→A").unwrap();
        assert_eq!(report(&proof, &target), Report::NotProved);
    }
}
