/*!
`natded`: a Fitch-style natural-deduction proof search engine.

Given a list of premise formulas and a goal formula, the engine builds a
Fitch-style proof, a numbered sequence of lines organized into nested
assumption subproofs, using a fixed catalogue of introduction/elimination
rules, one pair per logical connective, then prunes the proof down to the
lines the final line actually depends on.

# Guiding principles

- **Modularity**: parsing ([formula]), goal decomposition ([goal]), rule
  application ([rules]), and search ([search]) are independent
  components communicating through plain data (formula trees, goals,
  proof lines) rather than shared mutable state.
- **Documented theory**: each component's doc comments point back to the
  inference rule or algorithm it implements, not just the Rust mechanics.
- **Simple efficiency**: the search is a single-threaded, append-only
  pass over small in-memory vectors. No backtracking, no shared state,
  no I/O in the core; see [crate::search]'s module docs for the
  concurrency model.

# Example

```
use natded::context::{init_proof, derive, simplify};

let (mut goals, mut proof) = init_proof(&["A", "A→B", "B"]).unwrap();
derive(&mut goals, &mut proof).unwrap();
let proof = simplify(&proof);
assert_eq!(proof.last().unwrap().tree.as_str(), "B");
```
*/

pub mod alphabet;
pub mod config;
pub mod context;
pub mod formula;
pub mod goal;
pub mod line;
pub mod reports;
pub mod rules;
pub mod search;
pub mod simplify;
pub mod types;
