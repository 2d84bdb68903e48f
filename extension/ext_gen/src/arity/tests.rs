use super::*;
use pretty_assertions::assert_eq;

fn values(arities: &[Arity]) -> Vec<usize> {
    arities.iter().map(|a| a.value()).collect()
}

#[test]
fn descending_runs_max_to_zero() {
    assert_eq!(values(&ArityOrder::Descending.arities(2)), vec![2, 1, 0]);
}

#[test]
fn ascending_runs_zero_to_max() {
    assert_eq!(values(&ArityOrder::Ascending.arities(2)), vec![0, 1, 2]);
}

#[test]
fn zero_max_yields_single_arity() {
    let arities = ArityOrder::Descending.arities(0);
    assert_eq!(values(&arities), vec![0]);
    assert!(arities[0].is_max());
}

#[test]
fn only_top_arity_is_max() {
    let arities = ArityOrder::Ascending.arities(3);
    let max_flags: Vec<bool> = arities.iter().map(|a| a.is_max()).collect();
    assert_eq!(max_flags, vec![false, false, false, true]);
    assert!(arities.iter().all(|a| a.max() == 3));
}

#[test]
fn render_blocks_preserves_order() {
    let blocks = render_blocks(4, ArityOrder::Descending, |arity| {
        format!("[{}]", arity.value())
    });
    assert_eq!(blocks, vec!["[4]", "[3]", "[2]", "[1]", "[0]"]);
}

#[test]
fn emit_blocks_concatenates() {
    let text = emit_blocks(2, ArityOrder::Ascending, |arity| {
        format!("{};", arity.params(&["R"]).types())
    });
    assert_eq!(text, "R;R, Param1;R, Param1, Param2;");
}
