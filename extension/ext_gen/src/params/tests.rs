use super::*;
use pretty_assertions::assert_eq;

#[test]
fn arity_zero_without_prefix_is_empty_everywhere() {
    let list = ParamList::new(0);
    assert!(list.is_empty());
    assert_eq!(list.header(false), "");
    assert_eq!(list.header(true), "");
    assert_eq!(list.types(), "");
    assert_eq!(list.declarations(), "");
    assert_eq!(list.names(), "");
}

#[test]
fn arity_zero_with_prefix_is_just_the_prefix() {
    let list = ParamList::new(0).with_prefix(&["Interface", "Info"]);
    assert_eq!(list.len(), 2);
    assert_eq!(list.types(), "Interface, Info");
    assert_eq!(list.names(), "Interface, Info");
    assert_eq!(list.header(true), "Interface, Info");
}

#[test]
fn views_for_arity_three() {
    let list = ParamList::new(3);
    assert_eq!(list.header(false), "class Param1, class Param2, class Param3");
    assert_eq!(
        list.header(true),
        "class Param1 = void, class Param2 = void, class Param3 = void"
    );
    assert_eq!(list.types(), "Param1, Param2, Param3");
    assert_eq!(list.declarations(), "Param1 p1, Param2 p2, Param3 p3");
    assert_eq!(list.names(), "p1, p2, p3");
}

#[test]
fn prefix_precedes_slots() {
    let header = ParamList::new(2).with_prefix(&["class Interface", "class Info"]);
    assert_eq!(
        header.header(false),
        "class Interface, class Info, class Param1, class Param2"
    );

    let call = ParamList::new(2).with_prefix(&["int * counter"]);
    assert_eq!(call.declarations(), "int * counter, Param1 p1, Param2 p2");

    let names = ParamList::new(1).with_prefix(&["counter_"]);
    assert_eq!(names.names(), "counter_, p1");
}

#[test]
fn slots_are_ordered_and_one_based() {
    let positions: Vec<usize> = ParamList::new(4).slots().map(Slot::position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4]);
}

#[test]
fn slot_renderings() {
    let slot = Slot::new(5);
    assert_eq!(slot.type_name(), "Param5");
    assert_eq!(slot.value_name(), "p5");
    assert_eq!(slot.declaration(), "Param5 p5");
    assert_eq!(slot.header(false), "class Param5");
    assert_eq!(slot.header(true), "class Param5 = void");
}

#[test]
fn instantiate_omits_empty_argument_list() {
    assert_eq!(instantiate("functor", ""), "functor");
    assert_eq!(instantiate("functor", "R, Param1"), "functor<R, Param1>");
}
