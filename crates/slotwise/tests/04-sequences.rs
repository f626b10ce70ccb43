use slotwise::dispatch::{FindIfOperator, IndexOperator};
use slotwise::hlist::{assert_len, len};
use slotwise::HList;

mod common;
use common::*;

type WidgetList = HList![FirstWidget, SecondWidget];

#[test]
fn tuple_and_hlist_dispatch_alike() {
    init();

    assert_len::<Widgets, 2>();
    assert_len::<WidgetList, 2>();
    assert_eq!(len::<Widgets>(), len::<WidgetList>());

    let mut by_tuple = IndexOperator::<Widgets, _>::new(WidgetOp);
    let mut by_list = IndexOperator::<WidgetList, _>::new(WidgetOp);
    for idx in 0..=2 {
        assert_eq!(by_tuple.call(idx, &mut ()), by_list.call(idx, &mut ()));
    }

    let mut find_in_tuple = FindIfOperator::<Widgets, _>::new(NameIs);
    let mut find_in_list = FindIfOperator::<WidgetList, _>::new(NameIs);
    for name in ["First", "Second", "Third"] {
        assert_eq!(find_in_tuple.call(&mut { name }), find_in_list.call(&mut { name }));
    }
}

#[test]
fn operators_are_reusable() {
    init();

    let mut op = IndexOperator::<Widgets, _>::new(WidgetOp);
    let names = [1, 0, 1, 1, 0].map(|idx| op.call(idx, &mut ()));
    assert_eq!(names, ["Second", "First", "Second", "Second", "First"]);

    log::info!("{:?}", op);
    let _op: WidgetOp = op.into_inner();
}
