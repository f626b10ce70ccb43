use super::*;
use crate::{hlist, len, ElementOf, Sequence};

type Three = crate::HList![i32, &'static str, f64];

#[test]
fn len_is_counted_from_the_type() {
    assert_eq!(<Nil as HList>::LEN, 0);
    assert_eq!(<Three as HList>::LEN, 3);
    assert_eq!(len::<(u8, u16, u32, u64)>(), 4);
    assert_eq!(len::<()>(), 0);
    assert_eq!(len::<Three>(), <Three as HList>::LEN);
}

#[test]
fn positions_carry_their_value() {
    assert_eq!(Here::INDEX, 0);
    assert_eq!(<There<Here>>::INDEX, 1);
    assert_eq!(<There<There<There<Here>>>>::INDEX, 3);
}

#[test]
fn hlist_macro_builds_front_to_back() {
    let list = hlist![1u8, "two", 3.0f64];
    assert_eq!(list, Cons::new(1u8, Cons::new("two", Cons::new(3.0f64, Nil))));
    assert_eq!(hlist![], Nil);
}

#[test]
fn at_reaches_each_element_with_its_type() {
    let mut list: Three = hlist![-1, "x", 0.5];

    let first: &i32 = At::<Here>::at(&list);
    assert_eq!(*first, -1);

    *At::<There<Here>>::at_mut(&mut list) = "y";
    *At::<There<There<Here>>>::at_mut(&mut list) += 1.0;

    assert_eq!(list, hlist![-1, "y", 1.5]);
}

#[test]
fn tuples_expose_elements_by_position() {
    let mut tuple = (1u8, 'b', "c", 4.0f32);

    assert_eq!(*At::<Here>::at(&tuple), 1);
    assert_eq!(*At::<There<There<Here>>>::at(&tuple), "c");

    *At::<There<Here>>::at_mut(&mut tuple) = 'B';
    *At::<There<There<There<Here>>>>::at_mut(&mut tuple) *= 2.0;
    assert_eq!(tuple, (1, 'B', "c", 8.0));
}

#[test]
fn element_types_agree_between_tuples_and_lists() {
    fn same<A, B>()
    where
        A: Sequence<List = B>,
    {
    }
    same::<(i32, &'static str, f64), Three>();
    same::<(), Nil>();

    let second: ElementOf<(i32, &'static str, f64), There<Here>> = "two";
    let third: ElementOf<Three, There<There<Here>>> = 3.0;
    let _: (&str, f64) = (second, third);
    assert_eq!(
        std::any::type_name::<<(u8, char) as ElementAt<There<Here>>>::Element>(),
        std::any::type_name::<char>(),
    );
}
