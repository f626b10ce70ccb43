#![allow(dead_code)]

use std::ops::AddAssign;

use slotwise::dispatch::{PositionOperator, StopPredicate, TerminalOperator};
use slotwise::hlist::{At, ElementAt};

pub fn init() {
    let _ = dotenv::dotenv();
    let _ = pretty_env_logger::try_init_timed();
}

pub trait Widget {
    const NAME: &'static str;
    const VALUE: i32;
}

#[derive(Debug)]
pub struct FirstWidget;

#[derive(Debug)]
pub struct SecondWidget;

impl Widget for FirstWidget {
    const NAME: &'static str = "First";
    const VALUE: i32 = 0;
}

impl Widget for SecondWidget {
    const NAME: &'static str = "Second";
    const VALUE: i32 = 1;
}

pub type Widgets = (FirstWidget, SecondWidget);

/// Raised by [`WidgetOp`] when invoked with a `bool` argument.
pub struct Flag(pub bool);

/// Names collected by [`WidgetOp`].
pub type Names = Vec<&'static str>;

#[derive(Debug, Default)]
pub struct WidgetOp;

impl<I, E: Widget> PositionOperator<I, E, ()> for WidgetOp {
    type Output = &'static str;

    fn operate(&mut self, _args: &mut ()) -> Self::Output {
        E::NAME
    }
}
impl TerminalOperator<()> for WidgetOp {
    type Output = &'static str;

    fn terminal(&mut self, _len: usize, _args: &mut ()) -> Self::Output {
        "<none>"
    }
}

impl<I, E: Widget> PositionOperator<I, E, i32> for WidgetOp {
    type Output = i32;

    fn operate(&mut self, args: &mut i32) -> Self::Output {
        E::VALUE + *args
    }
}
impl TerminalOperator<i32> for WidgetOp {
    type Output = i32;

    fn terminal(&mut self, len: usize, args: &mut i32) -> Self::Output {
        len as i32 + *args
    }
}

impl<I, E: Widget> PositionOperator<I, E, Flag> for WidgetOp {
    type Output = ();

    fn operate(&mut self, args: &mut Flag) {
        args.0 = true;
    }
}
impl TerminalOperator<Flag> for WidgetOp {
    type Output = ();

    fn terminal(&mut self, _len: usize, _args: &mut Flag) {}
}

impl<I, E: Widget> PositionOperator<I, E, Names> for WidgetOp {
    type Output = ();

    fn operate(&mut self, args: &mut Names) {
        args.push(E::NAME);
    }
}

/// Stops at the widget whose name is the argument.
#[derive(Debug, Default)]
pub struct NameIs;

impl<I, E: Widget> StopPredicate<I, E, &'static str> for NameIs {
    fn should_stop(&mut self, args: &mut &'static str) -> bool {
        E::NAME == *args
    }
}

/// Stops at "Second", whatever the argument.
#[derive(Debug, Default)]
pub struct IsSecond;

impl<I, E: Widget, A> StopPredicate<I, E, A> for IsSecond {
    fn should_stop(&mut self, _args: &mut A) -> bool {
        E::NAME == SecondWidget::NAME
    }
}

/// Adds one to the element at the visited position.
#[derive(Debug, Default)]
pub struct Increment {
    pub visits: usize,
}

impl<I, E, A> PositionOperator<I, E, A> for Increment
where
    A: At<I>,
    <A as ElementAt<I>>::Element: AddAssign + From<u8>,
{
    type Output = ();

    fn operate(&mut self, args: &mut A) {
        self.visits += 1;
        *At::<I>::at_mut(args) += <<A as ElementAt<I>>::Element as From<u8>>::from(1);
    }
}
