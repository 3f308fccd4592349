use crate::lang::token::{Command, Operator};
use crate::lang::ErrorCode;
use crate::mach::{Event, Runtime, Stack};


fn values(runtime: &Runtime) -> Vec<f64> {
    runtime.stack().iter().copied().collect()
}

fn run(runtime: &mut Runtime, s: &str) -> Vec<Event> {
    runtime.enter(s);
    let mut events = vec![];
    loop {
        match runtime.execute() {
            Event::Stopped => break,
            Event::Quit => {
                events.push(Event::Quit);
                break;
            }
            event => events.push(event),
        }
    }
    events
}

fn runtime_with(vals: &[f64]) -> Runtime {
    let mut runtime = Runtime::new();
    for val in vals {
        runtime.exec(Command::Number(*val)).unwrap();
    }
    runtime
}

#[test]
fn test_stack_push_pop() {
    let mut s: Stack<f64> = Stack::default();
    assert!(s.is_empty());
    s.push(1.5);
    s.push(-2.25);
    assert_eq!(s.len(), 2);
    assert_eq!(s.pop(), Some(-2.25));
    assert_eq!(s.pop(), Some(1.5));
    assert_eq!(s.pop(), None);
    assert_eq!(s.len(), 0);
}

#[test]
fn test_stack_pop_2() {
    let mut s: Stack<f64> = Stack::default();
    s.push(1.0);
    assert_eq!(s.pop_2(), None);
    assert_eq!(s.len(), 1);
    s.push(2.0);
    assert_eq!(s.pop_2(), Some((1.0, 2.0)));
    assert!(s.is_empty());
}

#[test]
fn test_stack_render() {
    let mut s: Stack<f64> = Stack::default();
    s.push(1.0);
    s.push(-0.5);
    s.push(1.0 / 3.0);
    s.push(f64::INFINITY);
    s.push(f64::NAN);
    assert_eq!(
        s.render(),
        vec!["1.000000", "-0.500000", "0.333333", "inf", "nan"]
    );
}
